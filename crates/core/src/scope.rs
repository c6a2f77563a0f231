//! Lifetime tokens for host views.
//!
//! A controller holds a [`ScopeHandle`] taken from the view's [`ViewScope`].
//! Once the scope is closed or dropped every handle reports inactive and
//! responses that settle afterwards are discarded rather than applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub struct ViewScope {
    active: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            active: Arc::clone(&self.active),
        }
    }

    pub fn close(&self) {
        self.active.store(false, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.close();
    }
}

#[derive(Debug, Clone)]
pub struct ScopeHandle {
    active: Arc<AtomicBool>,
}

impl ScopeHandle {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}
