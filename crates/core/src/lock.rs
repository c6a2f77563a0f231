use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Re-entrancy guard for one form or control.
///
/// Clones share the flag. The lock is held for as long as the returned
/// guard lives, so it is released however the request settles.
#[derive(Debug, Clone, Default)]
pub struct InFlightLock {
    busy: Arc<AtomicBool>,
}

impl InFlightLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct InFlightGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
