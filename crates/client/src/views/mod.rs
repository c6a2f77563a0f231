//! Headless view controllers.
//!
//! Each controller is built with the backend handle, the [`ViewConfig`] and
//! a [`ScopeHandle`] of the view that owns it; the host keeps the form values
//! and list state and applies what the controller returns.
//!
//! [`ViewConfig`]: crate::config::ViewConfig
//! [`ScopeHandle`]: officehours_core::scope::ScopeHandle

use std::convert::Infallible;
use std::fmt::Display;

pub mod account;
pub mod allowed_students;
pub mod slot_board;
pub mod slot_form;

/// How one user action settled.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E = Infallible> {
    /// The server accepted the request.
    Done(T),
    /// Client-side validation failed; nothing was sent.
    Invalid(E),
    /// Transport failure or server-reported error, as banner text.
    Failed(String),
    /// A request from the same control was still in flight.
    Busy,
    /// The owning view closed before the response arrived.
    Discarded,
}

impl<T, E: Display> Outcome<T, E> {
    /// Inline banner text, if this outcome warrants one.
    pub fn banner(&self) -> Option<String> {
        match self {
            Outcome::Invalid(err) => Some(err.to_string()),
            Outcome::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }
}

impl<T, E> Outcome<T, E> {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            _ => None,
        }
    }
}
