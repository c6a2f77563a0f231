//! # Office Hours Core
//!
//! Domain types and pure client-side logic for the office-hours scheduling
//! client: clock conversion, form validation, board layout, list reducers
//! and the allow-list toggle. Nothing in this crate performs I/O.

pub mod access;
pub mod board;
pub mod clock;
pub mod errors;
pub mod lock;
pub mod models;
pub mod reducers;
pub mod scope;
pub mod validation;
