//! # Office Hours Client
//!
//! Talks to the office-hours backend and drives the instructor views.
//!
//! ## Architecture
//!
//! - **Config**: environment configuration and view preferences
//! - **Api**: the backend boundary as a trait, plus its reqwest implementation
//! - **Views**: headless controllers for the slot form, weekly board,
//!   allow-list management and account requests
//!
//! Controllers never mutate list state themselves. They return an
//! [`views::Outcome`] carrying the reducer action the host applies.

/// Configuration module for client settings
pub mod config;
/// Backend boundary
pub mod api;
/// HTTP implementation of the backend boundary
pub mod http;
/// Mock backend for tests
pub mod mock;
/// View controllers
pub mod views;

use std::sync::Arc;

use eyre::Result;

/// Builds an HTTP-backed API handle from configuration.
pub fn connect(config: config::ClientConfig) -> Result<Arc<dyn api::OfficeHoursApi>> {
    Ok(Arc::new(http::HttpApi::new(config)?))
}
