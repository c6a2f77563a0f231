//! # Client Configuration Module
//!
//! Loads the settings the office-hours client needs from environment
//! variables, providing defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `OFFICEHOURS_API_URL`: Base URL of the backend (required)
//! - `OFFICEHOURS_API_TOKEN`: Bearer token attached to every request
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `OFFICEHOURS_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `OFFICEHOURS_THEME`: `light` or `dark` (default: "light")
//! - `OFFICEHOURS_LANGUAGE`: `en` or `es` (default: "en")

use std::env;
use std::time::Duration;

use eyre::{Result, WrapErr, eyre};
use officehours_core::models::weekday::Weekday;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "es" => Language::Es,
            _ => Language::En,
        }
    }

    /// Column heading for a board day.
    pub fn day_heading(self, day: Weekday) -> &'static str {
        match (self, day) {
            (Language::En, Weekday::Mon) => "Monday",
            (Language::En, Weekday::Tue) => "Tuesday",
            (Language::En, Weekday::Wed) => "Wednesday",
            (Language::En, Weekday::Thu) => "Thursday",
            (Language::En, Weekday::Fri) => "Friday",
            (Language::En, Weekday::Sat) => "Saturday",
            (Language::En, Weekday::Sun) => "Sunday",
            (Language::Es, Weekday::Mon) => "Lunes",
            (Language::Es, Weekday::Tue) => "Martes",
            (Language::Es, Weekday::Wed) => "Miércoles",
            (Language::Es, Weekday::Thu) => "Jueves",
            (Language::Es, Weekday::Fri) => "Viernes",
            (Language::Es, Weekday::Sat) => "Sábado",
            (Language::Es, Weekday::Sun) => "Domingo",
        }
    }

    pub fn no_slots(self) -> &'static str {
        match self {
            Language::En => "No office hours",
            Language::Es => "Sin horario de oficina",
        }
    }
}

/// Presentation preferences handed to every view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewConfig {
    pub theme: Theme,
    pub language: Language,
}

/// Configuration for the office-hours client.
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use officehours_client::config::ClientConfig;
///
/// fn example() -> Result<()> {
///     let config = ClientConfig::from_env()?;
///     println!("Talking to {}", config.api_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash
    pub api_url: String,

    /// Bearer token for the backend (optional)
    pub api_token: Option<String>,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Theme and language for the views
    pub view: ViewConfig,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The OFFICEHOURS_API_URL environment variable is not set
    /// - The OFFICEHOURS_API_URL value is not an http(s) URL
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
            .wrap_err("Failed to load client configuration from environment")
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("OFFICEHOURS_API_URL")
            .ok_or_else(|| eyre!("OFFICEHOURS_API_URL environment variable must be set"))?;
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(eyre!("OFFICEHOURS_API_URL must be an http(s) URL, got {:?}", api_url));
        }

        let api_token = lookup("OFFICEHOURS_API_TOKEN").filter(|token| !token.trim().is_empty());

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let request_timeout = lookup("OFFICEHOURS_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .filter(|seconds| *seconds > 0)
            .unwrap_or(30);

        let view = ViewConfig {
            theme: lookup("OFFICEHOURS_THEME")
                .map(|value| Theme::parse(&value))
                .unwrap_or_default(),
            language: lookup("OFFICEHOURS_LANGUAGE")
                .map(|value| Language::parse(&value))
                .unwrap_or_default(),
        };

        Ok(Self {
            api_url,
            api_token,
            log_level,
            request_timeout,
            view,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Joins an API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}
