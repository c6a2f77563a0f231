use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Message used when the server or transport gives nothing worth showing.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Error payload reported by the backend in `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    Text(String),
    Detail(Value),
}

impl ServerMessage {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => ServerMessage::Text(text),
            other => ServerMessage::Detail(other),
        }
    }
}

impl fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMessage::Text(text) => f.write_str(text),
            ServerMessage::Detail(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Error, Debug)]
pub enum OfficeHoursError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Server(ServerMessage),

    #[error("Unexpected response status: {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl OfficeHoursError {
    /// Text suitable for an inline banner.
    ///
    /// Validation failures and plain-string server errors are shown verbatim;
    /// everything else degrades to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            OfficeHoursError::Validation(message) => message.clone(),
            OfficeHoursError::Server(ServerMessage::Text(text)) if !text.trim().is_empty() => {
                text.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

pub type OfficeHoursResult<T> = Result<T, OfficeHoursError>;
