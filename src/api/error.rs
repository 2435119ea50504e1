//! API Error Types
//!
//! Everything that can go wrong talking to the server: transport failures,
//! non-2xx statuses, and (de)serialization failures. Callers collapse these
//! into per-operation messages; the detailed cause is only logged.

use std::fmt;

/// Errors returned by the REST api module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network failure, fetch rejection).
    Transport(String),

    /// The server answered with a non-2xx status. Statuses are not
    /// distinguished further; there is no retry.
    Status { status: u16 },

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status } => write!(f, "server returned HTTP {status}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
