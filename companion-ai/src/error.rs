//! Error types for model provider operations.

use std::fmt;

/// Provider-agnostic error type; every provider implementation maps its native
/// failures onto these variants so callers never see provider-specific errors.
#[derive(Debug)]
pub enum Error {
    /// The provider rejected the credentials (HTTP 401/403 or equivalent).
    Authentication(String),

    /// Connection, DNS or TLS failure before a response was received.
    Network(String),

    /// The client could not be built from the supplied settings.
    Configuration(String),

    /// The provider answered with an error status or a business-level failure.
    /// Carries the provider's own message so it can be surfaced to callers.
    Provider(String),

    /// The call exceeded the configured timeout.
    Timeout(String),

    /// The response body did not have the expected shape.
    Deserialization(String),

    /// Catch-all for errors that don't fit other categories.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Human readable message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Authentication(msg)
            | Error::Network(msg)
            | Error::Configuration(msg)
            | Error::Provider(msg)
            | Error::Timeout(msg)
            | Error::Deserialization(msg) => msg.clone(),
            Error::Other(err) => err.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::Other(err) => write!(f, "Other error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
