//! SDK error types.
//!
//! [`UplinkError`] is the single error type returned by every fallible
//! operation in the SDK. Validation failures are raised before any
//! derivation; connection and query failures carry the transport's
//! [`TransportError`] unmodified.

use uplink_models::ModelError;

use crate::transport::TransportError;

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum UplinkError {
    /// Malformed or missing input, caught before derivation.
    #[error("validation failed: {0}")]
    Validation(#[from] ModelError),

    /// The transport could not establish a session. The connection is
    /// left uninitialized and may be retried.
    #[error("connection failed: {0}")]
    Connection(TransportError),

    /// A session exists but a query on it failed. The session is kept.
    #[error("remote query failed: {0}")]
    RemoteQuery(TransportError),

    /// A credential could be read neither as a file nor as base64.
    #[error("credential error: {0}")]
    Credential(String),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UplinkError {
    /// Whether calling the failed operation again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::RemoteQuery(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_wraps_model_error() {
        let err: UplinkError = ModelError::MissingField {
            field: "parentAddress".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "validation failed: missing required field: parentAddress"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn connection_errors_are_retryable() {
        let err = UplinkError::Connection(TransportError::Unreachable("refused".into()));
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "connection failed: unreachable: refused");
    }
}
