//! Error types for the `uplink-models` crate.
//!
//! All fallible constructors and parsers in this crate return variants of
//! [`ModelError`].

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A required identity field was empty.
    #[error("missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A connection URI did not match `btp+wss://{name}:{secret}@{parent}`.
    #[error("invalid connection URI \"{value}\": {reason}")]
    InvalidUri {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A decimal asset amount could not be converted to minor units.
    #[error("invalid amount \"{value}\": {reason}")]
    InvalidAmount {
        /// The value that failed validation.
        value: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// A network name was neither `live` nor `test`.
    #[error("unknown network \"{0}\"")]
    UnknownNetwork(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_missing_field() {
        let err = ModelError::MissingField {
            field: "parentAddress".into(),
        };
        assert_eq!(err.to_string(), "missing required field: parentAddress");
    }

    #[test]
    fn error_display_invalid_uri() {
        let err = ModelError::InvalidUri {
            value: "http://x".into(),
            reason: "expected btp+wss:// scheme".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid connection URI \"http://x\": expected btp+wss:// scheme"
        );
    }

    #[test]
    fn error_display_invalid_amount() {
        let err = ModelError::InvalidAmount {
            value: "1.123456789".into(),
            reason: "more than 8 fractional digits".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid amount \"1.123456789\": more than 8 fractional digits"
        );
    }
}
