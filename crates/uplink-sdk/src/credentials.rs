//! LND credential material.
//!
//! The TLS certificate and the admin macaroon may be given either as a
//! path to a file or as the file's contents in base64.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::UplinkError;

/// A credential value as configured: a path or an inline base64 blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSource(String);

impl CredentialSource {
    /// Wrap a configured value.
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Read the credential bytes.
    ///
    /// A readable file wins. Otherwise the value is decoded as standard
    /// base64 (whitespace ignored).
    pub async fn load(&self) -> Result<Vec<u8>, UplinkError> {
        if self.0.is_empty() {
            return Err(UplinkError::Credential("empty credential".into()));
        }

        let read_err = match tokio::fs::read(&self.0).await {
            Ok(bytes) => return Ok(bytes),
            Err(e) => e,
        };

        let compact: String = self.0.chars().filter(|c| !c.is_whitespace()).collect();
        STANDARD.decode(compact).map_err(|decode_err| {
            UplinkError::Credential(format!(
                "not a readable file ({read_err}) and not base64 ({decode_err})"
            ))
        })
    }
}
