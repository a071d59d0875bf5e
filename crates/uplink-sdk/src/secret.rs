//! BTP credential derivation.
//!
//! The secret is a keyed commitment to the public inputs, not a random
//! token, so the parent can recompute it from the same fields:
//!
//! ```text
//! intermediate = HMAC-SHA256(key = "parent_btp_uri", parentAddress ‖ channelName)
//! secret       = HMAC-SHA256(key = intermediate,     remoteNodePublicKey)
//! uri          = "btp+wss://" ‖ channelName ‖ ":" ‖ hex(secret) ‖ "@" ‖ parentAddress
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uplink_models::{AuthenticationSecret, ConnectionUri, IdentityInputs};

use crate::error::UplinkError;

type HmacSha256 = Hmac<Sha256>;

/// Static key shared by every leaf and parent.
pub const PARENT_BTP_HMAC_KEY: &str = "parent_btp_uri";

/// Derives authentication secrets and connection URIs.
///
/// Stateless apart from the static key; safe to share across threads.
///
/// # Examples
///
/// ```
/// use uplink_models::IdentityInputs;
/// use uplink_sdk::SecretDeriver;
///
/// let inputs = IdentityInputs::new("02abc", "btp.example.com", "chan");
/// let uri = SecretDeriver::default().connection_uri(&inputs).unwrap();
/// assert!(uri.to_string().starts_with("btp+wss://chan:"));
/// assert!(uri.to_string().ends_with("@btp.example.com"));
/// ```
#[derive(Clone)]
pub struct SecretDeriver {
    key: Vec<u8>,
}

impl Default for SecretDeriver {
    fn default() -> Self {
        Self::with_key(PARENT_BTP_HMAC_KEY)
    }
}

impl std::fmt::Debug for SecretDeriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretDeriver").finish_non_exhaustive()
    }
}

impl SecretDeriver {
    /// Use a static key other than [`PARENT_BTP_HMAC_KEY`].
    pub fn with_key(key: impl AsRef<[u8]>) -> Self {
        Self {
            key: key.as_ref().to_vec(),
        }
    }

    /// Derive the authentication secret for `inputs`.
    pub fn derive_secret(&self, inputs: &IdentityInputs) -> Result<AuthenticationSecret, UplinkError> {
        let digest = self.keyed_mac(inputs)?.finalize().into_bytes();
        Ok(AuthenticationSecret::from_hex(&hex::encode(digest))?)
    }

    /// Derive the secret and assemble the full connection URI.
    pub fn connection_uri(&self, inputs: &IdentityInputs) -> Result<ConnectionUri, UplinkError> {
        let secret = self.derive_secret(inputs)?;
        Ok(ConnectionUri::new(
            inputs.channel_name.clone(),
            secret,
            inputs.parent_address.clone(),
        ))
    }

    /// Check a presented hex secret against the one derived from `inputs`.
    ///
    /// The comparison is constant-time. Malformed hex is a mismatch, not an
    /// error.
    pub fn verify(&self, inputs: &IdentityInputs, presented: &str) -> Result<bool, UplinkError> {
        let mac = self.keyed_mac(inputs)?;
        let Ok(bytes) = hex::decode(presented) else {
            return Ok(false);
        };
        Ok(mac.verify_slice(&bytes).is_ok())
    }

    /// Stage one keyed by the static key, stage two keyed by its output,
    /// returned before finalisation.
    fn keyed_mac(&self, inputs: &IdentityInputs) -> Result<HmacSha256, UplinkError> {
        inputs.validate()?;

        let mut stage_one = new_mac(&self.key)?;
        stage_one.update(inputs.parent_address.as_str().as_bytes());
        stage_one.update(inputs.channel_name.as_str().as_bytes());
        let intermediate_key = stage_one.finalize().into_bytes();

        let mut stage_two = new_mac(&intermediate_key)?;
        stage_two.update(inputs.remote_node_public_key.as_str().as_bytes());
        Ok(stage_two)
    }
}

fn new_mac(key: &[u8]) -> Result<HmacSha256, UplinkError> {
    HmacSha256::new_from_slice(key).map_err(|e| UplinkError::Config(format!("invalid HMAC key: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
