//! Options handed to the transport plugin.
//!
//! [`ConnectionOptions`] is the `options` object of the configuration
//! record. Field names are serialized in camelCase to match what the
//! plugin reads.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::identity::NodePublicKey;
use crate::units::btc_to_satoshi;
use crate::uri::ConnectionUri;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Which side of the BTP connection the plugin plays.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Dials out to the parent.
    #[default]
    Client,
}

// ---------------------------------------------------------------------------
// LND credentials
// ---------------------------------------------------------------------------

/// Local LND node access: REST host plus TLS certificate and macaroon.
///
/// `tls_cert_path` and `macaroon_path` hold either a filesystem path or a
/// base64 string; they are resolved when the transport connects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LndCredentials {
    /// Path to (or base64 of) the LND TLS certificate.
    pub tls_cert_path: String,
    /// Path to (or base64 of) the LND admin macaroon.
    pub macaroon_path: String,
    /// LND host, `ip` or `ip:port`.
    pub lnd_host: String,
}

// ---------------------------------------------------------------------------
// BalanceThresholds
// ---------------------------------------------------------------------------

/// Default maximum balance, in BTC.
pub const DEFAULT_MAXIMUM_BTC: &str = ".0005";
/// Default settle-to balance, in BTC.
pub const DEFAULT_SETTLE_TO_BTC: &str = ".0001";
/// Default settlement trigger, in BTC.
pub const DEFAULT_SETTLE_THRESHOLD_BTC: &str = "0.00009";

/// Balance-management thresholds, in satoshi.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceThresholds {
    /// Maximum balance the parent may owe us before packets are rejected.
    pub maximum: u64,
    /// Balance to settle back to.
    pub settle_to: u64,
    /// Balance below which settlement is triggered.
    pub settle_threshold: u64,
}

impl BalanceThresholds {
    /// Build thresholds from decimal BTC amounts.
    ///
    /// Requires `settle_threshold <= settle_to <= maximum`.
    pub fn from_btc(
        maximum: &str,
        settle_to: &str,
        settle_threshold: &str,
    ) -> Result<Self, ModelError> {
        let thresholds = Self {
            maximum: btc_to_satoshi(maximum)?,
            settle_to: btc_to_satoshi(settle_to)?,
            settle_threshold: btc_to_satoshi(settle_threshold)?,
        };
        if thresholds.settle_to > thresholds.maximum {
            return Err(ModelError::InvalidAmount {
                value: settle_to.to_string(),
                reason: "settleTo exceeds maximum".into(),
            });
        }
        if thresholds.settle_threshold > thresholds.settle_to {
            return Err(ModelError::InvalidAmount {
                value: settle_threshold.to_string(),
                reason: "settleThreshold exceeds settleTo".into(),
            });
        }
        Ok(thresholds)
    }
}

impl Default for BalanceThresholds {
    /// `.0005` / `.0001` / `0.00009` BTC.
    fn default() -> Self {
        Self {
            maximum: 50_000,
            settle_to: 10_000,
            settle_threshold: 9_000,
        }
    }
}

// ---------------------------------------------------------------------------
// ConnectionOptions
// ---------------------------------------------------------------------------

/// Configuration bundle passed to the transport plugin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionOptions {
    /// Always [`Role::Client`] for an uplink.
    pub role: Role,
    /// The BTP URI of the parent, including derived credentials.
    pub server: ConnectionUri,
    /// Identity key of the local LND node.
    pub lnd_identity_pubkey: NodePublicKey,
    /// LND host, duplicated at top level for the plugin.
    pub lnd_host: String,
    /// LND access credentials.
    pub lnd: LndCredentials,
    /// Balance thresholds in satoshi.
    pub balance: BalanceThresholds,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{ChannelName, ParentAddress};
    use crate::uri::AuthenticationSecret;

    #[test]
    fn default_thresholds_match_btc_defaults() {
        let parsed = BalanceThresholds::from_btc(
            DEFAULT_MAXIMUM_BTC,
            DEFAULT_SETTLE_TO_BTC,
            DEFAULT_SETTLE_THRESHOLD_BTC,
        )
        .unwrap();
        assert_eq!(parsed, BalanceThresholds::default());
    }

    #[test]
    fn thresholds_must_be_ordered() {
        assert!(BalanceThresholds::from_btc("0.0001", "0.0005", "0.00001").is_err());
        assert!(BalanceThresholds::from_btc("0.0005", "0.0001", "0.0002").is_err());
    }

    #[test]
    fn role_display_and_parse() {
        assert_eq!(Role::Client.to_string(), "client");
        assert_eq!("client".parse::<Role>().unwrap(), Role::Client);
        assert!("server".parse::<Role>().is_err());
    }

    #[test]
    fn options_serialize_camel_case() {
        let options = ConnectionOptions {
            role: Role::Client,
            server: ConnectionUri::new(
                ChannelName::new("abc"),
                AuthenticationSecret::from_hex(&"11".repeat(32)).unwrap(),
                ParentAddress::new("btp.example.com"),
            ),
            lnd_identity_pubkey: NodePublicKey::new("02abc"),
            lnd_host: "10.0.0.2".into(),
            lnd: LndCredentials {
                tls_cert_path: "/tmp/tls.cert".into(),
                macaroon_path: "/tmp/admin.macaroon".into(),
                lnd_host: "10.0.0.2".into(),
            },
            balance: BalanceThresholds::default(),
        };

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["role"], "client");
        assert_eq!(json["lndIdentityPubkey"], "02abc");
        assert_eq!(json["lnd"]["tlsCertPath"], "/tmp/tls.cert");
        assert_eq!(json["balance"]["settleThreshold"], 9_000);
        assert!(json["server"].as_str().unwrap().starts_with("btp+wss://abc:"));

        let back: ConnectionOptions = serde_json::from_value(json).unwrap();
        assert_eq!(back, options);
    }
}
