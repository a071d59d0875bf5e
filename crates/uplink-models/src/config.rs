//! The configuration record produced by `configure`.
//!
//! Deployment tooling stores this record and hands `options` to the
//! transport plugin. Everything except `options` is constant for an uplink.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::options::ConnectionOptions;

/// Module name of the transport plugin the record is written for.
pub const PLUGIN_NAME: &str = "ilp-plugin-lightning";
/// Asset code of the uplink.
pub const ASSET_CODE: &str = "BTC";
/// Decimal places between the asset and its minor unit.
pub const ASSET_SCALE: u8 = 8;

// ---------------------------------------------------------------------------
// Relation
// ---------------------------------------------------------------------------

/// Relation of the remote peer to this node.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Relation {
    /// The remote peer is our parent.
    Parent,
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// Which set of parent connectors to draw defaults from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet connectors.
    #[default]
    Live,
    /// Bitcoin testnet connectors.
    Test,
}

impl std::str::FromStr for Network {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" | "mainnet" => Ok(Self::Live),
            "test" | "testnet" => Ok(Self::Test),
            _ => Err(ModelError::UnknownNetwork(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// UplinkConfig
// ---------------------------------------------------------------------------

/// Configuration record for a parent uplink.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UplinkConfig {
    /// Always [`Relation::Parent`].
    pub relation: Relation,
    /// Transport plugin module name.
    pub plugin: String,
    /// Always `"BTC"`.
    pub asset_code: String,
    /// Always `8`.
    pub asset_scale: u8,
    /// Always `false`: the leaf does not advertise routes.
    pub send_routes: bool,
    /// Always `false`: the leaf does not accept route updates.
    pub receive_routes: bool,
    /// Options for the transport plugin.
    pub options: ConnectionOptions,
}

impl UplinkConfig {
    /// Wrap connection options in the constant parent-uplink record.
    pub fn parent(options: ConnectionOptions) -> Self {
        Self {
            relation: Relation::Parent,
            plugin: PLUGIN_NAME.to_string(),
            asset_code: ASSET_CODE.to_string(),
            asset_scale: ASSET_SCALE,
            send_routes: false,
            receive_routes: false,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_parses_aliases() {
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Test);
        assert_eq!("LIVE".parse::<Network>().unwrap(), Network::Live);
        assert!("regtest".parse::<Network>().is_err());
    }

    #[test]
    fn relation_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Relation::Parent).unwrap(), "\"parent\"");
        assert_eq!(Relation::Parent.to_string(), "parent");
        assert!(serde_json::from_str::<Relation>("\"child\"").is_err());
    }
}
