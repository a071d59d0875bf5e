//! Node metadata returned by the node-info query.

use serde::{Deserialize, Serialize};

/// Summary of the local Lightning node, as reported by `GET /v1/getinfo`.
///
/// LND's REST gateway omits zero and false values, so every field has a
/// default. Unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NodeInfo {
    /// Identity public key of the node.
    pub identity_pubkey: String,
    /// Human-readable alias.
    pub alias: String,
    /// LND version string.
    pub version: String,
    /// Number of open, active channels.
    pub num_active_channels: u32,
    /// Number of channels pending open or close.
    pub num_pending_channels: u32,
    /// Number of open, inactive channels.
    pub num_inactive_channels: u32,
    /// Number of connected peers.
    pub num_peers: u32,
    /// Best block height seen by the node.
    pub block_height: u32,
    /// Best block hash seen by the node.
    pub block_hash: String,
    /// Whether the wallet is synced to the chain tip.
    pub synced_to_chain: bool,
    /// Whether the node runs on testnet.
    pub testnet: bool,
    /// Public URIs (`pubkey@host:port`) the node advertises.
    pub uris: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sparse_lnd_response() {
        let json = r#"{
            "identity_pubkey": "02abc",
            "alias": "leaf",
            "num_peers": 3,
            "block_height": 812345,
            "synced_to_chain": true,
            "chains": [{"chain": "bitcoin", "network": "mainnet"}]
        }"#;
        let info: NodeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.identity_pubkey, "02abc");
        assert_eq!(info.num_peers, 3);
        assert_eq!(info.num_active_channels, 0);
        assert!(info.synced_to_chain);
        assert!(info.uris.is_empty());
    }
}
