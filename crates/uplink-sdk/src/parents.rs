//! Default parent connectors.
//!
//! When the operator does not name a parent, one is picked at random from
//! a static list for the chosen network. The choice only supplies
//! `parentAddress`; derivation itself is deterministic.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use uplink_models::{Network, ParentAddress};

// Placeholders on the reserved example.net domain; deployments set the
// UPLINK_PARENTS_* variables.
const LIVE_PARENTS: &[&str] = &["parent-a.example.net", "parent-b.example.net"];

const TEST_PARENTS: &[&str] = &["testnet-parent.example.net"];

/// Parent connectors available per network.
#[derive(Debug, Clone)]
pub struct ParentDirectory {
    parents: HashMap<Network, Vec<ParentAddress>>,
}

impl Default for ParentDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ParentDirectory {
    /// The compiled-in connector lists.
    pub fn builtin() -> Self {
        let mut parents = HashMap::new();
        parents.insert(Network::Live, to_addresses(LIVE_PARENTS));
        parents.insert(Network::Test, to_addresses(TEST_PARENTS));
        Self { parents }
    }

    /// Built-in lists, overridden per network by environment variables.
    ///
    /// | Variable              | Description                                 |
    /// |-----------------------|---------------------------------------------|
    /// | `UPLINK_PARENTS_LIVE` | Comma-separated parent hosts for `live`     |
    /// | `UPLINK_PARENTS_TEST` | Comma-separated parent hosts for `test`     |
    pub fn from_env() -> Self {
        let mut directory = Self::builtin();
        for (network, var) in [
            (Network::Live, "UPLINK_PARENTS_LIVE"),
            (Network::Test, "UPLINK_PARENTS_TEST"),
        ] {
            if let Ok(value) = std::env::var(var) {
                let hosts: Vec<&str> = value.split(',').collect();
                directory = directory.with_parents(network, &hosts);
            }
        }
        directory
    }

    /// Replace the list for `network`. Blank entries are dropped.
    #[must_use]
    pub fn with_parents(mut self, network: Network, hosts: &[&str]) -> Self {
        self.parents.insert(network, to_addresses(hosts));
        self
    }

    /// All parents known for `network`.
    pub fn parents(&self, network: Network) -> &[ParentAddress] {
        self.parents
            .get(&network)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Pick a parent for `network` uniformly at random.
    pub fn choose_default<R: Rng + ?Sized>(
        &self,
        network: Network,
        rng: &mut R,
    ) -> Option<&ParentAddress> {
        self.parents(network).choose(rng)
    }
}

fn to_addresses(hosts: &[&str]) -> Vec<ParentAddress> {
    hosts
        .iter()
        .map(|h| h.trim())
        .filter(|h| !h.is_empty())
        .map(ParentAddress::new)
        .collect()
}
