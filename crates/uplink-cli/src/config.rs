//! CLI configuration.
//!
//! Defaults come from environment variables; command-line flags override
//! them in `main`.

use std::path::PathBuf;

use uplink_models::Network;

const APP_DIR: &str = "lightning-uplink";
const CONFIG_FILE: &str = "uplink.json";

/// Settings resolved before argument parsing.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the configuration record is written and read.
    pub config_path: PathBuf,
    /// Network whose parent list supplies the default parent.
    pub network: Network,
}

impl CliConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable         | Default                                      |
    /// |------------------|----------------------------------------------|
    /// | `UPLINK_CONFIG`  | `{config_dir}/lightning-uplink/uplink.json`  |
    /// | `UPLINK_NETWORK` | `live`                                       |
    pub fn from_env() -> Self {
        let config_path = std::env::var("UPLINK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());

        let network = std::env::var("UPLINK_NETWORK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            config_path,
            network,
        }
    }
}

/// `{config_dir}/lightning-uplink/uplink.json`, or `./uplink.json` when the
/// platform has no config directory.
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR).join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_config_file() {
        let path = default_config_path();
        assert!(path.ends_with(CONFIG_FILE));
    }

    #[test]
    fn default_network_is_live() {
        assert_eq!(Network::default(), Network::Live);
    }
}
