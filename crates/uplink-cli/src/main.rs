//! `uplink` — configure and inspect a Lightning node's parent uplink.
//!
//! Non-interactive: every answer is a flag. `configure` writes the
//! configuration record; `info` connects through it and prints node info.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use uplink_models::{
    BalanceThresholds, ChannelName, Network, NodePublicKey, ParentAddress, UplinkConfig,
    DEFAULT_MAXIMUM_BTC, DEFAULT_SETTLE_THRESHOLD_BTC, DEFAULT_SETTLE_TO_BTC,
};
use uplink_sdk::{
    configure, ConfigureParams, LndRestTransport, ParentDirectory, UplinkCommand,
    UplinkConnection,
};

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "uplink")]
#[command(about = "Lightning parent uplink")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Configuration record path (overrides UPLINK_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive BTP credentials and write the configuration record
    Configure(ConfigureArgs),
    /// Get info about your lnd node
    Info,
}

#[derive(Args, Debug)]
struct ConfigureArgs {
    /// LND identity public key
    #[arg(long)]
    pubkey: String,

    /// LND host IP (optionally with REST port)
    #[arg(long)]
    host: String,

    /// LND TLS certificate (path to file or base64 string)
    #[arg(long)]
    tls_cert: String,

    /// LND admin macaroon (path to file or base64 string)
    #[arg(long)]
    macaroon: String,

    /// BTP host of the parent connector (default: random known parent)
    #[arg(long)]
    parent: Option<String>,

    /// Name to assign to this channel (default: 32 random bytes, base64url)
    #[arg(long)]
    name: Option<String>,

    /// Pick the default parent from testnet connectors
    #[arg(long)]
    testnet: bool,

    /// Maximum balance, in BTC
    #[arg(long, default_value = DEFAULT_MAXIMUM_BTC)]
    maximum: String,

    /// Balance to settle back to, in BTC
    #[arg(long, default_value = DEFAULT_SETTLE_TO_BTC)]
    settle_to: String,

    /// Balance that triggers settlement, in BTC
    #[arg(long, default_value = DEFAULT_SETTLE_THRESHOLD_BTC)]
    settle_threshold: String,

    /// Print the record without writing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = CliConfig::from_env();
    if let Some(path) = cli.config {
        settings.config_path = path;
    }

    match cli.command {
        Commands::Configure(args) => run_configure(args, &settings),
        Commands::Info => run_command(UplinkCommand::Info, &settings).await,
    }
}

fn run_configure(args: ConfigureArgs, settings: &CliConfig) -> Result<()> {
    let network = if args.testnet {
        Network::Test
    } else {
        settings.network
    };

    let parent = match args.parent {
        Some(parent) => ParentAddress::from(parent),
        None => ParentDirectory::from_env()
            .choose_default(network, &mut rand::thread_rng())
            .cloned()
            .with_context(|| format!("no default parent known for network {network}"))?,
    };
    let name = args
        .name
        .map_or_else(|| ChannelName::generate(&mut rand::thread_rng()), ChannelName::from);
    let balance = BalanceThresholds::from_btc(&args.maximum, &args.settle_to, &args.settle_threshold)?;

    let record = configure(&ConfigureParams {
        pubkey: NodePublicKey::from(args.pubkey),
        host: args.host,
        tls_cert: args.tls_cert,
        macaroon: args.macaroon,
        parent,
        name,
        balance,
    })?;

    let json = serde_json::to_string_pretty(&record)?;
    if !args.dry_run {
        write_record(&settings.config_path, &json)?;
        info!(path = %settings.config_path.display(), "configuration written");
    }
    println!("{json}");
    Ok(())
}

async fn run_command(command: UplinkCommand, settings: &CliConfig) -> Result<()> {
    let record = read_record(&settings.config_path)?;
    let uplink = UplinkConnection::from_config(&record, LndRestTransport);

    let output = command
        .execute(&uplink)
        .await
        .with_context(|| format!("`{command}` failed"))?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn write_record(path: &Path, json: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

fn read_record(path: &Path) -> Result<UplinkConfig> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn configure_defaults_to_builtin_thresholds() {
        let cli = Cli::parse_from([
            "uplink", "configure", "--pubkey", "02abc", "--host", "10.0.0.2", "--tls-cert",
            "tls.cert", "--macaroon", "admin.macaroon",
        ]);
        let Commands::Configure(args) = cli.command else {
            panic!("expected configure");
        };
        let balance =
            BalanceThresholds::from_btc(&args.maximum, &args.settle_to, &args.settle_threshold)
                .unwrap();
        assert_eq!(balance, BalanceThresholds::default());
        assert!(args.parent.is_none());
    }

    #[test]
    fn record_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("uplink.json");
        let settings = CliConfig {
            config_path: path.clone(),
            network: Network::Live,
        };
        let args = ConfigureArgs {
            pubkey: "02abc".into(),
            host: "10.0.0.2".into(),
            tls_cert: "tls.cert".into(),
            macaroon: "admin.macaroon".into(),
            parent: Some("btp.example.com".into()),
            name: Some("team:alpha".into()),
            testnet: false,
            maximum: DEFAULT_MAXIMUM_BTC.into(),
            settle_to: DEFAULT_SETTLE_TO_BTC.into(),
            settle_threshold: DEFAULT_SETTLE_THRESHOLD_BTC.into(),
            dry_run: false,
        };

        run_configure(args, &settings).unwrap();
        let record = read_record(&path).unwrap();
        assert_eq!(record.options.server.channel_name().as_str(), "team:alpha");
        assert_eq!(record.options.server.parent_address().as_str(), "btp.example.com");
    }
}
