//! # Uplink SDK
//!
//! Provisioning and connection handling for a Lightning node's uplink to
//! its parent connector.
//!
//! The SDK provides:
//!
//! * [`SecretDeriver`] — derives the BTP authentication secret and
//!   connection URI from public identity inputs.
//! * [`configure`] — turns operator answers into an [`UplinkConfig`]
//!   record.
//! * [`UplinkConnection`] — lazily connected, single-session wrapper over
//!   a [`TransportPlugin`], with the node-info query on top.
//! * [`LndRestTransport`] — transport over the LND REST gateway.
//! * [`ParentDirectory`] — default parent connectors per network.
//! * [`UplinkError`] — unified error type for all SDK operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use uplink_models::{BalanceThresholds, ChannelName, NodePublicKey, ParentAddress};
//! use uplink_sdk::{configure, ConfigureParams, LndRestTransport, UplinkConnection};
//!
//! # async fn run() -> Result<(), uplink_sdk::UplinkError> {
//! let config = configure(&ConfigureParams {
//!     pubkey: NodePublicKey::new("02abc..."),
//!     host: "10.0.0.2".into(),
//!     tls_cert: "/home/lnd/.lnd/tls.cert".into(),
//!     macaroon: "/home/lnd/.lnd/admin.macaroon".into(),
//!     parent: ParentAddress::new("btp.example.com"),
//!     name: ChannelName::generate(&mut rand::thread_rng()),
//!     balance: BalanceThresholds::default(),
//! })?;
//!
//! let uplink = UplinkConnection::from_config(&config, LndRestTransport);
//! let info = uplink.query_node_info().await?;
//! println!("connected to {}", info.alias);
//! # Ok(())
//! # }
//! ```
//!
//! [`UplinkConfig`]: uplink_models::UplinkConfig

pub mod commands;
pub mod configure;
pub mod connection;
pub mod credentials;
pub mod error;
pub mod lnd;
pub mod parents;
pub mod secret;
pub mod transport;

pub use commands::{commands, CommandOutput, UplinkCommand};
pub use configure::{configure, configure_with, ConfigureParams};
pub use connection::{ConnectionState, UplinkConnection};
pub use credentials::CredentialSource;
pub use error::UplinkError;
pub use lnd::{LndRestTransport, LndSession};
pub use parents::ParentDirectory;
pub use secret::{SecretDeriver, PARENT_BTP_HMAC_KEY};
pub use transport::{TransportError, TransportPlugin, TransportSession};
