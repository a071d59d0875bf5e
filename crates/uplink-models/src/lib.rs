#![deny(missing_docs)]

//! # Uplink Models
//!
//! Core data types for provisioning a Lightning "uplink": the connection a
//! leaf node opens to its parent routing node.
//!
//! ## Value flow
//!
//! ```text
//! IdentityInputs ──derive──▶ ConnectionUri
//!                                │
//!                                ▼
//!                        ConnectionOptions ──▶ UplinkConfig (JSON record)
//!                                │
//!                                ▼
//!                        UplinkConnection ──▶ NodeInfo
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identity`] | `NodePublicKey`, `ParentAddress`, `ChannelName`, `IdentityInputs` |
//! | [`uri`] | `ConnectionUri` (BTP wire format) |
//! | [`options`] | `ConnectionOptions`, LND credentials, balance thresholds |
//! | [`config`] | `UplinkConfig`, the record consumed by deployment tooling |
//! | [`node_info`] | `NodeInfo` returned by the node-info query |
//! | [`units`] | Decimal BTC → satoshi conversion |

pub mod config;
pub mod error;
pub mod identity;
pub mod node_info;
pub mod options;
pub mod units;
pub mod uri;

// Re-export all public types at crate root for convenience.
pub use config::*;
pub use error::*;
pub use identity::*;
pub use node_info::*;
pub use options::*;
pub use uri::*;
