//! Transport plugin collaborator.
//!
//! The uplink core never looks inside the transport. It needs two things:
//! a way to turn [`ConnectionOptions`] into a connected session, and a
//! node-info query on that session. [`crate::LndRestTransport`] is the
//! bundled implementation; tests plug in their own.

use async_trait::async_trait;
use uplink_models::{ConnectionOptions, NodeInfo};

/// Failure reported by a transport.
///
/// Cloneable so a single failed handshake can be handed to every caller
/// that was waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// TLS certificate or macaroon could not be loaded or used.
    #[error("bad credentials: {0}")]
    Credentials(String),

    /// The remote end could not be reached.
    #[error("unreachable: {0}")]
    Unreachable(String),

    /// The remote end answered with an error status.
    #[error("rejected with status {status}: {body}")]
    Rejected {
        /// HTTP (or equivalent) status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The remote end answered with something we could not parse.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Builds and connects sessions.
///
/// `connect` covers both construction of the underlying plugin from the
/// options and its connect handshake; it resolves once the session is
/// usable.
#[async_trait]
pub trait TransportPlugin: Send + Sync + 'static {
    /// The connected session type.
    type Session: TransportSession;

    /// Construct a session from `options` and perform the handshake.
    async fn connect(&self, options: &ConnectionOptions) -> Result<Self::Session, TransportError>;
}

/// A connected transport session.
#[async_trait]
pub trait TransportSession: Send + Sync + 'static {
    /// Fetch metadata about the local node.
    async fn get_info(&self) -> Result<NodeInfo, TransportError>;
}
