//! Lazily connected uplink to the parent.
//!
//! [`UplinkConnection`] owns at most one transport session. The first
//! caller to find it uninitialized starts the handshake and parks a shared
//! pending future in the slot; callers arriving while it runs await that
//! same future instead of dialing again. A failed handshake empties the
//! slot so the next call starts over.
//!
//! ```text
//! Uninitialized ──get_session──▶ Connecting ──ok──▶ Connected
//!       ▲                            │
//!       └────────────err─────────────┘
//! ```

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uplink_models::{ConnectionOptions, NodeInfo, UplinkConfig};

use crate::error::UplinkError;
use crate::transport::{TransportError, TransportPlugin, TransportSession};

type PendingConnect<S> = Shared<BoxFuture<'static, Result<Arc<S>, TransportError>>>;

/// Observable lifecycle state of an [`UplinkConnection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionState {
    /// No session and no handshake in flight.
    Uninitialized,
    /// A handshake is in flight.
    Connecting,
    /// A session is cached.
    Connected,
}

enum SessionSlot<S> {
    Uninitialized,
    Connecting {
        attempt: u64,
        pending: PendingConnect<S>,
    },
    Connected(Arc<S>),
}

struct SlotState<S> {
    slot: SessionSlot<S>,
    attempts: u64,
}

/// The leaf node's connection to its parent.
///
/// Holds one [`ConnectionOptions`] value for its whole life. Sessions are
/// shared as `Arc`s; every successful [`get_session`](Self::get_session)
/// returns the same one.
pub struct UplinkConnection<T: TransportPlugin> {
    transport: Arc<T>,
    options: Arc<ConnectionOptions>,
    state: Mutex<SlotState<T::Session>>,
}

impl<T: TransportPlugin> UplinkConnection<T> {
    /// Wrap `options`; nothing is dialed until the first query.
    pub fn new(options: ConnectionOptions, transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            options: Arc::new(options),
            state: Mutex::new(SlotState {
                slot: SessionSlot::Uninitialized,
                attempts: 0,
            }),
        }
    }

    /// Build from a stored configuration record.
    pub fn from_config(config: &UplinkConfig, transport: T) -> Self {
        Self::new(config.options.clone(), transport)
    }

    /// The options this connection dials with.
    pub fn options(&self) -> &ConnectionOptions {
        &self.options
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> ConnectionState {
        match self.state.lock().await.slot {
            SessionSlot::Uninitialized => ConnectionState::Uninitialized,
            SessionSlot::Connecting { .. } => ConnectionState::Connecting,
            SessionSlot::Connected(_) => ConnectionState::Connected,
        }
    }

    /// Return the session, connecting first if there is none.
    ///
    /// Concurrent callers share one handshake and all receive the same
    /// session or the same error. On error the connection returns to
    /// [`ConnectionState::Uninitialized`].
    pub async fn get_session(&self) -> Result<Arc<T::Session>, UplinkError> {
        let (attempt, pending) = {
            let mut state = self.state.lock().await;
            let in_flight = match &state.slot {
                SessionSlot::Connected(session) => return Ok(Arc::clone(session)),
                SessionSlot::Connecting { attempt, pending } => Some((*attempt, pending.clone())),
                SessionSlot::Uninitialized => None,
            };
            match in_flight {
                Some((attempt, pending)) => {
                    debug!(attempt, "joining in-flight uplink handshake");
                    (attempt, pending)
                }
                None => {
                    state.attempts += 1;
                    let attempt = state.attempts;
                    let pending = self.start_connect(attempt);
                    state.slot = SessionSlot::Connecting {
                        attempt,
                        pending: pending.clone(),
                    };
                    (attempt, pending)
                }
            }
        };

        let outcome = pending.await;

        let mut state = self.state.lock().await;
        let owns_slot = matches!(
            &state.slot,
            SessionSlot::Connecting { attempt: current, .. } if *current == attempt
        );
        match outcome {
            Ok(session) => {
                if owns_slot {
                    state.slot = SessionSlot::Connected(Arc::clone(&session));
                    info!(
                        attempt,
                        parent = %self.options.server.parent_address(),
                        "uplink connected"
                    );
                }
                Ok(session)
            }
            Err(e) => {
                if owns_slot {
                    state.slot = SessionSlot::Uninitialized;
                    warn!(attempt, error = %e, "uplink handshake failed");
                }
                Err(UplinkError::Connection(e))
            }
        }
    }

    /// Fetch node metadata over the session.
    ///
    /// A query failure leaves the cached session in place.
    pub async fn query_node_info(&self) -> Result<NodeInfo, UplinkError> {
        let session = self.get_session().await?;
        session.get_info().await.map_err(|e| {
            warn!(error = %e, "node info query failed");
            UplinkError::RemoteQuery(e)
        })
    }

    fn start_connect(&self, attempt: u64) -> PendingConnect<T::Session> {
        let transport = Arc::clone(&self.transport);
        let options = Arc::clone(&self.options);
        async move {
            debug!(
                attempt,
                host = %options.lnd_host,
                parent = %options.server.parent_address(),
                "starting uplink handshake"
            );
            transport.connect(&options).await.map(Arc::new)
        }
        .boxed()
        .shared()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
