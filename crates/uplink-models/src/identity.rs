//! Identity and naming inputs for secret derivation.
//!
//! Three public values determine the credentials of an uplink:
//!
//! - [`NodePublicKey`] — the identity key of the local LND node, as declared
//!   to the parent.
//! - [`ParentAddress`] — the BTP host of the parent connector.
//! - [`ChannelName`] — a label for this channel, sent as the URI username.
//!
//! None of them is secret. [`IdentityInputs`] bundles them for derivation.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Number of random bytes in a generated channel name.
pub const CHANNEL_NAME_BYTES: usize = 32;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new value from a string slice.
            pub fn new(value: &str) -> Self {
                Self(value.to_string())
            }

            /// Return the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the inner string is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

string_newtype!(
    /// Identity public key of the local LND node (hex, usually 66 chars).
    ///
    /// Treated as an opaque string: the parent recomputes the secret from
    /// the exact bytes it was given.
    NodePublicKey
);

string_newtype!(
    /// BTP host of the parent connector (e.g. `btp.example.com`).
    ///
    /// # Examples
    ///
    /// ```
    /// use uplink_models::ParentAddress;
    ///
    /// let parent: ParentAddress = "btp.example.com".into();
    /// assert_eq!(parent.to_string(), "btp.example.com");
    /// ```
    ParentAddress
);

string_newtype!(
    /// Label assigned to this channel; the username of the connection URI.
    ///
    /// May be empty. An empty name is still a valid input to derivation.
    ChannelName
);

impl ChannelName {
    /// Generate a fresh channel name: 32 random bytes, URL-safe base64
    /// without padding.
    ///
    /// ```
    /// use uplink_models::ChannelName;
    ///
    /// let name = ChannelName::generate(&mut rand::thread_rng());
    /// assert_eq!(name.as_str().len(), 43);
    /// ```
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; CHANNEL_NAME_BYTES];
        rng.fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }
}

// ---------------------------------------------------------------------------
// IdentityInputs
// ---------------------------------------------------------------------------

/// Everything secret derivation needs apart from the shared static key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdentityInputs {
    /// Identity key of the local node, declared to the parent.
    pub remote_node_public_key: NodePublicKey,
    /// BTP host of the parent connector.
    pub parent_address: ParentAddress,
    /// Channel label. Defaults to the empty string when absent.
    #[serde(default)]
    pub channel_name: ChannelName,
}

impl IdentityInputs {
    /// Bundle the three public inputs.
    pub fn new(
        remote_node_public_key: impl Into<NodePublicKey>,
        parent_address: impl Into<ParentAddress>,
        channel_name: impl Into<ChannelName>,
    ) -> Self {
        Self {
            remote_node_public_key: remote_node_public_key.into(),
            parent_address: parent_address.into(),
            channel_name: channel_name.into(),
        }
    }

    /// Reject inputs that would produce a degenerate secret.
    ///
    /// `parentAddress` and `remoteNodePublicKey` must be non-empty;
    /// `channelName` may be empty.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.parent_address.as_str().trim().is_empty() {
            return Err(ModelError::MissingField {
                field: "parentAddress".into(),
            });
        }
        if self.remote_node_public_key.as_str().trim().is_empty() {
            return Err(ModelError::MissingField {
                field: "remoteNodePublicKey".into(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
