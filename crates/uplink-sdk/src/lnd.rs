//! LND REST transport.
//!
//! Talks to the local node's REST gateway over HTTPS, trusting the node's
//! self-signed certificate and authenticating every request with the hex
//! macaroon header. The handshake is a `GET /v1/getinfo`.

use async_trait::async_trait;
use tracing::{debug, warn};
use uplink_models::{ConnectionOptions, NodeInfo, NodePublicKey};

use crate::credentials::CredentialSource;
use crate::transport::{TransportError, TransportPlugin, TransportSession};

/// Port of the LND REST gateway when the host does not name one.
pub const DEFAULT_REST_PORT: u16 = 8080;

const MACAROON_HEADER: &str = "Grpc-Metadata-macaroon";

/// Connects to LND's REST gateway with the credentials in the options.
#[derive(Debug, Clone, Default)]
pub struct LndRestTransport;

/// An authenticated REST session with one LND node.
pub struct LndSession {
    http: reqwest::Client,
    base_url: String,
    macaroon_hex: String,
}

impl LndSession {
    fn new(http: reqwest::Client, base_url: String, macaroon: &[u8]) -> Self {
        Self {
            http,
            base_url,
            macaroon_hex: hex::encode(macaroon),
        }
    }

    /// `GET /v1/getinfo`, warning when the node is not the one configured.
    async fn handshake(&self, expected: &NodePublicKey) -> Result<NodeInfo, TransportError> {
        let info = self.get_info().await?;
        if info.identity_pubkey != expected.as_str() {
            warn!(
                configured = %expected,
                reported = %info.identity_pubkey,
                "LND identity key differs from the configured pubkey"
            );
        }
        debug!(base_url = %self.base_url, alias = %info.alias, "LND session ready");
        Ok(info)
    }

    /// Base URL requests are sent to, e.g. `https://10.0.0.2:8080`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "LND request");

        let res = self
            .http
            .get(&url)
            .header(MACAROON_HEADER, &self.macaroon_hex)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        res.json()
            .await
            .map_err(|e| TransportError::Protocol(e.to_string()))
    }
}

#[async_trait]
impl TransportSession for LndSession {
    async fn get_info(&self) -> Result<NodeInfo, TransportError> {
        self.get_json("/v1/getinfo").await
    }
}

#[async_trait]
impl TransportPlugin for LndRestTransport {
    type Session = LndSession;

    async fn connect(&self, options: &ConnectionOptions) -> Result<LndSession, TransportError> {
        let credential_error = |e: crate::UplinkError| TransportError::Credentials(e.to_string());

        let cert_bytes = CredentialSource::new(&options.lnd.tls_cert_path)
            .load()
            .await
            .map_err(credential_error)?;
        let macaroon = CredentialSource::new(&options.lnd.macaroon_path)
            .load()
            .await
            .map_err(credential_error)?;

        let certificate = reqwest::Certificate::from_pem(&cert_bytes)
            .or_else(|_| reqwest::Certificate::from_der(&cert_bytes))
            .map_err(|e| TransportError::Credentials(format!("invalid TLS certificate: {e}")))?;

        let http = reqwest::Client::builder()
            .add_root_certificate(certificate)
            .build()
            .map_err(|e| TransportError::Credentials(e.to_string()))?;

        let session = LndSession::new(http, rest_base_url(&options.lnd.lnd_host), &macaroon);
        session.handshake(&options.lnd_identity_pubkey).await?;
        Ok(session)
    }
}

/// `https://{host}`, adding [`DEFAULT_REST_PORT`] when `host` has no port.
pub fn rest_base_url(host: &str) -> String {
    let host = host
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    let has_port = match host.rsplit_once(':') {
        // Bracketed IPv6 literal: only a colon after `]` is a port.
        Some((head, port)) if host.starts_with('[') => {
            head.ends_with(']') && port.bytes().all(|b| b.is_ascii_digit())
        }
        Some((head, port)) => !head.contains(':') && port.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    };
    if has_port {
        format!("https://{host}")
    } else {
        format!("https://{host}:{DEFAULT_REST_PORT}")
    }
}
