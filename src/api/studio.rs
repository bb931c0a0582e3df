//! HTTP gateway for the studio's member API.
//!
//! Implements [`AttendanceGateway`] over the studio backend's REST
//! endpoint. The client is stateless and thread-safe; authentication is a
//! bearer token supplied by the host, since sign-in and token refresh are
//! owned by the surrounding application.
//!
//! ## Endpoint
//!
//! `GET {api_url}/api/v1/history` with optional `from`/`to` ISO-date query
//! parameters. A success body is a JSON array of attendance entries; an
//! empty body counts as an empty array, which some deployments send for
//! members without history.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fitlog::api::{AttendanceGateway, StudioApi, StudioConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StudioConfig {
//!     api_url: "https://api.ritmofit.example".to_string(),
//!     access_token: Some("member-token".to_string()),
//!     timeout_secs: 15,
//! };
//!
//! let client = StudioApi::new(&config);
//! let raws = client.fetch(Some("2025-01-01"), Some("2025-01-31")).await?;
//! # Ok(())
//! # }
//! ```

use super::{AttendanceGateway, RawAttendance, TransportFailure};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Studio member API client.
#[derive(Debug)]
pub struct StudioApi {
    /// HTTP client with connection pooling
    client: Client,
    /// Endpoint and authentication details
    config: StudioConfig,
}

/// Configuration for the studio member API.
///
/// Hosts keep this next to their other settings; see
/// [`crate::libs::config::Config`] for the aggregate they typically load.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StudioConfig {
    /// Base URL of the studio backend, without the `/api/v1` path.
    pub api_url: String,

    /// Bearer token for the signed-in member, when one is available.
    ///
    /// Requests go out unauthenticated without it; the server then
    /// answers 401 and the classifier turns that into a session-expired
    /// message.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    15
}

impl StudioApi {
    /// Creates a new client for the given configuration.
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }
}

impl AttendanceGateway for StudioApi {
    async fn fetch(&self, from: Option<&str>, to: Option<&str>) -> Result<Vec<RawAttendance>, TransportFailure> {
        let url = format!("{}/api/v1/history", self.config.api_url);
        let mut request = self.client.get(&url).timeout(Duration::from_secs(self.config.timeout_secs));

        if let Some(from) = from {
            request = request.query(&[("from", from)]);
        }
        if let Some(to) = to {
            request = request.query(&[("to", to)]);
        }
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        debug!(%url, ?from, ?to, "requesting attendance history");
        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportFailure::Status { code: status.as_u16() });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&body).map_err(|error| TransportFailure::Other(error.to_string()))
    }
}

/// Maps a reqwest error onto the transport failure taxonomy.
///
/// Timeouts are flagged directly by reqwest; connection-level failures are
/// told apart by the `io::Error` kind buried in the source chain, since
/// that is where refused connections and failed host lookups diverge.
fn map_transport_error(error: reqwest::Error) -> TransportFailure {
    if error.is_timeout() {
        return TransportFailure::Timeout(error.to_string());
    }
    if error.is_connect() {
        if let Some(io) = find_io_source(&error) {
            return match io.kind() {
                std::io::ErrorKind::ConnectionRefused => TransportFailure::ConnectionRefused(error.to_string()),
                std::io::ErrorKind::TimedOut => TransportFailure::Timeout(error.to_string()),
                _ => TransportFailure::HostResolution(error.to_string()),
            };
        }
        return TransportFailure::HostResolution(error.to_string());
    }
    if error.is_request() || error.is_body() {
        return TransportFailure::Io(error.to_string());
    }
    TransportFailure::Other(error.to_string())
}

fn find_io_source(error: &reqwest::Error) -> Option<&std::io::Error> {
    let mut source = std::error::Error::source(error);
    while let Some(current) = source {
        if let Some(io) = current.downcast_ref::<std::io::Error>() {
            return Some(io);
        }
        source = current.source();
    }
    None
}
