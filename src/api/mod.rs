//! Remote-service boundary for attendance history retrieval.
//!
//! Defines the contract the domain layer consumes: the
//! [`AttendanceGateway`] trait, the raw wire payload it returns, and the
//! typed [`TransportFailure`] it fails with. The concrete HTTP client lives
//! in [`studio`]; the controller only ever sees the trait, which is what
//! keeps the whole history feature testable with in-memory fakes.
//!
//! ## Features
//!
//! - **AttendanceGateway**: Date-bounded history fetch plus current-month
//!   and unbounded convenience calls
//! - **RawAttendance**: Tolerant all-optional payload shape, so one
//!   malformed record never fails a batch
//! - **TransportFailure**: Closed set of transport and HTTP failures,
//!   classified into user messages by [`crate::libs::classifier`]
//! - **ConnectivityProbe**: Host-supplied availability check consulted
//!   before any fetch
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fitlog::api::{AttendanceGateway, StudioApi, StudioConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StudioConfig {
//!     api_url: "https://api.example.com".to_string(),
//!     access_token: None,
//!     timeout_secs: 15,
//! };
//!
//! let client = StudioApi::new(&config);
//! let records = client.fetch_current_month().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::date_range::DateRange;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// API boundary modules
pub mod connectivity;
pub mod studio;

// Re-export the boundary types for easier access from host applications
pub use connectivity::{AssumeAvailable, ConnectivityProbe};
pub use studio::{StudioApi, StudioConfig};

/// Failure raised by a gateway before a usable payload was obtained.
///
/// `Status` covers every response the server answered with a non-success
/// code; the remaining variants cover failures below HTTP. The carried
/// strings are transport diagnostics for logs, not member-facing text.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("server responded with status {code}")]
    Status { code: u16 },

    #[error("host resolution failed: {0}")]
    HostResolution(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("i/o failure: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

/// One attendance entry exactly as the service sends it.
///
/// Every field is optional with a serde default: a record missing a field,
/// or carrying an empty one, still deserializes, and the decision to keep
/// or skip it belongs to the domain mapper in [`crate::libs::record`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAttendance {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
}

/// Retrieval contract for a member's attendance history.
///
/// Implementations fetch the records whose class date falls inside the
/// given inclusive ISO-date bounds; a `None` bound leaves that side
/// unbounded. Record order is the server's and must be preserved.
#[allow(async_fn_in_trait)]
pub trait AttendanceGateway {
    /// Fetches raw history entries between the given ISO dates.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportFailure`] when the service cannot be reached
    /// or answers with a non-success status. Malformed individual records
    /// are not an error here; the payload carries them as-is.
    async fn fetch(&self, from: Option<&str>, to: Option<&str>) -> Result<Vec<RawAttendance>, TransportFailure>;

    /// Fetches the current month of history, up to today.
    async fn fetch_current_month(&self) -> Result<Vec<RawAttendance>, TransportFailure> {
        let range = DateRange::current_month();
        self.fetch(range.from_api().as_deref(), range.to_api().as_deref()).await
    }

    /// Fetches the full history with no date bounds.
    async fn fetch_all(&self) -> Result<Vec<RawAttendance>, TransportFailure> {
        self.fetch(None, None).await
    }
}
