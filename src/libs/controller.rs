//! Orchestrator for the attendance history screen.
//!
//! `HistoryController` owns the feature's business rules end to end:
//! validating the date range, consulting the connectivity probe, fetching
//! through the gateway, caching the mapped records, re-filtering them
//! locally on filter changes, and publishing every outcome as a single
//! [`UiState`] value. Presentation layers subscribe to the state and range
//! channels and render whatever arrives; they never compute a state of
//! their own.
//!
//! ## State discipline
//!
//! All transitions go through one `tokio::sync::Mutex`'d inner section, so
//! a completing fetch can never interleave with a newer filter adoption.
//! The only suspension point outside the lock is the gateway call itself.
//!
//! ## Stale responses
//!
//! Every fetch is issued under a generation number taken from a counter
//! that each new fetch bumps. When a response arrives, it only applies if
//! its generation still matches the counter; otherwise a newer request has
//! been issued in the meantime and the response is dropped. Last request
//! wins, regardless of arrival order.
//!
//! ## Filter changes are local
//!
//! `set_from_date`, `set_to_date` and `set_range` never touch the network.
//! They validate the candidate range, adopt it, and re-filter the cached
//! records. Only `load`, `refresh`, `retry` and `clear_filter` fetch.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fitlog::api::{AssumeAvailable, StudioApi, StudioConfig};
//! use fitlog::libs::controller::HistoryController;
//!
//! # async fn run() {
//! let config = StudioConfig {
//!     api_url: "https://api.example.com".to_string(),
//!     access_token: None,
//!     timeout_secs: 15,
//! };
//!
//! let controller = HistoryController::start(StudioApi::new(&config), AssumeAvailable).await;
//! let mut states = controller.subscribe_state();
//! println!("{:?}", *states.borrow());
//! # }
//! ```

use crate::api::connectivity::ConnectivityProbe;
use crate::api::AttendanceGateway;
use crate::libs::classifier;
use crate::libs::date_range::DateRange;
use crate::libs::messages::Message;
use crate::libs::record::AttendanceRecord;
use crate::libs::state::UiState;
use crate::libs::validation::{self, RangePolicy};
use chrono::{Local, NaiveDate};
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

/// History screen orchestrator, generic over its gateway and probe.
pub struct HistoryController<G, P> {
    gateway: G,
    probe: P,
    policy: RangePolicy,
    inner: Mutex<Inner>,
    state_tx: watch::Sender<UiState>,
    range_tx: watch::Sender<DateRange>,
}

/// Mutable core guarded by the controller's mutex.
struct Inner {
    range: DateRange,
    cached: Option<Vec<AttendanceRecord>>,
    fetch_seq: u64,
}

impl Inner {
    /// State derived from the cache under the active range.
    ///
    /// No cache means nothing was ever fetched for this screen, which
    /// renders as `Empty`. A range without bounds passes everything
    /// through; otherwise the cached order is kept and only containment
    /// is applied.
    fn filtered_state(&self) -> UiState {
        let Some(cached) = &self.cached else {
            return UiState::Empty;
        };
        if !self.range.has_filter() {
            return UiState::success(cached.clone());
        }
        let filtered: Vec<AttendanceRecord> = cached.iter().filter(|record| self.range.contains(record.date)).cloned().collect();
        UiState::success(filtered)
    }
}

impl<G, P> HistoryController<G, P>
where
    G: AttendanceGateway,
    P: ConnectivityProbe,
{
    /// Creates a controller with the default [`RangePolicy`].
    ///
    /// The range starts at the current month through today and the state
    /// at `Loading`; call [`load`](Self::load) to populate it.
    pub fn new(gateway: G, probe: P) -> Self {
        Self::with_policy(gateway, probe, RangePolicy::default())
    }

    /// Creates a controller with an explicit policy.
    pub fn with_policy(gateway: G, probe: P, policy: RangePolicy) -> Self {
        let range = DateRange::current_month();
        let (state_tx, _) = watch::channel(UiState::loading());
        let (range_tx, _) = watch::channel(range);
        Self {
            gateway,
            probe,
            policy,
            inner: Mutex::new(Inner {
                range,
                cached: None,
                fetch_seq: 0,
            }),
            state_tx,
            range_tx,
        }
    }

    /// Creates a controller and performs the initial load.
    pub async fn start(gateway: G, probe: P) -> Self {
        let controller = Self::new(gateway, probe);
        controller.load().await;
        controller
    }

    /// Subscribes to UI state updates; the receiver holds the latest value.
    pub fn subscribe_state(&self) -> watch::Receiver<UiState> {
        self.state_tx.subscribe()
    }

    /// Subscribes to adopted-range updates.
    pub fn subscribe_range(&self) -> watch::Receiver<DateRange> {
        self.range_tx.subscribe()
    }

    /// Current UI state snapshot.
    pub fn state(&self) -> UiState {
        self.state_tx.borrow().clone()
    }

    /// Currently adopted date range.
    pub async fn current_range(&self) -> DateRange {
        self.inner.lock().await.range
    }

    /// True when the adopted range constrains at least one side.
    pub async fn has_filter(&self) -> bool {
        self.inner.lock().await.range.has_filter()
    }

    /// Human summary of the adopted range for display above the list.
    pub async fn filter_description(&self) -> String {
        self.inner.lock().await.range.description()
    }

    /// Fetches history for the adopted range.
    pub async fn load(&self) {
        self.run_fetch(false).await;
    }

    /// Re-fetches the adopted range for already-presented data.
    pub async fn refresh(&self) {
        self.run_fetch(true).await;
    }

    /// User-initiated retry after an error; same as [`load`](Self::load).
    pub async fn retry(&self) {
        self.load().await;
    }

    /// Moves the lower bound, keeping the upper one.
    ///
    /// An invalid candidate surfaces as an `Error` state and changes
    /// nothing else: the adopted range and the cache stay as they were.
    pub async fn set_from_date(&self, from: NaiveDate) {
        let mut inner = self.inner.lock().await;
        let candidate = DateRange::new(Some(from), inner.range.to);
        self.adopt(&mut inner, candidate);
    }

    /// Moves the upper bound, keeping the lower one.
    pub async fn set_to_date(&self, to: NaiveDate) {
        let mut inner = self.inner.lock().await;
        let candidate = DateRange::new(inner.range.from, Some(to));
        self.adopt(&mut inner, candidate);
    }

    /// Replaces both bounds at once.
    pub async fn set_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        let mut inner = self.inner.lock().await;
        self.adopt(&mut inner, DateRange::new(from, to));
    }

    /// Resets the filter to the current month and reloads from the server.
    pub async fn clear_filter(&self) {
        {
            let mut inner = self.inner.lock().await;
            let range = DateRange::current_month();
            inner.range = range;
            self.range_tx.send_replace(range);
        }
        self.load().await;
    }

    async fn run_fetch(&self, is_refresh: bool) {
        if !self.connectivity_ok().await {
            self.state_tx.send_replace(UiState::error(Message::NoConnection.to_string()));
            return;
        }

        let today = Local::now().date_naive();
        let (seq, from, to) = {
            let mut inner = self.inner.lock().await;
            if let Err(error) = validation::validate(&inner.range, today, &self.policy) {
                debug!(%error, "rejected range before fetch");
                self.state_tx.send_replace(UiState::error(error.message().to_string()));
                return;
            }
            inner.fetch_seq += 1;
            self.state_tx.send_replace(UiState::Loading { is_refresh });
            (inner.fetch_seq, inner.range.from_api(), inner.range.to_api())
        };

        let result = self.gateway.fetch(from.as_deref(), to.as_deref()).await;

        let mut inner = self.inner.lock().await;
        if inner.fetch_seq != seq {
            debug!(seq, current = inner.fetch_seq, "dropping stale fetch result");
            return;
        }
        match result {
            Ok(raws) => {
                let total = raws.len();
                let records: Vec<AttendanceRecord> = raws.into_iter().filter_map(AttendanceRecord::from_raw).collect();
                if records.len() < total {
                    debug!(skipped = total - records.len(), "skipped malformed attendance entries");
                }
                inner.cached = Some(records);
                self.state_tx.send_replace(inner.filtered_state());
            }
            Err(failure) => {
                let (category, message) = classifier::classify(&failure);
                warn!(?category, %failure, "history fetch failed");
                self.state_tx.send_replace(UiState::error(message.to_string()));
            }
        }
    }

    /// Validates and adopts a candidate range, re-filtering the cache.
    ///
    /// Runs entirely under the inner lock so the adoption and its state
    /// emission are atomic with respect to completing fetches.
    fn adopt(&self, inner: &mut Inner, candidate: DateRange) {
        let today = Local::now().date_naive();
        match validation::validate(&candidate, today, &self.policy) {
            Ok(()) => {
                inner.range = candidate;
                self.range_tx.send_replace(candidate);
                self.state_tx.send_replace(inner.filtered_state());
            }
            Err(error) => {
                debug!(%error, "rejected filter change");
                self.state_tx.send_replace(UiState::error(error.message().to_string()));
            }
        }
    }

    // Probe errors fail open; the fetch will produce a precise failure if
    // the network really is down.
    async fn connectivity_ok(&self) -> bool {
        match self.probe.is_available().await {
            Ok(available) => available,
            Err(error) => {
                debug!(%error, "connectivity probe failed, assuming available");
                true
            }
        }
    }
}
