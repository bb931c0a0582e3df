//! # Fitlog - Fitness Class Attendance History
//!
//! Client-side core for an attendance-history feature: retrieves a
//! member's class history from a remote service, applies validated
//! date-range filtering, and exposes the result as a deterministic UI
//! state machine any presentation layer can render.
//!
//! ## Features
//!
//! - **Date Filtering**: Optional-bounded ranges with ordering, lookback,
//!   and span validation
//! - **Retrieval**: Gateway abstraction with a reqwest reference client
//! - **Error Classification**: Transport and HTTP failures mapped to a
//!   closed category set with ready-to-display messages
//! - **State Machine**: Loading, success, empty, and error states
//!   published over watch channels; stale responses dropped
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fitlog::api::{AssumeAvailable, StudioApi, StudioConfig};
//! use fitlog::libs::controller::HistoryController;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = StudioConfig {
//!         api_url: "https://api.example.com".to_string(),
//!         access_token: None,
//!         timeout_secs: 15,
//!     };
//!
//!     let controller = HistoryController::start(StudioApi::new(&config), AssumeAvailable).await;
//!     println!("{:?}", controller.state());
//! }
//! ```

pub mod api;
pub mod libs;
