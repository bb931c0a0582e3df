//! Core library modules for the fitlog crate.
//!
//! Serves as the main entry point for the attendance-history domain logic,
//! everything above the API boundary in [`crate::api`].
//!
//! ## Features
//!
//! - **Filtering**: Date range value type, validation rules, query policy
//! - **Records**: Attendance entity with display formatting and payload mapping
//! - **Orchestration**: History controller and the UI state machine it drives
//! - **Errors**: Failure classification and the user-facing message catalog
//!
//! ## Usage
//!
//! ```rust
//! use fitlog::libs::date_range::DateRange;
//! use fitlog::libs::state::UiState;
//!
//! let range = DateRange::current_month();
//! assert!(range.has_filter());
//! assert!(UiState::default().is_loading());
//! ```

pub mod classifier;
pub mod config;
pub mod controller;
pub mod date_range;
pub mod format;
pub mod messages;
pub mod record;
pub mod state;
pub mod validation;
