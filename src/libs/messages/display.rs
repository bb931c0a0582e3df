//! Display implementation for fitlog user-facing messages.
//!
//! This module provides the `Display` trait implementation for the `Message`
//! enum, converting structured message data into the sentences a presentation
//! layer shows to members. It is the central text formatting system for every
//! user-facing string in the crate: validation feedback, connectivity and
//! server errors, and date-filter summaries.
//!
//! ## Architecture Overview
//!
//! The display system follows a centralized message management approach:
//! - **Single Source of Truth**: All message text is defined in one location
//! - **Type Safety**: Compile-time verification of message parameter usage
//! - **Internationalization Ready**: Structured for future localization support
//! - **Consistent Formatting**: Uniform tone across validation and error paths
//!
//! ## Message Categories
//!
//! - **Filter Validation Messages**: Rejected date ranges and the rule that
//!   rejected them
//! - **Connectivity Messages**: Offline, timeout, and unreachable-server
//!   conditions detected below the HTTP layer
//! - **HTTP Status Messages**: Per-status sentences for responses the server
//!   answered with an error code
//! - **Filter Description Messages**: Human summaries of the active range
//!   shown above the history list
//!
//! ## Text Formatting Standards
//!
//! All message text follows consistent guidelines:
//! - Complete sentences with natural capitalization
//! - A concrete next step where one exists ("Try again later.")
//! - No technical jargon; status codes appear only in fallback messages
//!
//! ## Usage
//!
//! ```rust
//! use fitlog::libs::messages::Message;
//!
//! let text = Message::SessionExpired.to_string();
//! assert!(text.contains("session has expired"));
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` enum variant into human-readable text.
    ///
    /// Every variant is matched explicitly so that adding a message forces a
    /// formatting decision. Parameters are interpolated with typed formatting;
    /// dates arrive pre-formatted by the `format` module so this impl never
    /// needs chrono.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === FILTER VALIDATION MESSAGES ===
            Message::FilterFromAfterTo => "The 'from' date cannot be after the 'to' date.".to_string(),
            Message::FilterDateInFuture(bound) => format!("The '{}' date cannot be in the future.", bound),
            Message::FilterDateTooOld(bound, min) => format!("The '{}' date cannot be earlier than {}.", bound, min),
            Message::FilterRangeTooWide(span) => format!("The date range cannot exceed {}.", span),

            // === CONNECTIVITY MESSAGES ===
            Message::NoConnection => "No internet connection. Check your network and try again.".to_string(),
            Message::ConnectionTimeout => "The connection timed out. Try again.".to_string(),
            Message::ServerUnreachable => "Could not reach the server. Try again later.".to_string(),
            Message::ConnectionError => "Connection error. Check your network.".to_string(),

            // === HTTP STATUS MESSAGES ===
            Message::RequestInvalid => "Invalid request. Check the selected dates.".to_string(),
            Message::SessionExpired => "Your session has expired. Sign in again.".to_string(),
            Message::PermissionDenied => "You do not have permission to view this history.".to_string(),
            Message::HistoryNotFound => "The requested history could not be found.".to_string(),
            Message::RequestTimedOut => "The request took too long. Try again.".to_string(),
            Message::TooManyRequests => "Too many requests. Wait a moment and try again.".to_string(),
            Message::ServerInternalError => "Internal server error. Try again later.".to_string(),
            Message::ServerTemporarilyUnavailable => "The server is temporarily unavailable.".to_string(),
            Message::ServerUnderMaintenance => "The service is under maintenance. Try again later.".to_string(),
            Message::ServerResponseTimeout => "The server took too long to respond.".to_string(),
            Message::ServerErrorWithCode(code) => format!("Server error ({}). Try again later.", code),
            Message::RequestFailedWithCode(code) => format!("Request failed ({}).", code),
            Message::UnexpectedErrorWithCode(code) => format!("Unexpected error ({}).", code),
            Message::UnexpectedError => "An unexpected error occurred. Try again.".to_string(),

            // === FILTER DESCRIPTION MESSAGES ===
            Message::FilterCurrentMonth => "Current month".to_string(),
            Message::FilterFrom(date) => format!("From {}", date),
            Message::FilterUntil(date) => format!("Until {}", date),
            Message::FilterBetween(from, to) => format!("From {} to {}", from, to),
            Message::FilterNone => "No filter".to_string(),
        };
        write!(f, "{}", text)
    }
}
