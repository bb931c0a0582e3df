//! Failure classification into user-facing error categories.
//!
//! Every [`TransportFailure`] a gateway can produce maps to exactly one
//! [`ErrorCategory`] and one sentence from the message catalog. The mapping
//! is total: anything unrecognized lands in [`ErrorCategory::Unknown`] with
//! a generic sentence, never a panic. All categories are recoverable by a
//! user-initiated retry, so the category mostly drives wording and
//! analytics, not control flow.
//!
//! ## Status mapping
//!
//! | Status | Category |
//! |--------|----------|
//! | 400 | `Validation` |
//! | 401 | `Unauthorized` |
//! | 403 | `Forbidden` |
//! | 404 | `NotFound` |
//! | 408 | `Timeout` |
//! | 429 | `RateLimited` |
//! | 500, 502, 503, 504 | `ServerError` with distinct sentences |
//! | other 5xx | `ServerError` carrying the code |
//! | other 4xx | `Validation` carrying the code |
//!
//! Failures below HTTP map by transport kind: failed host resolution and
//! generic i/o read as connectivity problems, refused connections as an
//! unreachable server. Untyped failures fall back to substring heuristics
//! over the diagnostic text before giving up as `Unknown`.

use crate::api::TransportFailure;
use crate::libs::messages::Message;

/// Closed set of user-meaningful failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NoConnectivity,
    Timeout,
    ServerUnreachable,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    Validation,
    Unknown,
}

/// Classifies a transport failure into a category and its sentence.
pub fn classify(failure: &TransportFailure) -> (ErrorCategory, Message) {
    match failure {
        TransportFailure::Status { code } => classify_status(*code),
        TransportFailure::HostResolution(_) => (ErrorCategory::NoConnectivity, Message::NoConnection),
        TransportFailure::Timeout(_) => (ErrorCategory::Timeout, Message::ConnectionTimeout),
        TransportFailure::ConnectionRefused(_) => (ErrorCategory::ServerUnreachable, Message::ServerUnreachable),
        TransportFailure::Io(_) => (ErrorCategory::NoConnectivity, Message::ConnectionError),
        TransportFailure::Other(detail) => classify_untyped(detail),
    }
}

/// Classifies a transport failure straight to its rendered sentence.
pub fn classify_message(failure: &TransportFailure) -> String {
    classify(failure).1.to_string()
}

fn classify_status(code: u16) -> (ErrorCategory, Message) {
    match code {
        400 => (ErrorCategory::Validation, Message::RequestInvalid),
        401 => (ErrorCategory::Unauthorized, Message::SessionExpired),
        403 => (ErrorCategory::Forbidden, Message::PermissionDenied),
        404 => (ErrorCategory::NotFound, Message::HistoryNotFound),
        408 => (ErrorCategory::Timeout, Message::RequestTimedOut),
        429 => (ErrorCategory::RateLimited, Message::TooManyRequests),
        500 => (ErrorCategory::ServerError, Message::ServerInternalError),
        502 => (ErrorCategory::ServerError, Message::ServerTemporarilyUnavailable),
        503 => (ErrorCategory::ServerError, Message::ServerUnderMaintenance),
        504 => (ErrorCategory::ServerError, Message::ServerResponseTimeout),
        500..=599 => (ErrorCategory::ServerError, Message::ServerErrorWithCode(code)),
        400..=499 => (ErrorCategory::Validation, Message::RequestFailedWithCode(code)),
        _ => (ErrorCategory::Unknown, Message::UnexpectedErrorWithCode(code)),
    }
}

// Last resort for failures that arrive as bare text.
fn classify_untyped(detail: &str) -> (ErrorCategory, Message) {
    let detail = detail.to_lowercase();
    if detail.contains("timeout") {
        (ErrorCategory::Timeout, Message::ConnectionTimeout)
    } else if detail.contains("network") {
        (ErrorCategory::NoConnectivity, Message::NoConnection)
    } else {
        (ErrorCategory::Unknown, Message::UnexpectedError)
    }
}
