#[derive(Debug, Clone)]
pub enum Message {
    // === FILTER VALIDATION MESSAGES ===
    FilterFromAfterTo,
    FilterDateInFuture(String),        // rejected bound, "from" or "to"
    FilterDateTooOld(String, String),  // rejected bound, earliest queryable date
    FilterRangeTooWide(String),        // allowed span, e.g. "2 years"

    // === CONNECTIVITY MESSAGES ===
    NoConnection,
    ConnectionTimeout,
    ServerUnreachable,
    ConnectionError,

    // === HTTP STATUS MESSAGES ===
    RequestInvalid,
    SessionExpired,
    PermissionDenied,
    HistoryNotFound,
    RequestTimedOut,
    TooManyRequests,
    ServerInternalError,
    ServerTemporarilyUnavailable,
    ServerUnderMaintenance,
    ServerResponseTimeout,
    ServerErrorWithCode(u16),     // status code
    RequestFailedWithCode(u16),   // status code
    UnexpectedErrorWithCode(u16), // status code
    UnexpectedError,

    // === FILTER DESCRIPTION MESSAGES ===
    FilterCurrentMonth,
    FilterFrom(String),            // formatted start date
    FilterUntil(String),           // formatted end date
    FilterBetween(String, String), // formatted start and end dates
    FilterNone,
}
