#[cfg(test)]
mod tests {
    use fitlog::api::TransportFailure;
    use fitlog::libs::classifier::{classify, classify_message, ErrorCategory};

    fn status(code: u16) -> TransportFailure {
        TransportFailure::Status { code }
    }

    #[test]
    fn test_client_statuses_map_to_their_categories() {
        let cases = [
            (400, ErrorCategory::Validation),
            (401, ErrorCategory::Unauthorized),
            (403, ErrorCategory::Forbidden),
            (404, ErrorCategory::NotFound),
            (408, ErrorCategory::Timeout),
            (429, ErrorCategory::RateLimited),
        ];
        for (code, expected) in cases {
            let (category, _) = classify(&status(code));
            assert_eq!(category, expected, "status {}", code);
        }
    }

    #[test]
    fn test_unauthorized_reads_as_expired_session() {
        let message = classify_message(&status(401));
        assert_eq!(message, "Your session has expired. Sign in again.");
    }

    #[test]
    fn test_server_statuses_have_distinct_sentences() {
        for code in [500, 502, 503, 504] {
            let (category, _) = classify(&status(code));
            assert_eq!(category, ErrorCategory::ServerError, "status {}", code);
        }
        assert_eq!(classify_message(&status(500)), "Internal server error. Try again later.");
        assert_eq!(classify_message(&status(502)), "The server is temporarily unavailable.");
        assert_eq!(classify_message(&status(503)), "The service is under maintenance. Try again later.");
        assert_eq!(classify_message(&status(504)), "The server took too long to respond.");
    }

    #[test]
    fn test_uncommon_statuses_carry_their_code() {
        let (category, message) = classify(&status(507));
        assert_eq!(category, ErrorCategory::ServerError);
        assert!(message.to_string().contains("507"));

        let (category, message) = classify(&status(418));
        assert_eq!(category, ErrorCategory::Validation);
        assert!(message.to_string().contains("418"));

        let (category, message) = classify(&status(302));
        assert_eq!(category, ErrorCategory::Unknown);
        assert!(message.to_string().contains("302"));
    }

    #[test]
    fn test_transport_failures_map_by_kind() {
        let (category, _) = classify(&TransportFailure::HostResolution("dns error".to_string()));
        assert_eq!(category, ErrorCategory::NoConnectivity);

        let (category, _) = classify(&TransportFailure::Timeout("deadline elapsed".to_string()));
        assert_eq!(category, ErrorCategory::Timeout);

        let (category, _) = classify(&TransportFailure::ConnectionRefused("tcp connect".to_string()));
        assert_eq!(category, ErrorCategory::ServerUnreachable);

        let (category, _) = classify(&TransportFailure::Io("broken pipe".to_string()));
        assert_eq!(category, ErrorCategory::NoConnectivity);
    }

    #[test]
    fn test_host_resolution_reads_as_no_connection() {
        let message = classify_message(&TransportFailure::HostResolution("dns error".to_string()));
        assert_eq!(message, "No internet connection. Check your network and try again.");
    }

    #[test]
    fn test_untyped_failures_fall_back_to_heuristics() {
        let (category, _) = classify(&TransportFailure::Other("socket timeout while reading".to_string()));
        assert_eq!(category, ErrorCategory::Timeout);

        let (category, _) = classify(&TransportFailure::Other("Network is unreachable".to_string()));
        assert_eq!(category, ErrorCategory::NoConnectivity);

        let (category, message) = classify(&TransportFailure::Other("something odd".to_string()));
        assert_eq!(category, ErrorCategory::Unknown);
        assert_eq!(message.to_string(), "An unexpected error occurred. Try again.");
    }

    #[test]
    fn test_every_category_gets_a_full_sentence() {
        let failures = [
            status(400),
            status(401),
            status(403),
            status(404),
            status(408),
            status(429),
            status(500),
            status(302),
            TransportFailure::HostResolution(String::new()),
            TransportFailure::Timeout(String::new()),
            TransportFailure::ConnectionRefused(String::new()),
            TransportFailure::Io(String::new()),
            TransportFailure::Other("???".to_string()),
        ];
        for failure in &failures {
            let message = classify_message(failure);
            assert!(!message.is_empty(), "{:?} produced an empty message", failure);
            assert!(message.ends_with('.'), "{:?} is not a sentence: {}", failure, message);
        }
    }
}
