#[cfg(test)]
mod tests {
    use fitlog::api::RawAttendance;
    use fitlog::libs::record::AttendanceRecord;
    use fitlog::libs::state::UiState;

    fn record(id: &str) -> AttendanceRecord {
        AttendanceRecord::from_raw(RawAttendance {
            id: Some(id.to_string()),
            class_name: Some("Yoga".to_string()),
            venue: Some("Caballito".to_string()),
            date: Some("2025-01-15".to_string()),
            time: Some("19:00".to_string()),
            duration_minutes: Some(45),
        })
        .unwrap()
    }

    #[test]
    fn test_success_with_no_records_folds_to_empty() {
        assert_eq!(UiState::success(Vec::new()), UiState::Empty);
    }

    #[test]
    fn test_success_keeps_records_in_order() {
        let state = UiState::success(vec![record("a"), record("b")]);
        assert!(state.is_success());
        let ids: Vec<&str> = state.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_loading_predicates_distinguish_refresh() {
        let initial = UiState::loading();
        assert!(initial.is_loading());
        assert!(!initial.is_refreshing());

        let refresh = UiState::refreshing();
        assert!(refresh.is_loading());
        assert!(refresh.is_refreshing());
    }

    #[test]
    fn test_exactly_one_predicate_holds_per_state() {
        let states = [
            UiState::loading(),
            UiState::success(vec![record("a")]),
            UiState::Empty,
            UiState::error("boom"),
        ];
        for state in &states {
            let flags = [state.is_loading(), state.is_success(), state.is_empty(), state.is_error()];
            assert_eq!(flags.iter().filter(|flag| **flag).count(), 1, "{:?}", state);
        }
    }

    #[test]
    fn test_records_are_empty_outside_success() {
        assert!(UiState::loading().records().is_empty());
        assert!(UiState::Empty.records().is_empty());
        assert!(UiState::error("boom").records().is_empty());
    }

    #[test]
    fn test_error_message_accessor() {
        assert_eq!(UiState::error("no luck").error_message(), Some("no luck"));
        assert_eq!(UiState::Empty.error_message(), None);
    }

    #[test]
    fn test_default_is_the_initial_loader() {
        assert_eq!(UiState::default(), UiState::Loading { is_refresh: false });
    }
}
