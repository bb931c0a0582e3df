#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use fitlog::libs::date_range::DateRange;
    use fitlog::libs::validation::{validate, RangeBound, RangePolicy, ValidationError};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 15)
    }

    fn policy() -> RangePolicy {
        RangePolicy::default()
    }

    #[test]
    fn test_accepts_empty_and_single_bound_ranges() {
        assert!(validate(&DateRange::empty(), today(), &policy()).is_ok());
        assert!(validate(&DateRange::new(Some(date(2025, 6, 1)), None), today(), &policy()).is_ok());
        assert!(validate(&DateRange::new(None, Some(date(2025, 6, 10))), today(), &policy()).is_ok());
    }

    #[test]
    fn test_accepts_today_as_a_bound() {
        let range = DateRange::new(Some(today()), Some(today()));
        assert!(validate(&range, today(), &policy()).is_ok());
    }

    #[test]
    fn test_rejects_from_after_to() {
        let range = DateRange::new(Some(date(2025, 6, 10)), Some(date(2025, 6, 5)));
        let error = validate(&range, today(), &policy()).unwrap_err();
        assert_eq!(
            error,
            ValidationError::FromAfterTo {
                from: date(2025, 6, 10),
                to: date(2025, 6, 5),
            }
        );
        assert_eq!(error.message().to_string(), "The 'from' date cannot be after the 'to' date.");
    }

    #[test]
    fn test_inverted_bounds_win_over_future_bounds() {
        // Both bounds are in the future AND inverted; the ordering rule fires first.
        let range = DateRange::new(Some(today() + Duration::days(10)), Some(today() + Duration::days(5)));
        let error = validate(&range, today(), &policy()).unwrap_err();
        assert!(matches!(error, ValidationError::FromAfterTo { .. }));
    }

    #[test]
    fn test_rejects_future_bounds() {
        let tomorrow = today() + Duration::days(1);

        let range = DateRange::new(Some(tomorrow), None);
        let error = validate(&range, today(), &policy()).unwrap_err();
        assert_eq!(
            error,
            ValidationError::InFuture {
                bound: RangeBound::From,
                date: tomorrow,
            }
        );
        assert_eq!(error.message().to_string(), "The 'from' date cannot be in the future.");

        let range = DateRange::new(None, Some(tomorrow));
        let error = validate(&range, today(), &policy()).unwrap_err();
        assert_eq!(
            error,
            ValidationError::InFuture {
                bound: RangeBound::To,
                date: tomorrow,
            }
        );
        assert_eq!(error.message().to_string(), "The 'to' date cannot be in the future.");
    }

    #[test]
    fn test_rejects_bounds_past_the_lookback_limit() {
        let min = date(2020, 6, 15);
        let too_old = min - Duration::days(1);

        let range = DateRange::new(Some(too_old), Some(today()));
        let error = validate(&range, today(), &policy()).unwrap_err();
        assert!(matches!(
            error,
            ValidationError::TooOld {
                bound: RangeBound::From,
                ..
            }
        ));
        assert_eq!(error.message().to_string(), "The 'from' date cannot be earlier than 15/06/2020.");

        let range = DateRange::new(None, Some(too_old));
        let error = validate(&range, today(), &policy()).unwrap_err();
        assert!(matches!(
            error,
            ValidationError::TooOld {
                bound: RangeBound::To,
                ..
            }
        ));
        assert_eq!(error.message().to_string(), "The 'to' date cannot be earlier than 15/06/2020.");
    }

    #[test]
    fn test_accepts_the_earliest_queryable_date_itself() {
        let min = date(2020, 6, 15);
        let range = DateRange::new(Some(min), None);
        assert!(validate(&range, today(), &policy()).is_ok());
    }

    #[test]
    fn test_min_date_clamps_leap_day() {
        let leap_today = date(2024, 2, 29);
        assert_eq!(policy().min_date(leap_today), date(2019, 2, 28));
        assert_eq!(policy().min_date(today()), date(2020, 6, 15));
    }

    #[test]
    fn test_rejects_span_over_the_maximum() {
        let range = DateRange::new(Some(today() - Duration::days(731)), Some(today()));
        let error = validate(&range, today(), &policy()).unwrap_err();
        assert_eq!(error, ValidationError::SpanTooWide { days: 731, max_days: 730 });
        assert_eq!(error.message().to_string(), "The date range cannot exceed 2 years.");
    }

    #[test]
    fn test_accepts_span_exactly_at_the_maximum() {
        let range = DateRange::new(Some(today() - Duration::days(730)), Some(today()));
        assert!(validate(&range, today(), &policy()).is_ok());
    }

    #[test]
    fn test_custom_policy_changes_the_limits() {
        let tight = RangePolicy {
            max_span_days: 30,
            max_lookback_years: 1,
        };

        let wide = DateRange::new(Some(today() - Duration::days(31)), Some(today()));
        let error = validate(&wide, today(), &tight).unwrap_err();
        assert_eq!(error.message().to_string(), "The date range cannot exceed 30 days.");

        let old = DateRange::new(Some(date(2024, 5, 1)), None);
        assert!(matches!(validate(&old, today(), &tight).unwrap_err(), ValidationError::TooOld { .. }));
    }

    #[test]
    fn test_span_label_reads_whole_years() {
        let yearly = RangePolicy {
            max_span_days: 365,
            max_lookback_years: 5,
        };
        let range = DateRange::new(Some(today() - Duration::days(366)), Some(today()));
        let error = validate(&range, today(), &yearly).unwrap_err();
        assert_eq!(error.message().to_string(), "The date range cannot exceed 1 year.");
    }

    #[test]
    fn test_policy_defaults() {
        let policy = RangePolicy::default();
        assert_eq!(policy.max_span_days, 730);
        assert_eq!(policy.max_lookback_years, 5);
    }

    #[test]
    fn test_log_rendering_names_the_bound() {
        let error = ValidationError::InFuture {
            bound: RangeBound::To,
            date: date(2025, 7, 1),
        };
        assert_eq!(error.to_string(), "to bound 2025-07-01 is in the future");
    }
}
