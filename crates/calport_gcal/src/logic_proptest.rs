#[cfg(test)]
mod tests {
    use crate::logic::{window_days, EventWindow};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;

    // Helper function to parse RFC3339 string to DateTime<Utc>
    fn parse_datetime(datetime_str: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(datetime_str)
            .expect("Failed to parse RFC3339 datetime")
            .with_timezone(&Utc)
    }

    proptest! {
        // End is exactly `days` whole days after start
        #[test]
        fn test_window_spans_whole_days(
            start_secs in 0i64..4_102_444_800i64, // 1970..2100
            days in 0u32..3650u32
        ) {
            let start = Utc.timestamp_opt(start_secs, 0).unwrap();
            let window = EventWindow::starting_at(start, days).unwrap();

            prop_assert!(window.start <= window.end);
            prop_assert_eq!(window.end - window.start, Duration::days(i64::from(days)));
        }

        // Formatted bounds parse back to the same instants (millisecond precision)
        #[test]
        fn test_window_bounds_are_rfc3339_utc(
            start_millis in 0i64..4_102_444_800_000i64,
            days in 0u32..400u32
        ) {
            let start = Utc.timestamp_millis_opt(start_millis).unwrap();
            let window = EventWindow::starting_at(start, days).unwrap();

            let time_min = window.time_min();
            let time_max = window.time_max();
            prop_assert!(time_min.ends_with('Z'));
            prop_assert!(time_max.ends_with('Z'));
            prop_assert_eq!(parse_datetime(&time_min), window.start);
            prop_assert_eq!(parse_datetime(&time_max), window.end);
        }

        // Every non-negative day count in range is accepted unchanged
        #[test]
        fn test_non_negative_days_accepted(days in 0i64..=u32::MAX as i64) {
            prop_assert_eq!(window_days(Some(days)).unwrap() as i64, days);
        }

        // Every negative day count is rejected
        #[test]
        fn test_negative_days_rejected(days in i64::MIN..0i64) {
            prop_assert!(window_days(Some(days)).is_err());
        }
    }
}
