//! Calendar-date utilities for leave accounting.
//!
//! Leave durations and conflicts are computed over whole calendar days;
//! [`chrono::NaiveDate`] carries no time-of-day, so no midnight
//! normalization step is needed before comparing.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Returns the number of calendar days spanned by a range, counting
/// both endpoints.
///
/// A single-day range counts as 1. Callers are expected to have
/// validated `start <= end`; an inverted range produces a non-positive
/// count that upstream validation reports as an error.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::engine::inclusive_day_count;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
/// assert_eq!(inclusive_day_count(start, end), 3);
/// assert_eq!(inclusive_day_count(start, start), 1);
/// ```
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Returns true if two closed date ranges share at least one calendar
/// day.
///
/// Touching endpoints count as overlapping: `[a, b]` and `[b, c]`
/// overlap on day `b`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::engine::ranges_overlap;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
/// assert!(ranges_overlap(d(1), d(3), d(3), d(5)));
/// assert!(!ranges_overlap(d(1), d(3), d(4), d(5)));
/// ```
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// The field name is carried into the error so the caller's report
/// names the offending input.
pub fn parse_date(value: &str, field: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_single_day_counts_as_one() {
        let day = make_date("2024-02-01");
        assert_eq!(inclusive_day_count(day, day), 1);
    }

    #[test]
    fn test_three_day_range() {
        assert_eq!(
            inclusive_day_count(make_date("2024-02-01"), make_date("2024-02-03")),
            3
        );
    }

    #[test]
    fn test_count_spans_month_boundary() {
        assert_eq!(
            inclusive_day_count(make_date("2024-01-30"), make_date("2024-02-02")),
            4
        );
    }

    #[test]
    fn test_count_spans_leap_day() {
        // 2024 is a leap year, so February has 29 days.
        assert_eq!(
            inclusive_day_count(make_date("2024-02-28"), make_date("2024-03-01")),
            3
        );
    }

    #[test]
    fn test_inverted_range_is_non_positive() {
        assert_eq!(
            inclusive_day_count(make_date("2024-02-03"), make_date("2024-02-01")),
            -1
        );
    }

    #[test]
    fn test_touching_endpoints_overlap() {
        assert!(ranges_overlap(
            make_date("2024-02-01"),
            make_date("2024-02-03"),
            make_date("2024-02-03"),
            make_date("2024-02-05"),
        ));
    }

    #[test]
    fn test_contained_range_overlaps() {
        assert!(ranges_overlap(
            make_date("2024-02-01"),
            make_date("2024-02-10"),
            make_date("2024-02-04"),
            make_date("2024-02-05"),
        ));
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        assert!(!ranges_overlap(
            make_date("2024-02-01"),
            make_date("2024-02-03"),
            make_date("2024-02-04"),
            make_date("2024-02-05"),
        ));
    }

    #[test]
    fn test_parse_date_accepts_iso_format() {
        assert_eq!(
            parse_date("2024-02-01", "start_date").unwrap(),
            make_date("2024-02-01")
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let result = parse_date("not-a-date", "start_date");
        match result {
            Err(EngineError::InvalidDate { field, value }) => {
                assert_eq!(field, "start_date");
                assert_eq!(value, "not-a-date");
            }
            _ => panic!("Expected InvalidDate error"),
        }
    }

    #[test]
    fn test_parse_date_rejects_impossible_date() {
        assert!(parse_date("2024-02-30", "end_date").is_err());
    }

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (2000i32..2100, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        #[test]
        fn prop_count_matches_span_length(start in arb_date(), span in 0i64..1000) {
            let end = start + Duration::days(span);
            prop_assert_eq!(inclusive_day_count(start, end), span + 1);
        }

        #[test]
        fn prop_ordered_range_counts_at_least_one(start in arb_date(), span in 0i64..1000) {
            let end = start + Duration::days(span);
            prop_assert!(inclusive_day_count(start, end) >= 1);
        }

        #[test]
        fn prop_overlap_is_symmetric(
            a in arb_date(), a_span in 0i64..60,
            b in arb_date(), b_span in 0i64..60,
        ) {
            let a_end = a + Duration::days(a_span);
            let b_end = b + Duration::days(b_span);
            prop_assert_eq!(
                ranges_overlap(a, a_end, b, b_end),
                ranges_overlap(b, b_end, a, a_end)
            );
        }

        #[test]
        fn prop_range_overlaps_itself(start in arb_date(), span in 0i64..60) {
            let end = start + Duration::days(span);
            prop_assert!(ranges_overlap(start, end, start, end));
        }

        #[test]
        fn prop_adjacent_ranges_touch_iff_gap_is_zero(
            start in arb_date(), span in 0i64..60, gap in 0i64..3,
        ) {
            let a_end = start + Duration::days(span);
            let b_start = a_end + Duration::days(gap);
            let b_end = b_start + Duration::days(span);
            prop_assert_eq!(ranges_overlap(start, a_end, b_start, b_end), gap == 0);
        }
    }
}
