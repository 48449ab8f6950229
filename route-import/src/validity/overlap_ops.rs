use chrono::NaiveDate;

use super::{IntervalCandidate, ValidityError, ValidityInterval};

/// outcome of the overlap check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlapCheckResult {
    NoConflict,
    /// the first existing window, in input order, that intersects the
    /// candidate
    Conflict(ValidityInterval),
}

/// checks a candidate window against the existing windows already
/// fetched for the same owning key, skipping at most one window by key
/// when a record is edited against its own prior state.
///
/// the candidate is validated before any comparison: a missing start
/// date or an end date before the start fails fast. this check is
/// advisory, it runs against a possibly stale snapshot and the backend
/// re-validates on write.
pub fn check_overlap(
    candidate: &IntervalCandidate,
    existing: &[ValidityInterval],
    exclude_key: Option<&str>,
) -> Result<OverlapCheckResult, ValidityError> {
    let start = candidate
        .start
        .ok_or(ValidityError::MissingStartDateError)?;
    if let Some(end) = candidate.end {
        if end < start {
            return Err(ValidityError::InvalidRangeError { start, end });
        }
    }
    let candidate_end = candidate.end.unwrap_or(NaiveDate::MAX);

    for interval in existing {
        if exclude_key.is_some_and(|key| key == interval.key) {
            continue;
        }
        // inclusive bounds on both ends
        if !(candidate_end < interval.start || interval.effective_end() < start) {
            return Ok(OverlapCheckResult::Conflict(interval.clone()));
        }
    }
    Ok(OverlapCheckResult::NoConflict)
}

#[cfg(test)]
mod test {
    use super::{check_overlap, OverlapCheckResult};
    use crate::validity::{IntervalCandidate, ValidityError, ValidityInterval};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("invalid test date")
    }

    fn window(key: &str, start: NaiveDate, end: Option<NaiveDate>) -> ValidityInterval {
        ValidityInterval {
            key: key.to_string(),
            start,
            end,
        }
    }

    fn candidate(start: Option<NaiveDate>, end: Option<NaiveDate>) -> IntervalCandidate {
        IntervalCandidate { start, end }
    }

    #[test]
    fn test_adjacent_windows_do_not_conflict() {
        let existing = vec![window("a", date(2024, 1, 1), Some(date(2024, 1, 9)))];
        let result = check_overlap(&candidate(Some(date(2024, 1, 10)), None), &existing, None)
            .expect("check failed");
        assert_eq!(result, OverlapCheckResult::NoConflict);
    }

    #[test]
    fn test_open_candidate_overlapping_bounded_window_conflicts() {
        let existing = vec![window("a", date(2024, 1, 1), Some(date(2024, 1, 9)))];
        let result = check_overlap(&candidate(Some(date(2024, 1, 5)), None), &existing, None)
            .expect("check failed");
        assert_eq!(result, OverlapCheckResult::Conflict(existing[0].clone()));
    }

    #[test]
    fn test_bounded_candidate_inside_open_window_conflicts() {
        let existing = vec![window("a", date(2024, 1, 1), None)];
        let result = check_overlap(
            &candidate(Some(date(2024, 2, 1)), Some(date(2024, 2, 10))),
            &existing,
            None,
        )
        .expect("check failed");
        assert_eq!(result, OverlapCheckResult::Conflict(existing[0].clone()));
    }

    #[test]
    fn test_shared_boundary_day_conflicts() {
        // inclusive bounds: ending on the day another window starts is a
        // conflict
        let existing = vec![window("a", date(2024, 1, 9), Some(date(2024, 1, 20)))];
        let result = check_overlap(
            &candidate(Some(date(2024, 1, 1)), Some(date(2024, 1, 9))),
            &existing,
            None,
        )
        .expect("check failed");
        assert_eq!(result, OverlapCheckResult::Conflict(existing[0].clone()));
    }

    #[test]
    fn test_first_conflict_in_input_order_is_reported() {
        let existing = vec![
            window("a", date(2024, 1, 1), Some(date(2024, 6, 1))),
            window("b", date(2024, 2, 1), Some(date(2024, 7, 1))),
        ];
        let result = check_overlap(&candidate(Some(date(2024, 3, 1)), None), &existing, None)
            .expect("check failed");
        assert_eq!(result, OverlapCheckResult::Conflict(existing[0].clone()));
    }

    #[test]
    fn test_excluded_key_is_skipped() {
        let existing = vec![window("a", date(2024, 1, 1), None)];
        let result = check_overlap(
            &candidate(Some(date(2024, 2, 1)), None),
            &existing,
            Some("a"),
        )
        .expect("check failed");
        assert_eq!(result, OverlapCheckResult::NoConflict);
    }

    #[test]
    fn test_missing_start_fails_before_comparison() {
        let existing = vec![window("a", date(2024, 1, 1), None)];
        let result = check_overlap(&candidate(None, None), &existing, None);
        assert!(matches!(result, Err(ValidityError::MissingStartDateError)));
    }

    #[test]
    fn test_end_before_start_fails_with_invalid_range() {
        let result = check_overlap(
            &candidate(Some(date(2024, 3, 1)), Some(date(2024, 2, 1))),
            &[],
            None,
        );
        assert!(matches!(
            result,
            Err(ValidityError::InvalidRangeError { .. })
        ));
    }

    #[test]
    fn test_interval_overlap_is_symmetric() {
        let a = window("a", date(2024, 1, 1), Some(date(2024, 3, 1)));
        let b = window("b", date(2024, 2, 1), None);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
