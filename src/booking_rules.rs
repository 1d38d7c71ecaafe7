//! Pure decision rules for booking conflict resolution.
//!
//! A spot's bookable state is derived from two loosely-synchronized sources:
//! the owner-maintained availability calendar (explicit per-date flags) and
//! the ledger of already-booked ranges. These functions answer the
//! eligibility question for a proposed range without touching the database;
//! the booking repository evaluates them inside a serializable transaction
//! so concurrent requests cannot both pass.
//!
//! All ranges are inclusive on both ends.

use chrono::{Days, NaiveDate};

use crate::models::{AvailabilityEntry, BookingRange};

/// Inclusive date range of a proposed booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Iterates every calendar date in the range, inclusive.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let mut current = Some(self.start);
        let end = self.end;
        std::iter::from_fn(move || {
            let date = current?;
            if date > end {
                return None;
            }
            current = date.checked_add_days(Days::new(1));
            Some(date)
        })
    }

    /// Whether a calendar date falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Overlap test for two inclusive ranges.
///
/// Touching endpoints conflict: a booking ending on a date blocks another
/// starting on that same date.
pub fn ranges_conflict(a: DateRange, b: DateRange) -> bool {
    !(a.end < b.start || a.start > b.end)
}

/// Returns the dates in `range` that an explicit calendar entry blocks.
///
/// A date is blocked only when an entry for it exists with
/// `is_available = false`. Dates with no entry are unconstrained and never
/// appear in the result, so an empty calendar blocks nothing.
pub fn blocked_dates(entries: &[AvailabilityEntry], range: DateRange) -> Vec<NaiveDate> {
    let mut blocked: Vec<NaiveDate> = entries
        .iter()
        .filter(|e| !e.is_available && range.contains(e.date))
        .map(|e| e.date)
        .collect();
    blocked.sort_unstable();
    blocked.dedup();
    blocked
}

/// Whether any existing booking range conflicts with the proposal.
pub fn has_overlap(existing: &[BookingRange], proposal: DateRange) -> bool {
    existing.iter().any(|b| {
        DateRange::new(b.start_date, b.end_date)
            .is_some_and(|range| ranges_conflict(range, proposal))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(date(start), date(end)).unwrap()
    }

    fn entry(spot: i32, day: &str, available: bool) -> AvailabilityEntry {
        AvailabilityEntry {
            id: 0,
            camping_spot_id: spot,
            date: date(day),
            is_available: available,
        }
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(DateRange::new(date("2025-07-02"), date("2025-07-01")).is_none());
    }

    #[test]
    fn range_dates_are_inclusive() {
        let dates: Vec<_> = range("2025-07-01", "2025-07-03").dates().collect();
        assert_eq!(
            dates,
            vec![date("2025-07-01"), date("2025-07-02"), date("2025-07-03")]
        );
    }

    #[test]
    fn single_day_range_is_valid() {
        let r = range("2025-07-01", "2025-07-01");
        assert_eq!(r.dates().count(), 1);
    }

    #[test]
    fn touching_endpoints_conflict() {
        // Booking ends 08-05; a request starting 08-05 is rejected.
        let existing = range("2025-08-01", "2025-08-05");
        let proposal = range("2025-08-05", "2025-08-07");
        assert!(ranges_conflict(existing, proposal));
    }

    #[test]
    fn disjoint_ranges_do_not_conflict() {
        assert!(!ranges_conflict(
            range("2025-08-01", "2025-08-05"),
            range("2025-08-06", "2025-08-07")
        ));
    }

    #[test]
    fn contained_range_conflicts() {
        assert!(ranges_conflict(
            range("2025-08-01", "2025-08-10"),
            range("2025-08-03", "2025-08-04")
        ));
    }

    #[test]
    fn explicit_unavailable_date_blocks_surrounding_range() {
        // Spot 1 marks 07-10 unavailable; a request spanning it reports
        // exactly that date.
        let entries = vec![entry(1, "2025-07-10", false)];
        let blocked = blocked_dates(&entries, range("2025-07-09", "2025-07-11"));
        assert_eq!(blocked, vec![date("2025-07-10")]);
    }

    #[test]
    fn empty_calendar_blocks_nothing() {
        let blocked = blocked_dates(&[], range("2025-07-01", "2025-07-03"));
        assert!(blocked.is_empty());
    }

    #[test]
    fn available_entries_do_not_block() {
        let entries = vec![
            entry(1, "2025-07-01", true),
            entry(1, "2025-07-02", true),
        ];
        assert!(blocked_dates(&entries, range("2025-07-01", "2025-07-03")).is_empty());
    }

    #[test]
    fn unavailable_entry_outside_range_is_ignored() {
        let entries = vec![entry(1, "2025-07-20", false)];
        assert!(blocked_dates(&entries, range("2025-07-01", "2025-07-03")).is_empty());
    }

    #[test]
    fn blocked_dates_are_sorted_and_unique() {
        let entries = vec![
            entry(1, "2025-07-03", false),
            entry(1, "2025-07-01", false),
            entry(1, "2025-07-03", false),
        ];
        let blocked = blocked_dates(&entries, range("2025-07-01", "2025-07-04"));
        assert_eq!(blocked, vec![date("2025-07-01"), date("2025-07-03")]);
    }

    #[test]
    fn has_overlap_finds_conflicting_ledger_entry() {
        let existing = vec![
            BookingRange {
                start_date: date("2025-08-01"),
                end_date: date("2025-08-05"),
            },
            BookingRange {
                start_date: date("2025-09-01"),
                end_date: date("2025-09-02"),
            },
        ];
        assert!(has_overlap(&existing, range("2025-08-05", "2025-08-07")));
        assert!(!has_overlap(&existing, range("2025-08-10", "2025-08-12")));
    }

    proptest! {
        #[test]
        fn conflict_is_symmetric(
            a in 0i64..2000, b in 0i64..2000, c in 0i64..2000, d in 0i64..2000
        ) {
            let epoch = date("2025-01-01");
            let mk = |lo: i64, hi: i64| {
                let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                DateRange::new(
                    epoch + chrono::Duration::days(lo),
                    epoch + chrono::Duration::days(hi),
                ).unwrap()
            };
            let x = mk(a, b);
            let y = mk(c, d);
            prop_assert_eq!(ranges_conflict(x, y), ranges_conflict(y, x));
        }

        #[test]
        fn conflict_iff_shared_calendar_day(
            a in 0i64..60, b in 0i64..60, c in 0i64..60, d in 0i64..60
        ) {
            let epoch = date("2025-01-01");
            let mk = |lo: i64, hi: i64| {
                let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                DateRange::new(
                    epoch + chrono::Duration::days(lo),
                    epoch + chrono::Duration::days(hi),
                ).unwrap()
            };
            let x = mk(a, b);
            let y = mk(c, d);
            let shares_day = x.dates().any(|day| y.contains(day));
            prop_assert_eq!(ranges_conflict(x, y), shares_day);
        }
    }
}
