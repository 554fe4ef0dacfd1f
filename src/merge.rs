//! # Date Range Merging
//!
//! This module implements the single transformation of the crate:
//! collapsing a collection of inclusive date ranges into the minimal
//! sorted collection of disjoint ranges covering the same days.

use tracing::debug;

use crate::date_range::DateRange;

/// Merge all overlapping and touching ranges in the input.
///
/// Returns the minimal collection of disjoint ranges that covers
/// exactly the days covered by the input, sorted ascending by start
/// date. Two ranges collapse into one when they share a day or when
/// one begins the day after the other ends; with inclusive endpoints a
/// zero-day gap is coverage continuity, not separation.
///
/// Input order is irrelevant, duplicates and nested ranges are
/// allowed, and an empty input produces an empty result.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use datemerge::{merge, DateRange};
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// let merged = merge([
///     DateRange::new(date(1982, 6, 1), date(1982, 7, 1)).unwrap(),
///     DateRange::new(date(1982, 7, 2), date(1982, 7, 4)).unwrap(),
/// ]);
///
/// assert_eq!(
///     merged,
///     vec![DateRange::new(date(1982, 6, 1), date(1982, 7, 4)).unwrap()]
/// );
/// ```
#[must_use]
pub fn merge(ranges: impl IntoIterator<Item = DateRange>) -> Vec<DateRange> {
    let mut sorted: Vec<DateRange> = ranges.into_iter().collect();
    sorted.sort_unstable();

    let total = sorted.len();
    let mut merged: Vec<DateRange> = Vec::with_capacity(total);

    for range in sorted {
        match merged.last_mut() {
            // The ranges are sorted by start date, so a gap of less
            // than two days means overlap or touching and the open
            // range swallows this one.
            Some(open) if range.gap_from(open) < 2 => *open = open.hull(&range),
            _ => merged.push(range),
        }
    }

    debug!("coalesced {} ranges into {}", total, merged.len());

    merged
}
