//! # Inclusive Calendar Date Ranges
//!
//! This module exports the [`DateRange`] value type together with the
//! day-level interval operations the merge step builds on.

use std::fmt;

use chrono::NaiveDate;

/// An inclusive range of calendar days.
///
/// Both endpoints belong to the range; a range whose start and end
/// coincide covers exactly one day. Construction guarantees
/// `start <= end`, so every value of this type is a well-formed
/// interval.
///
/// Ranges are plain immutable values and order by start date first,
/// end date second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Rejection of an endpoint pair that does not form a range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDateRange {
    /// The start date lies after the end date.
    #[error("Invalid date range: start {start} is after end {end}")]
    StartAfterEnd {
        /// The offered start date.
        start: NaiveDate,
        /// The offered end date.
        end: NaiveDate,
    },
}

impl DateRange {
    /// Create a range from its inclusive endpoints.
    ///
    /// Fails if `start` lies after `end`. Reversed pairs are rejected
    /// here instead of being reordered, so a malformed pair never
    /// reaches the merge logic with a silently swapped meaning.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRange> {
        if start > end {
            return Err(InvalidDateRange::StartAfterEnd { start, end });
        }

        Ok(Self { start, end })
    }

    /// Create the range covering exactly one day.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// The first covered day.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last covered day.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Return true, if the given day falls within the range.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Return true, if `other` is completely contained within the
    /// range.
    #[must_use]
    pub fn contains_range(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Return true, if the two ranges share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Return true, if the two ranges share no day but no day lies
    /// between them either.
    ///
    /// A range ending on the day before the other starts leaves a
    /// zero-day gap. For inclusive ranges this is coverage continuity,
    /// not separation, which is why the merge treats touching ranges
    /// like overlapping ones.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.gap_from(other) == 1 || other.gap_from(self) == 1
    }

    /// The signed number of days from the end of `predecessor` to the
    /// start of this range.
    ///
    /// A result `<= 0` means the ranges overlap (given `predecessor`
    /// starts first), `1` means they touch, and `>= 2` means at least
    /// one uncovered day separates them.
    #[must_use]
    pub fn gap_from(&self, predecessor: &Self) -> i64 {
        self.start.signed_duration_since(predecessor.end).num_days()
    }

    /// The smallest single range covering both inputs.
    ///
    /// Only meaningful as a merge step for ranges that overlap or
    /// touch; for separated ranges the hull also covers the days in
    /// between.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The number of covered days, at least 1.
    #[must_use]
    pub fn num_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }

    /// Iterate over all covered days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;

        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
