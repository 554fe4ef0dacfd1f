//! # Calendar Date Range Merging
//!
//! This crate collapses an unordered collection of inclusive calendar
//! date ranges into the minimal sorted collection of disjoint ranges
//! that covers exactly the same days. Two ranges are collapsed into
//! one when they overlap or when one begins the day after the other
//! ends, because inclusive endpoints leave no uncovered day between
//! such ranges.

#![deny(missing_docs)]
#![deny(rustdoc::all)]
#![deny(clippy::must_use_candidate)]
#![deny(missing_debug_implementations)]

pub mod date_range;
pub mod merge;


pub use date_range::{DateRange, InvalidDateRange};
pub use merge::merge;
