//! Calendar age arithmetic
//!
//! Clinical age thresholds count completed units: a child is "6 weeks old"
//! from day 42 onwards, and "9 months old" from the day-of-month of birth
//! in the ninth calendar month. Both helpers floor accordingly.

use chrono::{Datelike, NaiveDate};

/// Completed weeks between `birth` and `as_of`
///
/// Non-positive when `as_of` is on or before `birth`; threshold checks
/// simply fail for such values.
pub fn completed_weeks(birth: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - birth).num_days() / 7
}

/// Completed calendar months between `birth` and `as_of`
///
/// Counts whole months by field difference, minus one while the
/// day-of-month of birth has not yet been reached.
pub fn completed_months(birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut months =
        (as_of.year() - birth.year()) * 12 + as_of.month() as i32 - birth.month() as i32;
    if as_of.day() < birth.day() {
        months -= 1;
    }
    months
}
