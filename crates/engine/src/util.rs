//! Internal helpers shared by the validators.
//!
//! These utilities are **not** part of the public API. They centralize the
//! small checks every rule set repeats so all of them count and bound values
//! the same way.

use chrono::{Datelike, Months, NaiveDate};

/// Length of the trimmed text, counted in characters (not bytes) so accented
/// input is measured the way the user sees it.
pub(crate) fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// `true` if `day` is a valid day-of-month in `1..=last`.
pub(crate) fn day_in_range(day: i64, last: u32) -> bool {
    (1..=i64::from(last)).contains(&day)
}

/// Last calendar day of the month `date` falls in.
pub fn last_day_of_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}
