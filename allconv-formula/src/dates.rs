//! Age and date-difference arithmetic

use chrono::{Datelike, NaiveDate};

/// Whole years between `birth` and `today`, decremented by one when today's
/// (month, day) precedes the birth (month, day). Future birth dates are not
/// rejected; the result simply goes negative.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Signed difference `end - start` in whole days. No ordering is enforced.
pub fn date_difference(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}
