//! Clinical date checks.
//!
//! The reference date is passed in by the caller so these stay pure and
//! deterministic.

use chrono::{Datelike, NaiveDate};

use obstetra_model::Verdict;

/// Validate a birth date against a reference date.
///
/// A future date is invalid, as is a derived age above 120 years.
pub fn validate_birth_date(birth: NaiveDate, today: NaiveDate) -> Verdict {
    let age = completed_years(birth, today);
    if age < 0 {
        return Verdict::fail("Birth date cannot be in the future");
    }
    if age > 120 {
        return Verdict::fail("Birth date is not valid");
    }
    Verdict::pass("Valid birth date")
}

/// Validate a prenatal control date: the visit cannot be in the future.
pub fn validate_control_date(date: NaiveDate, today: NaiveDate) -> Verdict {
    if date > today {
        return Verdict::fail("Control date cannot be in the future");
    }
    Verdict::pass("Valid control date")
}

/// Completed years between two dates: the year difference, minus one
/// before the month/day anniversary.
fn completed_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
