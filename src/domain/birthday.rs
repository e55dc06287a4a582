//! Birthday value object and next-occurrence arithmetic.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format accepted on input and used for display.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A contact's birthday, stored as a calendar date.
///
/// Parsed from an ISO-like `YYYY-MM-DD` string at construction; the original
/// string is not retained. Serializes back to the same `YYYY-MM-DD` form via
/// chrono's serde support.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("2000-06-15").unwrap();
/// assert_eq!(birthday.to_string(), "2000-06-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string does not parse
    /// as a real calendar date in that format.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday's month and day at or after `today`.
    ///
    /// A February 29 birthday is observed on March 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.occurrence_in(today.year() + 1)
        }
    }

    /// Number of days from `today` until the next occurrence (0 on the day itself).
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            // Only Feb 29 can fail to land in a given year.
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .expect("March 1 exists in every year")
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_parse_valid() {
        let birthday = Birthday::parse("2000-06-15").unwrap();
        assert_eq!(birthday.date(), date(2000, 6, 15));
    }

    #[test]
    fn test_birthday_parse_invalid() {
        assert!(Birthday::parse("15-06-2000").is_err());
        assert!(Birthday::parse("2000/06/15").is_err());
        assert!(Birthday::parse("2000-13-01").is_err());
        assert!(Birthday::parse("2001-02-29").is_err());
        assert!(Birthday::parse("not a date").is_err());
        assert!(Birthday::parse("").is_err());
    }

    #[test]
    fn test_days_until_next_today() {
        let birthday = Birthday::parse("2000-06-15").unwrap();
        assert_eq!(birthday.days_until_next(date(2024, 6, 15)), 0);
    }

    #[test]
    fn test_days_until_next_tomorrow() {
        let birthday = Birthday::parse("2000-06-15").unwrap();
        assert_eq!(birthday.days_until_next(date(2024, 6, 14)), 1);
    }

    #[test]
    fn test_days_until_next_wraps_to_following_year() {
        let birthday = Birthday::parse("2000-06-15").unwrap();
        // 2024-06-16 -> 2025-06-15: 364 days (no Feb 29 in the span).
        assert_eq!(birthday.days_until_next(date(2024, 6, 16)), 364);
        // 2023-06-16 -> 2024-06-15 spans Feb 29, 2024: 365 days.
        assert_eq!(birthday.days_until_next(date(2023, 6, 16)), 365);
    }

    #[test]
    fn test_feb_29_observed_march_1_in_non_leap_years() {
        let birthday = Birthday::parse("2000-02-29").unwrap();
        assert_eq!(birthday.next_occurrence(date(2023, 1, 1)), date(2023, 3, 1));
        assert_eq!(birthday.next_occurrence(date(2024, 1, 1)), date(2024, 2, 29));
        assert_eq!(birthday.days_until_next(date(2024, 2, 29)), 0);
    }

    #[test]
    fn test_birthday_round_trips_as_iso_string() {
        let birthday = Birthday::parse("1999-12-31").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1999-12-31\"");
        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }
}
