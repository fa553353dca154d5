//! Composite month/year keys, formatted `MM_YYYY`.
//!
//! The key is the identity of one calendar cell: hidden-month entries are
//! keyed by it and report links embed it (`<link_base>MM_YYYY.html`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::month::{InvalidMonth, Month};

/// Years must print as four digits so keys round-trip through `MM_YYYY`.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

/// One month of one year, with canonical `MM_YYYY` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    pub month: Month,
    pub year: i32,
}

/// Error returned when parsing a `MM_YYYY` key fails.
#[derive(Debug, thiserror::Error)]
pub enum ParseKeyError {
    /// Not of the form `MM_YYYY`.
    #[error("expected a key of the form MM_YYYY, got {0:?}")]
    Malformed(String),
    /// Month part out of range.
    #[error(transparent)]
    Month(#[from] InvalidMonth),
    /// Year part outside [`YEAR_RANGE`].
    #[error("year {0} is outside the supported range 1000..=9999")]
    YearOutOfRange(i32),
}

impl MonthKey {
    /// Pair a month with a year.
    #[must_use]
    pub fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}_{}", self.month.number(), self.year)
    }
}

impl FromStr for MonthKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseKeyError::Malformed(s.to_string());
        let (month_part, year_part) = s.split_once('_').ok_or_else(malformed)?;
        if month_part.len() != 2 || year_part.len() != 4 {
            return Err(malformed());
        }
        let month_number: u8 = month_part.parse().map_err(|_| malformed())?;
        let year: i32 = year_part.parse().map_err(|_| malformed())?;
        if !YEAR_RANGE.contains(&year) {
            return Err(ParseKeyError::YearOutOfRange(year));
        }
        Ok(Self::new(Month::new(month_number)?, year))
    }
}

impl TryFrom<String> for MonthKey {
    type Error = ParseKeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_with_zero_padded_month() {
        let key = MonthKey::new(Month::new(1).unwrap(), 2014);
        assert_eq!(key.to_string(), "01_2014");
    }

    #[test]
    fn should_format_two_digit_month_unpadded() {
        let key = MonthKey::new(Month::new(12).unwrap(), 2019);
        assert_eq!(key.to_string(), "12_2019");
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let key = MonthKey::new(Month::new(7).unwrap(), 2016);
        let parsed: MonthKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let key = MonthKey::new(Month::new(3).unwrap(), 2015);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"03_2015\"");
        let parsed: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn should_reject_missing_separator() {
        let result = "012014".parse::<MonthKey>();
        assert!(matches!(result, Err(ParseKeyError::Malformed(_))));
    }

    #[test]
    fn should_reject_unpadded_month() {
        let result = "1_2014".parse::<MonthKey>();
        assert!(matches!(result, Err(ParseKeyError::Malformed(_))));
    }

    #[test]
    fn should_reject_month_out_of_range() {
        let result = "13_2014".parse::<MonthKey>();
        assert!(matches!(result, Err(ParseKeyError::Month(InvalidMonth(13)))));
    }

    #[test]
    fn should_reject_short_year() {
        let result = "01_214".parse::<MonthKey>();
        assert!(matches!(result, Err(ParseKeyError::Malformed(_))));
    }

    #[test]
    fn should_reject_year_zero_padded_out_of_range() {
        let result = "01_0999".parse::<MonthKey>();
        assert!(matches!(result, Err(ParseKeyError::YearOutOfRange(999))));
    }
}
