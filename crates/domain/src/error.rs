//! Common error types used across the workspace.

use crate::key::MonthKey;

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// A configuration invariant does not hold.
    #[error("invalid calendar configuration")]
    Validation(#[from] ValidationError),
}

/// A specific configuration invariant violation.
///
/// All of these are detectable at configuration-load time; none should
/// survive into the request path.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A listed year has no palette entry.
    #[error("year {year} has no palette entry")]
    MissingPalette { year: i32 },
    /// A year appears in more than one palette entry.
    #[error("year {year} has more than one palette entry")]
    DuplicatePalette { year: i32 },
    /// A year is listed more than once.
    #[error("year {year} is listed more than once")]
    DuplicateYear { year: i32 },
    /// A listed year cannot be formatted as four digits.
    #[error("year {year} is outside the supported range 1000..=9999")]
    YearOutOfRange { year: i32 },
    /// A hidden key references a year that is not listed.
    #[error("hidden key {key} does not match any listed year")]
    HiddenYearNotListed { key: MonthKey },
}
