//! Calendar — the validated, immutable page configuration.
//!
//! Everything the page shows comes from this one structure: which years to
//! draw, which months to suppress, the per-year colors, and the link base
//! for the monthly report pages. It is built once (from the deployment
//! configuration), validated, and never mutated afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::{CalendarError, ValidationError};
use crate::key::{MonthKey, YEAR_RANGE};

/// Foreground/background colors for one year column.
///
/// The foreground is used only for visible buttons; the background applies
/// to visible and hidden buttons alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPalette {
    pub year: i32,
    pub foreground: HexColor,
    pub background: HexColor,
}

/// The full page configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Calendar {
    /// Page heading, also used as the HTML title.
    pub title: String,
    /// Years to render as columns, in the order given.
    pub years: Vec<i32>,
    /// Month/year pairs rendered as inert, label-less buttons.
    pub hidden: HashSet<MonthKey>,
    /// One color pair per listed year.
    #[serde(rename = "palette")]
    pub palettes: Vec<YearPalette>,
    /// URL prefix for report pages; the full link is `<link_base>MM_YYYY.html`.
    pub link_base: String,
    /// Optional link to the most recent report page, shown above the grid.
    pub latest_url: Option<String>,
    /// Contact address shown in the page footer.
    pub contact: String,
}

impl Calendar {
    /// Create a builder for constructing a [`Calendar`].
    #[must_use]
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::default()
    }

    /// Check configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Validation`] when a year is duplicated or
    /// unprintable as four digits, when a listed year lacks a palette entry
    /// (or has several), or when a hidden key references an unlisted year.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let mut seen = HashSet::new();
        for &year in &self.years {
            if !YEAR_RANGE.contains(&year) {
                return Err(ValidationError::YearOutOfRange { year }.into());
            }
            if !seen.insert(year) {
                return Err(ValidationError::DuplicateYear { year }.into());
            }
            match self.palettes.iter().filter(|p| p.year == year).count() {
                0 => return Err(ValidationError::MissingPalette { year }.into()),
                1 => {}
                _ => return Err(ValidationError::DuplicatePalette { year }.into()),
            }
        }
        for &key in &self.hidden {
            if !seen.contains(&key.year) {
                return Err(ValidationError::HiddenYearNotListed { key }.into());
            }
        }
        Ok(())
    }

    /// The palette entry for `year`, if configured.
    #[must_use]
    pub fn palette(&self, year: i32) -> Option<&YearPalette> {
        self.palettes.iter().find(|p| p.year == year)
    }

    /// Whether `key` is configured as hidden.
    #[must_use]
    pub fn is_hidden(&self, key: MonthKey) -> bool {
        self.hidden.contains(&key)
    }
}

/// Step-by-step builder for [`Calendar`].
#[derive(Debug, Default)]
pub struct CalendarBuilder {
    calendar: Calendar,
}

impl CalendarBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.calendar.title = title.into();
        self
    }

    #[must_use]
    pub fn years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.calendar.years = years.into_iter().collect();
        self
    }

    #[must_use]
    pub fn hidden(mut self, hidden: impl IntoIterator<Item = MonthKey>) -> Self {
        self.calendar.hidden = hidden.into_iter().collect();
        self
    }

    #[must_use]
    pub fn palette(mut self, year: i32, foreground: HexColor, background: HexColor) -> Self {
        self.calendar.palettes.push(YearPalette {
            year,
            foreground,
            background,
        });
        self
    }

    #[must_use]
    pub fn link_base(mut self, link_base: impl Into<String>) -> Self {
        self.calendar.link_base = link_base.into();
        self
    }

    #[must_use]
    pub fn latest_url(mut self, latest_url: impl Into<String>) -> Self {
        self.calendar.latest_url = Some(latest_url.into());
        self
    }

    #[must_use]
    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.calendar.contact = contact.into();
        self
    }

    /// Consume the builder, validate, and return a [`Calendar`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Validation`] if invariants fail; see
    /// [`Calendar::validate`].
    pub fn build(self) -> Result<Calendar, CalendarError> {
        self.calendar.validate()?;
        Ok(self.calendar)
    }
}
