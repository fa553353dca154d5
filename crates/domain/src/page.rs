//! Render model for the calendar page.
//!
//! [`CalendarPage::build`] is a pure function from a [`Calendar`] to the
//! year columns and buttons the page shows. The HTML adapter turns this
//! model into markup; nothing here knows about HTML.

use crate::calendar::Calendar;
use crate::color::HexColor;
use crate::error::{CalendarError, ValidationError};
use crate::key::MonthKey;
use crate::month::Month;

/// Everything the page template needs, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPage {
    pub title: String,
    pub latest_url: Option<String>,
    pub columns: Vec<YearColumn>,
    pub contact: String,
}

/// One year column of twelve buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearColumn {
    pub year: i32,
    pub buttons: Vec<MonthButton>,
}

/// One calendar cell. A hidden month carries no link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthButton {
    pub link: Option<MonthLink>,
    pub background: HexColor,
}

/// Link, label, and text color of a visible button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLink {
    pub href: String,
    pub label: String,
    pub foreground: HexColor,
}

impl CalendarPage {
    /// Build the page model from a calendar.
    ///
    /// Every listed year yields exactly twelve buttons, hidden or not, so
    /// column height is constant. Building the same calendar twice yields
    /// equal models.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Validation`] when a listed year has no
    /// palette entry. A calendar that passed [`Calendar::validate`] cannot
    /// fail here.
    pub fn build(calendar: &Calendar) -> Result<Self, CalendarError> {
        let mut columns = Vec::with_capacity(calendar.years.len());
        for &year in &calendar.years {
            let palette = calendar
                .palette(year)
                .ok_or(ValidationError::MissingPalette { year })?;
            let buttons = Month::ALL
                .iter()
                .map(|&month| {
                    let key = MonthKey::new(month, year);
                    let link = if calendar.is_hidden(key) {
                        None
                    } else {
                        Some(MonthLink {
                            href: format!("{}{key}.html", calendar.link_base),
                            label: format!("{} {year}", month.abbrev()),
                            foreground: palette.foreground.clone(),
                        })
                    };
                    MonthButton {
                        link,
                        background: palette.background.clone(),
                    }
                })
                .collect();
            columns.push(YearColumn { year, buttons });
        }
        Ok(Self {
            title: calendar.title.clone(),
            latest_url: calendar.latest_url.clone(),
            columns,
            contact: calendar.contact.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    fn key(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    /// The LHO ISI deployment tables, as far as these tests need them.
    fn calendar() -> Calendar {
        Calendar::builder()
            .title("LigoCAM @ LHO | ISI")
            .years([2014, 2015, 2016])
            .hidden([key("01_2014"), key("02_2014"), key("03_2014")])
            .palette(2014, color("0A67A1"), color("D8DCDE"))
            .palette(2015, color("FF9900"), color("FFFFCC"))
            .palette(2016, color("298000"), color("caffb3"))
            .link_base("https://example.org/LigoCAM/ISI/calendar/LigoCAM_")
            .latest_url("https://example.org/LigoCAM/ISI/LigoCamHTML_current.html")
            .contact("dipongkar.talukder@ligo.org")
            .build()
            .unwrap()
    }

    #[test]
    fn should_emit_twelve_buttons_for_every_year() {
        let page = CalendarPage::build(&calendar()).unwrap();
        assert_eq!(page.columns.len(), 3);
        for column in &page.columns {
            assert_eq!(column.buttons.len(), 12);
        }
    }

    #[test]
    fn should_keep_years_in_configured_order() {
        let page = CalendarPage::build(&calendar()).unwrap();
        let years: Vec<i32> = page.columns.iter().map(|c| c.year).collect();
        assert_eq!(years, vec![2014, 2015, 2016]);
    }

    #[test]
    fn should_render_hidden_month_as_inert_button() {
        // Scenario: 01_2014 is hidden.
        let page = CalendarPage::build(&calendar()).unwrap();
        let button = &page.columns[0].buttons[0];
        assert!(button.link.is_none());
        assert_eq!(button.background, color("D8DCDE"));
    }

    #[test]
    fn should_render_visible_month_with_link_label_and_colors() {
        // Scenario: 07_2016 is not hidden.
        let page = CalendarPage::build(&calendar()).unwrap();
        let button = &page.columns[2].buttons[6];
        let link = button.link.as_ref().unwrap();
        assert_eq!(
            link.href,
            "https://example.org/LigoCAM/ISI/calendar/LigoCAM_07_2016.html"
        );
        assert_eq!(link.label, "Jul 2016");
        assert_eq!(link.foreground, color("298000"));
        assert_eq!(button.background, color("caffb3"));
    }

    #[test]
    fn should_zero_pad_month_in_link() {
        let page = CalendarPage::build(&calendar()).unwrap();
        let link = page.columns[1].buttons[0].link.as_ref().unwrap();
        assert!(link.href.ends_with("LigoCAM_01_2015.html"));
    }

    #[test]
    fn should_carry_title_latest_url_and_contact() {
        let page = CalendarPage::build(&calendar()).unwrap();
        assert_eq!(page.title, "LigoCAM @ LHO | ISI");
        assert_eq!(
            page.latest_url.as_deref(),
            Some("https://example.org/LigoCAM/ISI/LigoCamHTML_current.html")
        );
        assert_eq!(page.contact, "dipongkar.talukder@ligo.org");
    }

    #[test]
    fn should_build_equal_models_for_equal_input() {
        let calendar = calendar();
        let first = CalendarPage::build(&calendar).unwrap();
        let second = CalendarPage::build(&calendar).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn should_build_empty_page_for_empty_calendar() {
        let page = CalendarPage::build(&Calendar::default()).unwrap();
        assert!(page.columns.is_empty());
        assert!(page.latest_url.is_none());
    }

    #[test]
    fn should_fail_when_year_lacks_palette() {
        // Bypasses the builder to simulate an unvalidated calendar.
        let mut calendar = calendar();
        calendar.years.push(2017);
        let result = CalendarPage::build(&calendar);
        assert!(matches!(
            result,
            Err(CalendarError::Validation(
                ValidationError::MissingPalette { year: 2017 }
            ))
        ));
    }
}
