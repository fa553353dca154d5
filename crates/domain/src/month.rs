//! Months of the year and their abbreviated display labels.

/// A month of the year, numbered 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// Error returned when a month number falls outside 1..=12.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("month number {0} is out of range 1..=12")]
pub struct InvalidMonth(pub u8);

const ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Month {
    /// All twelve months in numeric order.
    pub const ALL: [Self; 12] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
        Self(12),
    ];

    /// Construct from a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMonth`] when `number` is 0 or greater than 12.
    pub fn new(number: u8) -> Result<Self, InvalidMonth> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(InvalidMonth(number))
        }
    }

    /// The 1-based month number.
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Three-letter display label (`Jan`, `Feb`, …).
    #[must_use]
    pub fn abbrev(self) -> &'static str {
        ABBREVS[usize::from(self.0) - 1]
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidMonth;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_all_twelve_months_in_order() {
        assert_eq!(Month::ALL.len(), 12);
        for (index, month) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.number()), index + 1);
        }
    }

    #[test]
    fn should_map_numbers_to_abbreviated_labels() {
        assert_eq!(Month::new(1).unwrap().abbrev(), "Jan");
        assert_eq!(Month::new(7).unwrap().abbrev(), "Jul");
        assert_eq!(Month::new(12).unwrap().abbrev(), "Dec");
    }

    #[test]
    fn should_reject_zero() {
        assert_eq!(Month::new(0), Err(InvalidMonth(0)));
    }

    #[test]
    fn should_reject_thirteen() {
        assert_eq!(Month::new(13), Err(InvalidMonth(13)));
    }

    #[test]
    fn should_convert_through_try_from() {
        let month = Month::try_from(4).unwrap();
        assert_eq!(u8::from(month), 4);
    }
}
