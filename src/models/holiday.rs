//! Public holiday model.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A dated public holiday.
///
/// # Example
///
/// ```
/// use hr_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2019, 7, 14).unwrap(),
///     name: "Bastille Day".to_string(),
/// };
/// assert!(holiday.falls_on_weekend());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Bastille Day").
    pub name: String,
}

impl PublicHoliday {
    /// Creates a holiday.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }

    /// Returns true if the holiday lands on a Saturday or Sunday.
    pub fn falls_on_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_holiday() {
        // 2019-12-25 is a Wednesday
        let holiday = PublicHoliday::new(NaiveDate::from_ymd_opt(2019, 12, 25).unwrap(), "Christmas");
        assert!(!holiday.falls_on_weekend());
    }

    #[test]
    fn test_sunday_holiday() {
        // 2022-05-01 is a Sunday
        let holiday = PublicHoliday::new(NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(), "Labour Day");
        assert!(holiday.falls_on_weekend());
    }
}
