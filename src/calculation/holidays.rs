//! Public holiday calendars.
//!
//! The RTT calculation only needs the dated holidays of a year; where they
//! come from is a collaborator behind [`HolidayCalendar`].

use chrono::{Days, NaiveDate};

use crate::models::PublicHoliday;

/// Source of the public holidays of a year.
pub trait HolidayCalendar: Send + Sync {
    /// Returns every public holiday of `year`, in any order.
    fn holidays_of_year(&self, year: i32) -> Vec<PublicHoliday>;
}

/// The eleven French public holidays: eight fixed dates plus Easter Monday,
/// Ascension and Whit Monday.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::{FrenchPublicHolidays, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let holidays = FrenchPublicHolidays.holidays_of_year(2019);
/// assert_eq!(holidays.len(), 11);
/// assert!(holidays.iter().any(|h| h.date == NaiveDate::from_ymd_opt(2019, 4, 22).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchPublicHolidays;

impl HolidayCalendar for FrenchPublicHolidays {
    fn holidays_of_year(&self, year: i32) -> Vec<PublicHoliday> {
        let fixed = [
            (1, 1, "New Year's Day"),
            (5, 1, "Labour Day"),
            (5, 8, "Victory in Europe Day"),
            (7, 14, "Bastille Day"),
            (8, 15, "Assumption"),
            (11, 1, "All Saints' Day"),
            (11, 11, "Armistice Day"),
            (12, 25, "Christmas Day"),
        ];

        let mut holidays: Vec<PublicHoliday> = fixed
            .into_iter()
            .filter_map(|(month, day, name)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|date| PublicHoliday::new(date, name))
            })
            .collect();

        if let Some(easter) = easter_sunday(year) {
            let movable = [
                (1, "Easter Monday"),
                (39, "Ascension Day"),
                (50, "Whit Monday"),
            ];
            holidays.extend(movable.into_iter().filter_map(|(offset, name)| {
                easter
                    .checked_add_days(Days::new(offset))
                    .map(|date| PublicHoliday::new(date, name))
            }));
        }

        holidays.sort_by_key(|h| h.date);
        holidays
    }
}

/// Returns Easter Sunday of a Gregorian year (anonymous Gregorian computus).
///
/// # Example
///
/// ```
/// use hr_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2019), NaiveDate::from_ymd_opt(2019, 4, 21));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    let month = u32::try_from(n / 31).ok()?;
    let day = u32::try_from(n % 31 + 1).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
