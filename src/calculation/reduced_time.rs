//! Reduced-work-time days (RTT) calculation.
//!
//! RTT days are what remains of the year once the forfeit worked days,
//! weekends, paid leave and weekday public holidays are taken out, pro-rated
//! by the contract fraction and rounded up in the employee's favour.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CompanyPolicy;
use crate::models::Employee;

use super::holidays::HolidayCalendar;
use super::seniority::today;

/// Saturdays and Sundays in 52 full weeks.
pub const BASE_WEEKEND_DAYS: u32 = 104;

/// Every intermediate value of an RTT calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RttBreakdown {
    /// The reference year.
    pub year: i32,
    /// 365 or 366.
    pub days_in_year: u32,
    /// Weekend days counted for the year.
    pub weekend_days: u32,
    /// Public holidays falling Monday to Friday.
    pub weekday_holidays: u32,
    /// Forfeit worked days (policy).
    pub forfeit_worked_days: u32,
    /// Base paid leave days (policy).
    pub leave_days: u32,
    /// Full-time RTT before pro-rating.
    pub raw_days: i32,
    /// The employee's contract fraction.
    pub contract_fraction: Decimal,
    /// Pro-rated RTT days, rounded up.
    pub days: i32,
}

/// Returns the weekend days counted for the year of `date`.
///
/// Starts from 52 weeks of two days and adds the company's adjustment for
/// the weekday of January 1st: Thursday adds one in leap years, Friday adds
/// two in leap years and one otherwise, Saturday adds one.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::weekend_days_in_year;
/// use chrono::NaiveDate;
///
/// // 2021 starts on a Friday and is not a leap year
/// assert_eq!(weekend_days_in_year(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()), 105);
/// // 2019 starts on a Tuesday
/// assert_eq!(weekend_days_in_year(NaiveDate::from_ymd_opt(2019, 6, 1).unwrap()), 104);
/// ```
pub fn weekend_days_in_year(date: NaiveDate) -> u32 {
    let leap = date.leap_year();
    let first_day = date - Days::new(u64::from(date.ordinal0()));

    match first_day.weekday() {
        Weekday::Thu => {
            debug!(year = date.year(), "Year starts on a Thursday");
            if leap { BASE_WEEKEND_DAYS + 1 } else { BASE_WEEKEND_DAYS }
        }
        Weekday::Fri => {
            debug!(year = date.year(), "Year starts on a Friday");
            if leap { BASE_WEEKEND_DAYS + 2 } else { BASE_WEEKEND_DAYS + 1 }
        }
        Weekday::Sat => {
            debug!(year = date.year(), "Year starts on a Saturday");
            BASE_WEEKEND_DAYS + 1
        }
        _ => BASE_WEEKEND_DAYS,
    }
}

/// Calculates the RTT days of the year containing `reference`.
///
/// # Arguments
///
/// * `employee` - The employee, only the contract fraction is used
/// * `policy` - Supplies the forfeit worked days and base leave days
/// * `calendar` - Supplies the public holidays of the year
/// * `reference` - Any date within the year of interest
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::{calculate_reduced_time_days, FrenchPublicHolidays};
/// use hr_engine::config::CompanyPolicy;
/// use hr_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let policy = CompanyPolicy::default();
/// let employee = Employee::with_policy_defaults("Doe", "Jane", &policy);
/// let reference = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
///
/// let breakdown = calculate_reduced_time_days(&employee, &policy, &FrenchPublicHolidays, reference);
/// assert_eq!(breakdown.weekday_holidays, 10);
/// assert_eq!(breakdown.days, 8);
/// ```
pub fn calculate_reduced_time_days(
    employee: &Employee,
    policy: &CompanyPolicy,
    calendar: &dyn HolidayCalendar,
    reference: NaiveDate,
) -> RttBreakdown {
    let year = reference.year();
    let days_in_year: u32 = if reference.leap_year() { 366 } else { 365 };
    let weekend_days = weekend_days_in_year(reference);

    let weekday_holidays = calendar
        .holidays_of_year(year)
        .iter()
        .filter(|holiday| holiday.date.year() == year && !holiday.falls_on_weekend())
        .count() as u32;

    let raw_days = days_in_year as i32
        - policy.forfeit_worked_days as i32
        - weekend_days as i32
        - policy.base_leave_days as i32
        - weekday_holidays as i32;

    let days = prorate(raw_days, employee.contract_fraction);

    debug!(
        year,
        days_in_year, weekend_days, weekday_holidays, raw_days, days, "Computed RTT days"
    );

    RttBreakdown {
        year,
        days_in_year,
        weekend_days,
        weekday_holidays,
        forfeit_worked_days: policy.forfeit_worked_days,
        leave_days: policy.base_leave_days,
        raw_days,
        contract_fraction: employee.contract_fraction,
        days,
    }
}

/// `raw_days × fraction` rounded up, saturating at the `i32` bounds.
fn prorate(raw_days: i32, fraction: Decimal) -> i32 {
    Decimal::from(raw_days)
        .checked_mul(fraction)
        .and_then(|prorated| prorated.ceil().to_i32())
        .unwrap_or_else(|| {
            if (raw_days < 0) == fraction.is_sign_negative() {
                i32::MAX
            } else {
                i32::MIN
            }
        })
}

/// Returns the RTT days of the year containing `reference`.
pub fn reduced_time_days(
    employee: &Employee,
    policy: &CompanyPolicy,
    calendar: &dyn HolidayCalendar,
    reference: NaiveDate,
) -> i32 {
    calculate_reduced_time_days(employee, policy, calendar, reference).days
}

/// Returns the RTT days of the current year.
pub fn reduced_time_days_today(
    employee: &Employee,
    policy: &CompanyPolicy,
    calendar: &dyn HolidayCalendar,
) -> i32 {
    reduced_time_days(employee, policy, calendar, today())
}
