//! All derived quantities of an employee at once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompanyPolicy;
use crate::models::Employee;

use super::bonus::annual_bonus;
use super::holidays::HolidayCalendar;
use super::reduced_time::{RttBreakdown, calculate_reduced_time_days};
use super::seniority::{paid_leave_days, seniority_years};

/// Seniority, leave, RTT and bonus of an employee at a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entitlements {
    /// The date the values were computed for.
    pub reference_date: NaiveDate,
    /// Whole calendar years since the hire year.
    pub seniority_years: u32,
    /// Paid leave days for the year.
    pub paid_leave_days: u32,
    /// RTT days for the year, with the intermediate values.
    pub reduced_time: RttBreakdown,
    /// Annual bonus, pro-rated.
    pub annual_bonus: Decimal,
}

/// Computes every entitlement of `employee` at `reference`.
pub fn calculate_entitlements(
    employee: &Employee,
    policy: &CompanyPolicy,
    calendar: &dyn HolidayCalendar,
    reference: NaiveDate,
) -> Entitlements {
    Entitlements {
        reference_date: reference,
        seniority_years: seniority_years(employee, reference),
        paid_leave_days: paid_leave_days(employee, policy, reference),
        reduced_time: calculate_reduced_time_days(employee, policy, calendar, reference),
        annual_bonus: annual_bonus(employee, policy, reference).normalize(),
    }
}
