//! Seniority and paid leave calculation.
//!
//! Seniority counts whole calendar years between the hire year and the
//! reference year; paid leave grants the policy base plus one day per year.

use chrono::{Datelike, Local, NaiveDate};

use crate::config::CompanyPolicy;
use crate::models::Employee;

/// Returns the current local date, the default reference date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the employee's seniority in whole years at `reference`.
///
/// Uses calendar-year subtraction: someone hired on December 31st has one
/// year of seniority on January 1st. Hire dates after the reference year and
/// unknown hire dates both give zero.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::seniority_years;
/// use hr_engine::config::CompanyPolicy;
/// use hr_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let mut employee = Employee::with_policy_defaults("Doe", "Jane", &CompanyPolicy::default());
/// employee.hire_date = NaiveDate::from_ymd_opt(2018, 12, 31);
///
/// let reference = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
/// assert_eq!(seniority_years(&employee, reference), 1);
/// ```
pub fn seniority_years(employee: &Employee, reference: NaiveDate) -> u32 {
    let Some(hire_date) = employee.hire_date else {
        return 0;
    };

    let years = reference.year() - hire_date.year();
    u32::try_from(years).unwrap_or(0)
}

/// Returns the paid leave days for the year of `reference`.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::paid_leave_days;
/// use hr_engine::config::CompanyPolicy;
/// use hr_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let policy = CompanyPolicy::default();
/// let mut employee = Employee::with_policy_defaults("Doe", "Jane", &policy);
/// employee.hire_date = NaiveDate::from_ymd_opt(2015, 6, 1);
///
/// let reference = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
/// assert_eq!(paid_leave_days(&employee, &policy, reference), 29);
/// ```
pub fn paid_leave_days(employee: &Employee, policy: &CompanyPolicy, reference: NaiveDate) -> u32 {
    policy.base_leave_days + seniority_years(employee, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn employee_hired(hire_date: Option<NaiveDate>) -> Employee {
        let mut employee = Employee::with_policy_defaults("Doe", "Jane", &CompanyPolicy::default());
        employee.hire_date = hire_date;
        employee
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_hired_today_has_no_seniority() {
        let today = today();
        assert_eq!(seniority_years(&employee_hired(Some(today)), today), 0);
    }

    #[test]
    fn test_hired_five_years_ago() {
        let employee = employee_hired(Some(date(2014, 3, 10)));
        assert_eq!(seniority_years(&employee, date(2019, 3, 10)), 5);
    }

    #[test]
    fn test_unknown_hire_date_has_no_seniority() {
        assert_eq!(seniority_years(&employee_hired(None), date(2019, 1, 1)), 0);
    }

    #[test]
    fn test_future_hire_date_has_no_seniority() {
        let employee = employee_hired(Some(date(2022, 1, 1)));
        assert_eq!(seniority_years(&employee, date(2019, 1, 1)), 0);
    }

    #[test]
    fn test_calendar_years_not_elapsed_days() {
        let employee = employee_hired(Some(date(2018, 12, 31)));
        assert_eq!(seniority_years(&employee, date(2019, 1, 1)), 1);
        assert_eq!(seniority_years(&employee, date(2018, 12, 31)), 0);
    }

    #[test]
    fn test_paid_leave_days_by_seniority() {
        let policy = CompanyPolicy::default();
        let reference = date(2019, 6, 1);

        for (years, expected) in [(0, 25), (1, 26), (2, 27), (4, 29)] {
            let employee = employee_hired(Some(date(2019 - years, 6, 1)));
            assert_eq!(paid_leave_days(&employee, &policy, reference), expected);
        }
    }

    #[test]
    fn test_paid_leave_days_without_hire_date() {
        let policy = CompanyPolicy::default();
        assert_eq!(paid_leave_days(&employee_hired(None), &policy, date(2019, 1, 1)), 25);
    }

    proptest! {
        #[test]
        fn prop_hire_on_or_after_reference_gives_zero(
            offset in 0i64..20_000,
            reference_day in 0i64..40_000,
        ) {
            let reference = date(1970, 1, 1) + chrono::Duration::days(reference_day);
            let hire = reference + chrono::Duration::days(offset);
            prop_assert_eq!(seniority_years(&employee_hired(Some(hire)), reference), 0);
        }

        #[test]
        fn prop_leave_is_base_plus_seniority(
            hire_day in 0i64..40_000,
            reference_day in 0i64..40_000,
        ) {
            let policy = CompanyPolicy::default();
            let hire = date(1970, 1, 1) + chrono::Duration::days(hire_day);
            let reference = date(1970, 1, 1) + chrono::Duration::days(reference_day);
            let employee = employee_hired(Some(hire));

            prop_assert_eq!(
                paid_leave_days(&employee, &policy, reference),
                25 + seniority_years(&employee, reference)
            );
        }
    }
}
