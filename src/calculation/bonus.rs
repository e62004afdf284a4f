//! Annual bonus calculation.
//!
//! Managers get the bonus base scaled by the manager index. Other employees
//! get the bonus base, scaled by their performance plus the performance
//! index when it differs from the base performance. Everyone gets a flat
//! amount per year of seniority, and the total is pro-rated by the contract
//! fraction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CompanyPolicy;
use crate::models::Employee;

use super::seniority::seniority_years;

/// Calculates the annual bonus at `reference`.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::annual_bonus;
/// use hr_engine::config::CompanyPolicy;
/// use hr_engine::models::{Employee, Matricule};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = CompanyPolicy::default();
/// let mut employee = Employee::with_policy_defaults("Doe", "Jane", &policy);
/// employee.matricule = Some(Matricule::parse("T44488").unwrap());
/// employee.performance = Some(2);
/// employee.hire_date = NaiveDate::from_ymd_opt(2019, 1, 1);
///
/// let reference = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
/// // 1000 x (2 + 0.3)
/// assert_eq!(annual_bonus(&employee, &policy, reference), Decimal::new(2300, 0));
/// ```
pub fn annual_bonus(employee: &Employee, policy: &CompanyPolicy, reference: NaiveDate) -> Decimal {
    let seniority = seniority_years(employee, reference);
    let seniority_bonus = policy.seniority_bonus_rate * Decimal::from(seniority);

    let bonus = if employee.is_manager() {
        policy.annual_bonus_base * policy.manager_bonus_index + seniority_bonus
    } else {
        match employee.performance {
            Some(performance) if performance != policy.base_performance => {
                policy.annual_bonus_base
                    * (Decimal::from(performance) + policy.performance_bonus_index)
                    + seniority_bonus
            }
            _ => policy.annual_bonus_base + seniority_bonus,
        }
    };

    let prorated = bonus * employee.contract_fraction;
    debug!(
        matricule = ?employee.matricule.map(|m| m.to_string()),
        seniority,
        bonus = %prorated.normalize(),
        "Computed annual bonus"
    );

    prorated
}
