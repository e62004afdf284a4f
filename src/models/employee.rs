//! Employee model.
//!
//! This module defines the Employee struct, the single entity the engine
//! computes over and the store persists.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompanyPolicy;
use crate::models::{Matricule, Role};

fn full_time() -> Decimal {
    Decimal::ONE
}

/// Represents an employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Store identifier, assigned on first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Business identifier (role letter + 5 digits).
    #[serde(default)]
    pub matricule: Option<Matricule>,
    /// Date of hire; `None` when unknown.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Monthly base salary.
    pub salary: Decimal,
    /// Performance index; `None` is treated as the base performance.
    #[serde(default)]
    pub performance: Option<i32>,
    /// Share of a full-time contract, in (0, 1].
    #[serde(default = "full_time")]
    pub contract_fraction: Decimal,
}

impl Employee {
    /// Creates an employee carrying the company defaults: base salary, base
    /// performance, full time, no matricule and no hire date.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::config::CompanyPolicy;
    /// use hr_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let policy = CompanyPolicy::default();
    /// let employee = Employee::with_policy_defaults("Doe", "Jane", &policy);
    /// assert_eq!(employee.salary, policy.base_salary);
    /// assert_eq!(employee.performance, Some(policy.base_performance));
    /// assert_eq!(employee.contract_fraction, Decimal::ONE);
    /// assert!(employee.matricule.is_none());
    /// ```
    pub fn with_policy_defaults(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        policy: &CompanyPolicy,
    ) -> Self {
        Self {
            id: None,
            last_name: last_name.into(),
            first_name: first_name.into(),
            matricule: None,
            hire_date: None,
            salary: policy.base_salary,
            performance: Some(policy.base_performance),
            contract_fraction: full_time(),
        }
    }

    /// Returns true if the matricule carries the role's prefix letter.
    pub fn has_role(&self, role: Role) -> bool {
        self.matricule.is_some_and(|m| m.belongs_to(role))
    }

    /// Returns true for managers.
    pub fn is_manager(&self) -> bool {
        self.has_role(Role::Manager)
    }
}
