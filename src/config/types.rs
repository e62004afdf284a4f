//! Configuration types for the HR engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every company-wide
//! constant lives here and is passed explicitly to the engine.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EducationLevel, Role};

/// Revenue/objective ratio edges of the commercial performance bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceThresholds {
    /// Lowest ratio of the below-target band; anything under is underperforming.
    pub below_target_floor: Decimal,
    /// Lowest ratio of the on-target band.
    pub on_target_floor: Decimal,
    /// Highest ratio of the on-target band.
    pub on_target_ceiling: Decimal,
    /// Highest ratio of the above-target band; anything over is outstanding.
    pub above_target_ceiling: Decimal,
    /// Points added when the banded score beats the peer average.
    pub peer_bonus: i32,
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self {
            below_target_floor: Decimal::new(8, 1),
            on_target_floor: Decimal::new(95, 2),
            on_target_ceiling: Decimal::new(105, 2),
            above_target_ceiling: Decimal::new(12, 1),
            peer_bonus: 1,
        }
    }
}

/// Company-wide constants used by every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyPolicy {
    /// Base monthly salary before role/education multipliers.
    pub base_salary: Decimal,
    /// Performance index given at hire and treated as "neutral".
    pub base_performance: i32,
    /// Paid leave days granted before seniority.
    pub base_leave_days: u32,
    /// Maximum worked days per year under the full-time forfeit scheme.
    pub forfeit_worked_days: u32,
    /// Annual bonus before indices and seniority.
    pub annual_bonus_base: Decimal,
    /// Bonus added per year of seniority.
    pub seniority_bonus_rate: Decimal,
    /// Multiplier applied to the bonus base for managers.
    pub manager_bonus_index: Decimal,
    /// Added to the performance index when it differs from the base.
    pub performance_bonus_index: Decimal,
    /// Largest accepted raise, in percent.
    pub max_raise_percentage: Decimal,
    /// Commercial performance band edges.
    #[serde(default)]
    pub performance: PerformanceThresholds,
}

impl Default for CompanyPolicy {
    /// The reference policy.
    fn default() -> Self {
        Self {
            base_salary: Decimal::new(152122, 2),
            base_performance: 1,
            base_leave_days: 25,
            forfeit_worked_days: 218,
            annual_bonus_base: Decimal::new(1000, 0),
            seniority_bonus_rate: Decimal::new(100, 0),
            manager_bonus_index: Decimal::new(17, 1),
            performance_bonus_index: Decimal::new(3, 1),
            max_raise_percentage: Decimal::new(50, 0),
            performance: PerformanceThresholds::default(),
        }
    }
}

/// Role × education salary multipliers.
///
/// The multiplier for a pair is the role factor (1 when the role is not
/// listed) times the education coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryGrid {
    /// Coefficient per education level.
    pub education: HashMap<EducationLevel, Decimal>,
    /// Optional factor per role.
    #[serde(default)]
    pub roles: HashMap<Role, Decimal>,
}

impl SalaryGrid {
    /// Returns the base salary multiplier for a role and education level.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::config::SalaryGrid;
    /// use hr_engine::models::{EducationLevel, Role};
    /// use rust_decimal::Decimal;
    ///
    /// let grid = SalaryGrid::default();
    /// let multiplier = grid.multiplier(Role::Manager, EducationLevel::Master).unwrap();
    /// assert_eq!(multiplier, Decimal::new(14, 1));
    /// ```
    pub fn multiplier(&self, role: Role, education: EducationLevel) -> EngineResult<Decimal> {
        let coefficient =
            self.education
                .get(&education)
                .ok_or_else(|| EngineError::MultiplierNotFound {
                    role: role.to_string(),
                    education: education.to_string(),
                })?;
        let role_factor = self.roles.get(&role).copied().unwrap_or(Decimal::ONE);

        Ok(role_factor * coefficient)
    }
}

impl Default for SalaryGrid {
    fn default() -> Self {
        let education = HashMap::from([
            (EducationLevel::Cap, Decimal::new(10, 1)),
            (EducationLevel::Bac, Decimal::new(11, 1)),
            (EducationLevel::BtsIut, Decimal::new(12, 1)),
            (EducationLevel::Licence, Decimal::new(12, 1)),
            (EducationLevel::Master, Decimal::new(14, 1)),
            (EducationLevel::Engineer, Decimal::new(16, 1)),
            (EducationLevel::Doctorate, Decimal::new(17, 1)),
        ]);
        Self {
            education,
            roles: HashMap::new(),
        }
    }
}

/// The complete company configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct CompanyConfig {
    /// Company-wide constants.
    policy: CompanyPolicy,
    /// Hiring salary multipliers.
    salary_grid: SalaryGrid,
}

impl CompanyConfig {
    /// Creates a new CompanyConfig from its component parts.
    pub fn new(policy: CompanyPolicy, salary_grid: SalaryGrid) -> Self {
        Self {
            policy,
            salary_grid,
        }
    }

    /// Returns the company policy.
    pub fn policy(&self) -> &CompanyPolicy {
        &self.policy
    }

    /// Returns the salary grid.
    pub fn salary_grid(&self) -> &SalaryGrid {
        &self.salary_grid
    }
}
