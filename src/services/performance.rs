//! Performance rating of commercial employees.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::{PerformanceBand, evaluate_performance};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Matricule, Role};
use crate::store::EmployeeStore;

/// A revenue report for one commercial employee.
///
/// Every field is optional so absent values surface as validation errors
/// rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReview {
    /// Matricule of the commercial employee, e.g. `C00042`.
    #[serde(default)]
    pub matricule: Option<String>,
    /// Realized revenue.
    #[serde(default)]
    pub revenue: Option<Decimal>,
    /// Revenue objective.
    #[serde(default)]
    pub objective: Option<Decimal>,
}

/// What a review changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceOutcome {
    /// The employee as stored after the review.
    pub employee: Employee,
    /// The revenue band.
    pub band: PerformanceBand,
    /// `revenue / objective`.
    pub ratio: Decimal,
    /// Performance before the review.
    pub previous_performance: i32,
    /// Performance after the review.
    pub new_performance: i32,
    /// Average commercial performance the employee was compared with.
    pub peer_average: Option<Decimal>,
}

/// Rates commercial employees against their revenue objective.
pub struct PerformanceService<S: ?Sized> {
    store: Arc<S>,
    config: Arc<ConfigLoader>,
}

impl<S: EmployeeStore + ?Sized> PerformanceService<S> {
    /// Creates a service over the given store and configuration.
    pub fn new(store: Arc<S>, config: Arc<ConfigLoader>) -> Self {
        Self { store, config }
    }

    /// Reviews one commercial employee and stores the new performance.
    ///
    /// The employee is saved twice: once unmodified before the peer average
    /// is read, and once with the new performance. The peer average therefore
    /// includes the employee's previous score.
    ///
    /// # Errors
    ///
    /// * [`EngineError::Validation`] for a missing or negative revenue or
    ///   objective, a zero objective, or a matricule that is missing, not a
    ///   commercial one, or malformed. Checked in that order, before any
    ///   store access.
    /// * [`EngineError::OutOfRange`] when revenue and objective are too large
    ///   to compare; nothing is read or written.
    /// * [`EngineError::EmployeeNotFound`] when nobody holds the matricule;
    ///   nothing is written.
    pub fn review(&self, review: PerformanceReview) -> EngineResult<PerformanceOutcome> {
        let (matricule, revenue, objective) = validate(&review)?;
        let policy = self.config.policy();

        // Overflowing inputs fail here, before any store access.
        let ratio = PerformanceBand::ratio(revenue, objective)?;
        PerformanceBand::classify(revenue, objective, &policy.performance)?;

        let employee = self.store.find_by_matricule(&matricule)?.ok_or_else(|| {
            warn!(%matricule, "Performance review for unknown employee");
            EngineError::EmployeeNotFound {
                matricule: matricule.to_string(),
            }
        })?;

        let mut employee = self.store.save(employee)?;
        let peer_average = self
            .store
            .average_performance(Role::Commercial.prefix())?;

        let evaluation = evaluate_performance(
            employee.performance,
            revenue,
            objective,
            peer_average,
            policy,
        )?;
        employee.performance = Some(evaluation.new);
        let employee = self.store.save(employee)?;

        info!(
            %matricule,
            band = ?evaluation.band,
            ratio = %ratio.round_dp(4),
            previous = evaluation.previous,
            new = evaluation.new,
            "Reviewed commercial performance"
        );

        Ok(PerformanceOutcome {
            employee,
            band: evaluation.band,
            ratio,
            previous_performance: evaluation.previous,
            new_performance: evaluation.new,
            peer_average,
        })
    }
}

fn validate(review: &PerformanceReview) -> EngineResult<(Matricule, Decimal, Decimal)> {
    let revenue = match review.revenue {
        Some(revenue) if revenue >= Decimal::ZERO => revenue,
        _ => return Err(EngineError::validation("revenue cannot be null or negative")),
    };
    let objective = match review.objective {
        Some(objective) if objective >= Decimal::ZERO => objective,
        _ => return Err(EngineError::validation("objective cannot be null or negative")),
    };

    let prefix = Role::Commercial.prefix();
    let raw = match review.matricule.as_deref() {
        Some(raw) if raw.starts_with(prefix) => raw,
        _ => {
            return Err(EngineError::validation(format!(
                "matricule must start with {}",
                prefix
            )));
        }
    };

    if objective.is_zero() {
        return Err(EngineError::validation("objective must be greater than zero"));
    }

    let matricule = Matricule::parse(raw)?;
    Ok((matricule, revenue, objective))
}
