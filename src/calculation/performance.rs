//! Commercial performance evaluation.
//!
//! Revenue is compared with the objective through five bands; the band
//! decides the new performance index, and beating the commercial peer
//! average adds a bonus point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CompanyPolicy, PerformanceThresholds};
use crate::error::{EngineError, EngineResult};

/// Message of the error raised when revenue or objective are too large to
/// compare.
const OUT_OF_RANGE_MESSAGE: &str = "revenue and objective are out of range";

fn out_of_range() -> EngineError {
    EngineError::OutOfRange {
        message: OUT_OF_RANGE_MESSAGE.to_string(),
    }
}

/// Where realized revenue falls relative to the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// Under the below-target floor (default 80%): back to base performance.
    Underperforming,
    /// From 80% up to 95%: two points lost, never under base.
    BelowTarget,
    /// From 95% to 105% inclusive: unchanged, never under base.
    OnTarget,
    /// Over 105% up to 120%: one point gained.
    AboveTarget,
    /// Over 120%: four points gained.
    Outstanding,
}

impl PerformanceBand {
    /// Classifies `revenue` against `objective`.
    ///
    /// Compares revenue with objective × threshold, so no division happens
    /// here.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] when objective × threshold overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::calculation::PerformanceBand;
    /// use hr_engine::config::PerformanceThresholds;
    /// use rust_decimal::Decimal;
    ///
    /// let thresholds = PerformanceThresholds::default();
    /// let band = PerformanceBand::classify(Decimal::new(37800, 0), Decimal::new(42000, 0), &thresholds).unwrap();
    /// assert_eq!(band, PerformanceBand::BelowTarget);
    ///
    /// assert!(PerformanceBand::classify(Decimal::ONE, Decimal::MAX, &thresholds).is_err());
    /// ```
    pub fn classify(
        revenue: Decimal,
        objective: Decimal,
        thresholds: &PerformanceThresholds,
    ) -> EngineResult<PerformanceBand> {
        let bound = |threshold: Decimal| objective.checked_mul(threshold).ok_or_else(out_of_range);

        let band = if revenue > bound(thresholds.above_target_ceiling)? {
            PerformanceBand::Outstanding
        } else if revenue > bound(thresholds.on_target_ceiling)? {
            PerformanceBand::AboveTarget
        } else if revenue >= bound(thresholds.on_target_floor)? {
            PerformanceBand::OnTarget
        } else if revenue >= bound(thresholds.below_target_floor)? {
            PerformanceBand::BelowTarget
        } else {
            PerformanceBand::Underperforming
        };
        Ok(band)
    }

    /// Returns `revenue / objective`.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] when the objective is zero or the quotient
    /// overflows.
    pub fn ratio(revenue: Decimal, objective: Decimal) -> EngineResult<Decimal> {
        revenue.checked_div(objective).ok_or_else(out_of_range)
    }

    /// Applies the band to the current performance index.
    pub fn apply(self, current: i32, base: i32) -> i32 {
        match self {
            PerformanceBand::Underperforming => base,
            PerformanceBand::BelowTarget => base.max(current - 2),
            PerformanceBand::OnTarget => base.max(current),
            PerformanceBand::AboveTarget => current + 1,
            PerformanceBand::Outstanding => current + 4,
        }
    }
}

/// The result of evaluating one commercial employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceEvaluation {
    /// The revenue band.
    pub band: PerformanceBand,
    /// Performance before evaluation.
    pub previous: i32,
    /// Performance after the band, before the peer bonus.
    pub banded: i32,
    /// Whether the banded score beat the peer average.
    pub beat_peer_average: bool,
    /// Final performance.
    pub new: i32,
    /// `new - previous`.
    pub delta: i32,
}

/// Evaluates a commercial employee's new performance index.
///
/// # Arguments
///
/// * `current` - The stored performance; `None` counts as base performance
/// * `revenue` - Realized revenue
/// * `objective` - Revenue objective
/// * `peer_average` - Average performance of commercial staff, if any
/// * `policy` - Base performance and band thresholds
///
/// # Errors
///
/// [`EngineError::OutOfRange`] when revenue and objective cannot be compared.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::{evaluate_performance, PerformanceBand};
/// use hr_engine::config::CompanyPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = CompanyPolicy::default();
/// let evaluation = evaluate_performance(
///     Some(4),
///     Decimal::new(54600, 0),
///     Decimal::new(42000, 0),
///     Some(Decimal::new(15, 1)),
///     &policy,
/// )
/// .unwrap();
/// assert_eq!(evaluation.band, PerformanceBand::Outstanding);
/// assert_eq!(evaluation.new, 9);
/// ```
pub fn evaluate_performance(
    current: Option<i32>,
    revenue: Decimal,
    objective: Decimal,
    peer_average: Option<Decimal>,
    policy: &CompanyPolicy,
) -> EngineResult<PerformanceEvaluation> {
    let previous = current.unwrap_or(policy.base_performance);
    let band = PerformanceBand::classify(revenue, objective, &policy.performance)?;
    let banded = band.apply(previous, policy.base_performance);

    let beat_peer_average = peer_average.is_some_and(|average| Decimal::from(banded) > average);
    let new = if beat_peer_average {
        banded + policy.performance.peer_bonus
    } else {
        banded
    };

    debug!(?band, previous, banded, beat_peer_average, new, "Evaluated performance");

    Ok(PerformanceEvaluation {
        band,
        previous,
        banded,
        beat_peer_average,
        new,
        delta: new - previous,
    })
}
