//! Salary raise calculation.
//!
//! The engine only computes multipliers; applying one to a stored salary is
//! up to the caller.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::CompanyPolicy;
use crate::error::{EngineError, EngineResult};

/// Returns the salary multiplier for a raise of `percentage` percent.
///
/// Fails with [`EngineError::OutOfRange`] when the percentage is zero,
/// negative, or above the policy maximum.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::raise_multiplier;
/// use hr_engine::config::CompanyPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = CompanyPolicy::default();
/// let multiplier = raise_multiplier(Decimal::from_str("41.24").unwrap(), &policy).unwrap();
/// assert_eq!(multiplier, Decimal::from_str("1.4124").unwrap());
///
/// assert!(raise_multiplier(Decimal::ZERO, &policy).is_err());
/// ```
pub fn raise_multiplier(percentage: Decimal, policy: &CompanyPolicy) -> EngineResult<Decimal> {
    if percentage <= Decimal::ZERO {
        warn!(%percentage, "Rejected raise: not positive");
        return Err(EngineError::OutOfRange {
            message: "percentage must be >0".to_string(),
        });
    }
    if percentage > policy.max_raise_percentage {
        warn!(%percentage, "Rejected raise: above maximum");
        return Err(EngineError::OutOfRange {
            message: format!("percentage must be ≤{}", policy.max_raise_percentage.normalize()),
        });
    }

    let hundred = Decimal::ONE_HUNDRED;
    Ok((hundred + percentage) / hundred)
}

/// Returns `salary` raised by `percentage` percent, without storing anything.
pub fn apply_raise(
    salary: Decimal,
    percentage: Decimal,
    policy: &CompanyPolicy,
) -> EngineResult<Decimal> {
    Ok(salary * raise_multiplier(percentage, policy)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_raise_multiplier() {
        let policy = CompanyPolicy::default();
        assert_eq!(raise_multiplier(dec("41.24"), &policy).unwrap(), dec("1.4124"));
        assert_eq!(raise_multiplier(dec("50"), &policy).unwrap(), dec("1.5"));
        assert_eq!(raise_multiplier(dec("0.01"), &policy).unwrap(), dec("1.0001"));
    }

    #[test]
    fn test_zero_percentage_is_rejected() {
        let result = raise_multiplier(Decimal::ZERO, &CompanyPolicy::default());
        match result {
            Err(EngineError::OutOfRange { message }) => {
                assert_eq!(message, "percentage must be >0");
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn test_negative_percentage_is_rejected() {
        let result = raise_multiplier(dec("-5"), &CompanyPolicy::default());
        assert!(matches!(result, Err(EngineError::OutOfRange { .. })));
    }

    #[test]
    fn test_percentage_above_fifty_is_rejected() {
        let result = raise_multiplier(dec("50.01"), &CompanyPolicy::default());
        match result {
            Err(err) => assert_eq!(err.to_string(), "percentage must be ≤50"),
            Ok(_) => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn test_apply_raise() {
        let raised = apply_raise(dec("1521.22"), dec("10"), &CompanyPolicy::default()).unwrap();
        assert_eq!(raised, dec("1673.342"));
    }

    proptest! {
        #[test]
        fn prop_valid_percentages_give_multiplier_between_one_and_one_and_a_half(hundredths in 1i64..=5000) {
            let multiplier = raise_multiplier(Decimal::new(hundredths, 2), &CompanyPolicy::default()).unwrap();
            prop_assert!(multiplier > Decimal::ONE);
            prop_assert!(multiplier <= dec("1.5"));
        }
    }
}
