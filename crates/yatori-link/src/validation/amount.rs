//! Amount checks: positivity and the configured dollar range.

use crate::error::{AmountBound, LinkError};

/// Fails unless `amount` is a positive finite number.
pub fn validate_positive(amount: f64) -> Result<(), LinkError> {
    if amount > 0.0 && amount.is_finite() {
        Ok(())
    } else {
        Err(LinkError::AmountNonPositive { amount })
    }
}

/// Fails unless `min <= amount <= max`.
///
/// NaN compares as below the minimum.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn validate_range(amount: f64, min: f64, max: f64) -> Result<(), LinkError> {
    if !(amount >= min) {
        return Err(LinkError::AmountOutOfRange {
            bound: AmountBound::Minimum,
            limit: min,
            amount,
        });
    }

    if amount > max {
        return Err(LinkError::AmountOutOfRange {
            bound: AmountBound::Maximum,
            limit: max,
            amount,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f64 = 0.01;
    const MAX: f64 = 10_000.00;

    #[test]
    fn test_range_inclusive_bounds() {
        for amount in [0.01, 0.02, 1.0, 5.0, 9_999.99, 10_000.00] {
            assert!(validate_range(amount, MIN, MAX).is_ok(), "rejected {amount}");
        }
    }

    #[test]
    fn test_range_below_minimum() {
        let err = validate_range(0.005, MIN, MAX).expect_err("should reject");
        assert!(matches!(
            err,
            LinkError::AmountOutOfRange {
                bound: AmountBound::Minimum,
                ..
            }
        ));
        let msg = err.to_string();
        assert!(msg.contains("0.01"));
        assert!(msg.contains("0.005"));
    }

    #[test]
    fn test_range_above_maximum() {
        let err = validate_range(10_000.01, MIN, MAX).expect_err("should reject");
        let msg = err.to_string();
        assert!(msg.contains("10000.00"));
        assert!(msg.contains("10000.01"));
    }

    #[test]
    fn test_range_rejects_nan_and_infinity() {
        assert!(validate_range(f64::NAN, MIN, MAX).is_err());
        assert!(validate_range(f64::INFINITY, MIN, MAX).is_err());
        assert!(validate_range(-1.0, MIN, MAX).is_err());
    }

    #[test]
    fn test_positive() {
        assert!(validate_positive(0.001).is_ok());
        assert!(validate_positive(50_000.0).is_ok());
        assert_eq!(
            validate_positive(0.0),
            Err(LinkError::AmountNonPositive { amount: 0.0 })
        );
        assert!(validate_positive(-5.0).is_err());
        assert!(validate_positive(f64::NAN).is_err());
        assert!(validate_positive(f64::INFINITY).is_err());
    }
}
