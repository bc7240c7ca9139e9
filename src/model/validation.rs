// src/model/validation.rs

use crate::error::{InventoryError, InventoryResult};

/// Rejects NaN/inf and anything `<= 0`.
pub fn require_positive(parameter: &'static str, value: f64) -> InventoryResult<f64> {
    if !value.is_finite() {
        return Err(InventoryError::invalid(parameter, "must be finite", value));
    }
    if value <= 0.0 {
        return Err(InventoryError::invalid(parameter, "must be > 0", value));
    }
    Ok(value)
}

/// Rejects NaN/inf and anything `< 0`.
pub fn require_non_negative(parameter: &'static str, value: f64) -> InventoryResult<f64> {
    if !value.is_finite() {
        return Err(InventoryError::invalid(parameter, "must be finite", value));
    }
    if value < 0.0 {
        return Err(InventoryError::invalid(parameter, "must be >= 0", value));
    }
    Ok(value)
}

/// Discount fractions live in `[0, 1)`: a rate of 1 would make the goods free.
pub fn require_fraction(parameter: &'static str, value: f64) -> InventoryResult<f64> {
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        return Err(InventoryError::invalid(parameter, "must be in [0, 1)", value));
    }
    Ok(value)
}

/// Gradual replenishment has to outpace consumption.
pub fn require_exceeds(
    parameter: &'static str,
    value: f64,
    floor: f64,
    constraint: &'static str,
) -> InventoryResult<f64> {
    if value <= floor {
        return Err(InventoryError::invalid(parameter, constraint, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_negative_and_nan() {
        assert!(require_positive("x", 1e-9).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", -3.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_positive("x", f64::INFINITY).is_err());
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(require_non_negative("x", 0.0).unwrap(), 0.0);
        assert!(require_non_negative("x", -0.1).is_err());
    }

    #[test]
    fn fraction_is_half_open() {
        assert!(require_fraction("rate", 0.0).is_ok());
        assert!(require_fraction("rate", 0.999).is_ok());
        assert!(require_fraction("rate", 1.0).is_err());
        assert!(require_fraction("rate", -0.01).is_err());
    }

    #[test]
    fn exceeds_is_strict() {
        let err = require_exceeds("production_rate", 500.0, 500.0, "must exceed demand_rate")
            .unwrap_err();
        assert_eq!(err.parameter(), Some("production_rate"));
    }
}
