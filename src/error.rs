// src/error.rs

use thiserror::Error;

/// Result alias used across the crate.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors raised by the inventory models and the curve export.
///
/// The computational core only ever produces [`InventoryError::InvalidParameter`].
/// The remaining variants belong to the CSV hand-off in `io::reporting`.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A constructor or call-time input broke its constraint.
    #[error("invalid parameter `{parameter}` = {value}: {constraint}")]
    InvalidParameter {
        parameter: &'static str,
        constraint: &'static str,
        value: f64,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    pub fn invalid(parameter: &'static str, constraint: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            parameter,
            constraint,
            value,
        }
    }

    /// Name of the offending parameter, if this is a validation failure.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_the_constraint() {
        let err = InventoryError::invalid("price", "must be > 0", 0.0);
        assert_eq!(err.parameter(), Some("price"));
        assert_eq!(err.to_string(), "invalid parameter `price` = 0: must be > 0");
    }
}
