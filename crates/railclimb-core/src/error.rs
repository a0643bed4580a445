//! Error types for railclimb

use thiserror::Error;

/// Main error type for railclimb operations.
///
/// Infeasible partitions are not errors; planners report them as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RailclimbError {
    /// Head capacity must be strictly positive and finite
    #[error("Invalid capacity: {0} (must be positive)")]
    InvalidCapacity(f64),

    /// Grade must be a finite, nonnegative ratio
    #[error("Invalid grade: {0} (must be a finite ratio >= 0)")]
    InvalidGrade(f64),

    /// Power ratio must lie in (0, 1]
    #[error("Invalid power ratio: {0} (must be in (0, 1])")]
    InvalidPowerRatio(f64),

    /// No catalog entry with this key
    #[error("Unknown rolling stock: {0}")]
    UnknownStock(String),

    /// No cargo kind with this key
    #[error("Unknown cargo: {0}")]
    UnknownCargo(String),

    /// Requested cargo does not fit the car
    #[error("{cargo} x{quantity} exceeds limit of {limit}")]
    CargoLimit {
        cargo: String,
        quantity: u32,
        limit: u32,
    },
}

/// Result type alias for railclimb operations
pub type Result<T> = std::result::Result<T, RailclimbError>;

/// Checks that `grade` is a usable climb grade.
pub fn check_grade(grade: f64) -> Result<()> {
    if grade.is_finite() && grade >= 0.0 {
        Ok(())
    } else {
        Err(RailclimbError::InvalidGrade(grade))
    }
}

/// Checks that `power_ratio` is a usable throttle setting.
pub fn check_power_ratio(power_ratio: f64) -> Result<()> {
    if power_ratio > 0.0 && power_ratio <= 1.0 {
        Ok(())
    } else {
        Err(RailclimbError::InvalidPowerRatio(power_ratio))
    }
}

/// Checks that `capacity` can seed a segmentation.
pub fn check_capacity(capacity: f64) -> Result<()> {
    if capacity.is_finite() && capacity > 0.0 {
        Ok(())
    } else {
        Err(RailclimbError::InvalidCapacity(capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bounds() {
        assert!(check_grade(0.0).is_ok());
        assert!(check_grade(0.12).is_ok());
        assert_eq!(check_grade(-0.01), Err(RailclimbError::InvalidGrade(-0.01)));
        assert!(check_grade(f64::INFINITY).is_err());
        assert!(check_grade(f64::NAN).is_err());
    }

    #[test]
    fn test_power_ratio_bounds() {
        assert!(check_power_ratio(1.0).is_ok());
        assert!(check_power_ratio(0.25).is_ok());
        assert!(check_power_ratio(0.0).is_err());
        assert!(check_power_ratio(1.5).is_err());
        assert!(check_power_ratio(f64::NAN).is_err());
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(check_capacity(1e-9).is_ok());
        assert_eq!(check_capacity(0.0), Err(RailclimbError::InvalidCapacity(0.0)));
        assert!(check_capacity(-3.0).is_err());
        assert!(check_capacity(f64::NAN).is_err());
    }

    #[test]
    fn test_cargo_limit_message() {
        let err = RailclimbError::CargoLimit {
            cargo: "Coal".to_string(),
            quantity: 12,
            limit: 10,
        };
        assert_eq!(err.to_string(), "Coal x12 exceeds limit of 10");
    }
}
