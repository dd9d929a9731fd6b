//! Common numeric validation helpers shared by the request validators.

use std::fmt;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a value is positive (> 0) and finite.
///
/// # Example
/// ```
/// use tonesmith_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("tempo", 120.0).is_ok());
/// assert!(validate_positive("tempo", 0.0).is_err());
/// assert!(validate_positive("tempo", f64::NAN).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is non-negative (>= 0) and finite.
///
/// # Example
/// ```
/// use tonesmith_spec::validation::common::validate_non_negative;
///
/// assert!(validate_non_negative("volume", 0.0).is_ok());
/// assert!(validate_non_negative("volume", 2.0).is_ok());
/// assert!(validate_non_negative("volume", -0.1).is_err());
/// ```
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value < 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value lies within `[min, max]`.
pub fn validate_range(
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value < min || value > max {
        return Err(CommonValidationError::new(format!(
            "{} must be in [{}, {}], got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

/// Validate that a count is at most `max`.
pub fn validate_count(name: &str, value: usize, max: usize) -> Result<(), CommonValidationError> {
    if value > max {
        return Err(CommonValidationError::new(format!(
            "{} must be at most {}, got {}",
            name, max, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_rejects_infinity() {
        let err = validate_positive("frequency", f64::INFINITY).unwrap_err();
        assert!(err.message.contains("finite"));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("duration", 0.0, 0.0, 60.0).is_ok());
        assert!(validate_range("duration", 60.0, 0.0, 60.0).is_ok());
        assert!(validate_range("duration", 60.5, 0.0, 60.0).is_err());
        assert!(validate_range("duration", -1.0, 0.0, 60.0).is_err());
    }

    #[test]
    fn test_validate_count() {
        assert!(validate_count("length", 0, 10).is_ok());
        assert!(validate_count("length", 10, 10).is_ok());
        let err = validate_count("length", 11, 10).unwrap_err();
        assert_eq!(err.to_string(), "length must be at most 10, got 11");
    }
}
