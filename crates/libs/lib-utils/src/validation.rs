//! # Validation Utilities
//!
//! Range checks shared by configuration loading.

/// Validate that `value` lies in `[min, max]`.
pub fn validate_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<(), String>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        Err(format!("{} must be between {} and {}, got {}", field_name, min, max, value))
    } else {
        Ok(())
    }
}

/// Validate a probability in `[0, 1]`.
pub fn validate_probability(value: f64, field_name: &str) -> Result<(), String> {
    if value.is_nan() {
        return Err(format!("{} must be a number", field_name));
    }
    validate_range(value, 0.0, 1.0, field_name)
}

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}
