/// Validation utilities for console input

/// Longest console line accepted
pub const MAX_LINE_LENGTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a raw console line before it reaches the command parser
pub fn validate_console_line(line: &str) -> ValidationResult {
    if line.chars().count() > MAX_LINE_LENGTH {
        return ValidationResult::err(format!(
            "Input too long (max {} characters)",
            MAX_LINE_LENGTH
        ));
    }

    if line.chars().any(|c| c.is_control() && !c.is_whitespace()) {
        return ValidationResult::err("Input contains control characters");
    }

    ValidationResult::ok()
}

/// Validate map dimensions given on the command line
pub fn validate_map_size(width: usize, height: usize) -> ValidationResult {
    if width == 0 || height == 0 {
        return ValidationResult::err("Map width and height must be at least 1");
    }

    if width > 512 || height > 256 {
        return ValidationResult::err("Map is limited to 512 columns and 256 rows");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_line() {
        assert!(validate_console_line("BUY 1.5 SOL").is_valid);
        assert!(validate_console_line("\tBUY 1.5 SOL\n").is_valid);
        assert!(validate_console_line("").is_valid);
        assert!(!validate_console_line("BUY\u{1b}[2J").is_valid);
        assert!(!validate_console_line(&"A".repeat(MAX_LINE_LENGTH + 1)).is_valid);
    }

    #[test]
    fn test_map_size() {
        assert!(validate_map_size(48, 16).is_valid);
        assert!(!validate_map_size(0, 16).is_valid);
        assert_eq!(
            validate_map_size(1024, 16).error.as_deref(),
            Some("Map is limited to 512 columns and 256 rows")
        );
    }
}
