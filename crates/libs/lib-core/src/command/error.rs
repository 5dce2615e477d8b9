//! Validation errors of the agent console grammar.

use thiserror::Error;

/// Why a command string was rejected.
///
/// Every variant renders a human-readable reason; the parser stores it in
/// `OrderIntent::Invalid { validation_error }`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command} expects {expected} tokens, got {found}. Usage: {usage}")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
        usage: &'static str,
    },

    #[error("Expected {expected} at position {position}, found {found}")]
    Keyword {
        position: usize,
        expected: &'static str,
        found: String,
    },

    #[error("Invalid {field}: {value} is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("Invalid {field}: must be greater than 0, got {value}")]
    NotPositive { field: &'static str, value: String },

    #[error("Invalid {field}: {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: &'static str,
        max: &'static str,
    },

    #[error("Invalid {field}: {value} (expected {expected})")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CommandError::Empty.to_string(), "Empty command");
        assert_eq!(
            CommandError::Unknown("SELL".to_string()).to_string(),
            "Unknown command: SELL"
        );
        assert_eq!(
            CommandError::ArgumentCount {
                command: "BUY",
                expected: 3,
                found: 2,
                usage: "BUY <amount> <symbol>",
            }
            .to_string(),
            "BUY expects 3 tokens, got 2. Usage: BUY <amount> <symbol>"
        );
        assert_eq!(
            CommandError::NotPositive {
                field: "amount",
                value: "-1".to_string(),
            }
            .to_string(),
            "Invalid amount: must be greater than 0, got -1"
        );
    }
}
