//! # Common Error Types
//!
//! Consolidated error handling for the rinlab console.
//!
//! ## Error Categories
//!
//! - **Core**: configuration and order lifecycle errors from `lib-core`
//! - **Theme**: glyph theme files that cannot be read, parsed or written
//! - **Io**: stdin/stdout failures of the console loop
//! - **State**: background task plumbing (closed channels, failed joins)
//! - **Validation**: console input rejected before reaching the parser
//!
//! Malformed order commands are *not* errors here: the parser folds them into
//! `OrderIntent::Invalid` and the console prints the reason.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use rinlab_terminal::core::error::AppError;
//!
//! let err = AppError::Validation("Input too long".to_string());
//! assert_eq!(err.to_string(), "Validation error: Input too long");
//! ```

use lib_core::error::CoreError;
use thiserror::Error;

/// Application-wide error type covering all error scenarios in the console.
#[derive(Debug, Error)]
pub enum AppError {
    /// Error bubbled up from the core library.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Glyph theme could not be loaded, validated or saved.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Console I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Application state or task plumbing error.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Theme(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::State(format!("background task failed: {}", err))
    }
}
