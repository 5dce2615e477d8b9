//! # Centralized Error Handling
//!
//! This module defines the crate-wide error type [`CoreError`] used by the
//! configuration loader and the order lifecycle. It follows the `thiserror`
//! pattern for ergonomic error handling.
//!
//! ## What is *not* an error
//!
//! Two classes of problems never surface as `CoreError`:
//!
//! - **Command validation**: a malformed console command is reported as
//!   [`CommandError`](crate::command::CommandError) and folded into
//!   `OrderIntent::Invalid`, so the caller always gets a value back.
//! - **Layout omissions**: out-of-bounds nodes, unresolved connections and
//!   self loops are skipped by the topology renderer without reporting.
//!
//! ## Error Categories
//!
//! - [`Config`](CoreError::Config): environment variables missing or out of range
//! - [`InvalidTransition`](CoreError::InvalidTransition): order state machine misuse
//! - [`Serialization`](CoreError::Serialization): JSON (de)serialization failure
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{CoreError, Result};
//!
//! fn grid_width(raw: usize) -> Result<usize> {
//!     if raw == 0 {
//!         return Err(CoreError::Config("grid width must be positive".to_string()));
//!     }
//!     Ok(raw)
//! }
//! ```

use shared::dto::order::IllegalTransition;
use thiserror::Error;

/// Convenience type alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An order was pushed along an edge the lifecycle does not have.
    #[error("Order state error: {0}")]
    InvalidTransition(#[from] IllegalTransition),

    /// JSON encoding or decoding error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

impl From<lib_utils::envs::Error> for CoreError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) => {
                CoreError::Config(format!("{} must be set in environment", name))
            }
            lib_utils::envs::Error::WrongFormat(name) => {
                CoreError::Config(format!("{} has an invalid format", name))
            }
        }
    }
}
