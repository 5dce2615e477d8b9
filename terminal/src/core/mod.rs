//! # Core Abstractions
//!
//! Error types for the console application. See [`error`].

pub mod error;

pub use error::{AppError, Result};
