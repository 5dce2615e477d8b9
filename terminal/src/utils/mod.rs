//! # Utility Functions
//!
//! Shared utility functions used across the console application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation (console lines, map sizes)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers (latency, activity bars)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
