//! # Subcommand Handlers
//!
//! One module per `rinlab` subcommand.

pub mod agent;
pub mod map;
pub mod theme;
