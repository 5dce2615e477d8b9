//! # Debugging and Tracing Infrastructure
//!
//! File-based logging for the rinlab console. Stdout is reserved for the
//! map and the agent console, so log lines go to `logs/rinlab.log.<date>`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rinlab_terminal::debug::{self, DebugConfig};
//!
//! let _guard = debug::init(&DebugConfig::from_env());
//! tracing::info!(nodes = 12, "Map refreshed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `rinlab=info,lib_core=info,warn`)
//! - `RINLAB_LOG_DIR`: Log directory (default `logs`)
//! - `RINLAB_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize the debugging system
///
/// Call this at application startup, before any other operations. Hold the
/// returned guard until exit.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    init_logger(config)
}
