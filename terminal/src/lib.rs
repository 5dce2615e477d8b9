//! # Rinlab Terminal - Library Root
//!
//! A retro-terminal console for a simulated DeFi network: an ASCII topology
//! map of network nodes and a smart order agent that parses trading commands
//! and walks them through a simulated execution lifecycle.
//! This library crate contains all modules used by the `rinlab` binary.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              rinlab-terminal (this crate)              │
//! ├────────────────────────────────────────────────────────┤
//! │  clap          - Subcommands (map, agent, theme)       │
//! │  Tokio         - Async runtime, ticker and order tasks │
//! │  async-channel - Task → console events                 │
//! │  tracing       - File logging                          │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          ▼                              ▼
//! ┌─────────────────────────┐  ┌─────────────────────────┐
//! │  lib-core               │  │  shared                 │
//! │  topology, parser,      │  │  GraphNode, OrderIntent │
//! │  order lifecycle        │  │  SmartOrder             │
//! └─────────────────────────┘  └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state, events, background tasks and subcommand handlers
//! - **core**: Error types
//! - **debug**: File-based logging
//! - **ui**: Text panels and theme persistence
//! - **utils**: Input validation
//!
//! ## Event-Driven Architecture
//!
//! Background tasks (network ticker, order lifecycles) never write to stdout.
//! They send [`AppEvent`]s over an `async_channel`; the console loop applies
//! them to `Arc<RwLock<AppState>>` and prints the result.
//!
//! ## Usage
//!
//! ```bash
//! rinlab map --width 60 --nodes 8 --seed 7
//! rinlab map --watch
//! rinlab agent
//! rinlab theme --init config/theme.json --ascii
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{App, AppEvent, AppState, ConsoleOutcome};
pub use crate::core::{AppError, Result};
