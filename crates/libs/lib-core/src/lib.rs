//! # Core Library
//!
//! Network topology rendering, the smart order command language, simulated
//! order execution and configuration for the terminal.

pub mod command;
pub mod config;
pub mod error;
pub mod order;
pub mod sample;
pub mod topology;

// Re-export commonly used types
pub use command::{parse, try_parse, CommandError, ConsoleCommand};
pub use config::{core_config, init_config, Config};
pub use error::{CoreError, Result};
pub use order::{ExecutionBackend, OrderEvent, OrderLifecycle, SimulatedBackend, SimulationSettings};
pub use sample::SampleNetwork;
pub use topology::{render_topology, GlyphTheme, LayoutOptions, NetworkStats, TopologyLayout};
