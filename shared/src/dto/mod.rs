//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the core engine and the console.
//!
//! ## Module Organization
//!
//! - [`network`] - Graph nodes rendered by the topology map
//! - [`order`] - Parsed order intents and the simulated order lifecycle
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None`
//! - **Enums**: lowercase strings via `#[serde(rename_all = "lowercase")]`
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "id": "node-03",
//!   "connections": ["node-01", "node-07"],
//!   "activity": 0.82,
//!   "latency": 41,
//!   "region": "eu-central",
//!   "status": "syncing"
//! }
//! ```
//!
//! ```text
//! { "kind": "smart", "symbol": "SOL", "take_profit": 120.0, "stop_loss": 80.0, "dca_levels": 5 }
//! ```

pub mod network;
pub mod order;

pub use network::*;
pub use order::*;
