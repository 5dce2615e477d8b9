//! # Shared Data Transfer Objects Library
//!
//! This library defines the data contract between the rinlab core (`lib-core`)
//! and the console front-end (`terminal`). All DTOs serialize with `serde` so
//! they can be dumped as JSON for fixtures and debugging.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::network`]**: Graph nodes for the network topology map
//!   - **[`dto::order`]**: Order intents and simulated smart orders
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_latency`]**: Render a latency in ms/s
//!   - **[`utils::activity_bar`]**: Render a fixed-width activity meter
//!
//! ## Wire Format
//!
//! - Field names use **snake_case**
//! - Enums serialize to lowercase strings (`"active"`, `"market"`, ...)
//! - [`OrderIntent`] is internally tagged by `kind`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::network::{GraphNode, NodeStatus};
//!
//! let node = GraphNode::new("validator-1", NodeStatus::Active)
//!     .with_connections(["validator-2"]);
//! assert_eq!(node.connections.len(), 1);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where everything is public API
pub use dto::*;
pub use utils::*;
