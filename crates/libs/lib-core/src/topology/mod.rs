//! # Network Topology Map
//!
//! Lays a list of [`GraphNode`](shared::dto::network::GraphNode)s out on a
//! fixed-size character grid and draws directional connectors between them.
//!
//! ## Pipeline
//!
//! ```text
//! nodes ──► placer ──► grid (stamp glyph blocks) ──► connector ──► rows
//!            │                                          │
//!            └─ slot from list index only               └─ arrows into background cells only
//! ```
//!
//! Rendering is best-effort: nodes outside the grid, connections to unknown or
//! unplaced ids, and self loops are skipped, never reported as errors.
//!
//! ## Modules
//!
//! - [`grid`]: the character matrix with clipping writes
//! - [`placer`]: deterministic slot assignment
//! - [`connector`]: path walking and arrow quantization
//! - [`theme`]: injectable glyph set
//! - [`stats`]: summary header
//! - [`render`]: the full layout pass
//!
//! ## Usage
//!
//! ```rust
//! use lib_core::topology::{render_topology, GlyphTheme, LayoutOptions};
//! use shared::dto::network::{GraphNode, NodeStatus};
//!
//! let nodes = vec![
//!     GraphNode::new("a", NodeStatus::Active).with_connections(["b"]),
//!     GraphNode::new("b", NodeStatus::Syncing),
//! ];
//! let layout = render_topology(&nodes, 24, 6, &LayoutOptions::default(), &GlyphTheme::default());
//! println!("{}", layout.grid);
//! ```

pub mod connector;
pub mod grid;
pub mod placer;
pub mod render;
pub mod stats;
pub mod theme;

pub use connector::{draw_connectors, trace_path, Direction, PathStep};
pub use grid::Grid;
pub use placer::{place_nodes, LayoutOptions, Placement};
pub use render::{render_topology, TopologyLayout};
pub use stats::NetworkStats;
pub use theme::{GlyphTheme, BLOCK_HEIGHT, BLOCK_WIDTH};
