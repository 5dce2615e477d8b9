//! # UI Rendering
//!
//! - [`render`]: text panels for the map, node table and orders
//! - [`theme`]: glyph theme persistence

pub mod render;
pub mod theme;

pub use render::{render_map, render_node_table, render_order_event, render_orders, MapFrame};
