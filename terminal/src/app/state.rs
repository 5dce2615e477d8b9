//! # Application State
//!
//! Everything the console shows, shared between the input loop and the
//! background tasks behind `Arc<RwLock<AppState>>`.

use crate::ui::render::MapFrame;
use chrono::{DateTime, Utc};
use lib_core::config::Config;
use lib_core::topology::GlyphTheme;
use shared::dto::network::GraphNode;
use shared::dto::order::SmartOrder;
use uuid::Uuid;

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Latest network snapshot
    pub nodes: Vec<GraphNode>,
    /// Bumped on every network refresh
    pub network_version: u64,
    pub last_network_update: Option<DateTime<Utc>>,
    /// Orders in submission order
    pub orders: Vec<SmartOrder>,
    pub theme: GlyphTheme,
    pub frame: MapFrame,
}

impl AppState {
    pub fn new(config: &Config, theme: GlyphTheme) -> Self {
        Self {
            nodes: Vec::new(),
            network_version: 0,
            last_network_update: None,
            orders: Vec::new(),
            theme,
            frame: MapFrame {
                width: config.grid_width,
                height: config.grid_height,
                options: config.layout_options(),
            },
        }
    }

    pub fn set_nodes(&mut self, nodes: Vec<GraphNode>) {
        self.nodes = nodes;
        self.network_version += 1;
        self.last_network_update = Some(Utc::now());
    }

    pub fn order_index(&self, id: Uuid) -> Option<usize> {
        self.orders.iter().position(|order| order.id == id)
    }

    /// Insert a new order or replace the stored snapshot of a known one.
    ///
    /// Snapshots older than the stored one are ignored, so a late event can
    /// never move an order backwards.
    pub fn upsert_order(&mut self, order: SmartOrder) {
        match self.order_index(order.id) {
            Some(index) => {
                if order.history.len() >= self.orders[index].history.len() {
                    self.orders[index] = order;
                }
            }
            None => self.orders.push(order),
        }
    }

    /// Drop completed and failed orders, returning how many were removed
    pub fn clear_finished(&mut self) -> usize {
        let before = self.orders.len();
        self.orders.retain(|order| !order.status.is_terminal());
        before - self.orders.len()
    }

    /// Orders not yet completed or failed
    pub fn pending_orders(&self) -> usize {
        self.orders.iter().filter(|order| !order.status.is_terminal()).count()
    }
}
