//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! console loop.

use shared::dto::network::GraphNode;
use shared::dto::order::SmartOrder;

/// Async task results sent to the console loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Ticker produced a fresh sample network
    NetworkUpdated(Vec<GraphNode>),
    /// An order changed status
    OrderUpdated(SmartOrder),
    /// A background task gave up; shown to the user as-is
    TaskFailed(String),
}
