//! # Network Topology DTOs
//!
//! Node records consumed by the ASCII topology map.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health of a network node. Selects the glyph block drawn for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Active,
    Syncing,
    Offline,
}

impl NodeStatus {
    /// All statuses in display order
    pub fn all() -> &'static [NodeStatus] {
        &[NodeStatus::Active, NodeStatus::Syncing, NodeStatus::Offline]
    }

    /// Lowercase label used in JSON and console output
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Active => "active",
            NodeStatus::Syncing => "syncing",
            NodeStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the network graph.
///
/// `connections` are directed edges by node id. Nothing enforces symmetry or
/// that the ids exist; the layout engine skips whatever it cannot resolve.
/// `activity`, `latency` and `region` are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default)]
    pub connections: Vec<String>,
    /// Load in `[0, 1]`
    #[serde(default)]
    pub activity: f64,
    /// Round trip latency in milliseconds
    #[serde(default)]
    pub latency: u32,
    #[serde(default)]
    pub region: String,
    pub status: NodeStatus,
}

impl GraphNode {
    /// Create a node with no connections and zeroed display fields
    pub fn new(id: impl Into<String>, status: NodeStatus) -> Self {
        Self {
            id: id.into(),
            connections: Vec::new(),
            activity: 0.0,
            latency: 0,
            region: String::new(),
            status,
        }
    }

    /// Replace the outgoing connections
    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    /// Set the activity level, clamped into `[0, 1]`
    pub fn with_activity(mut self, activity: f64) -> Self {
        self.activity = if activity.is_nan() { 0.0 } else { activity.clamp(0.0, 1.0) };
        self
    }

    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency = latency_ms;
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&NodeStatus::Syncing).unwrap();
        assert_eq!(json, "\"syncing\"");
    }

    #[test]
    fn test_node_builder() {
        let node = GraphNode::new("a", NodeStatus::Active)
            .with_connections(["b", "c"])
            .with_activity(1.7)
            .with_latency(42)
            .with_region("US-EAST");

        assert_eq!(node.connections, vec!["b".to_string(), "c".to_string()]);
        assert_eq!(node.activity, 1.0);
        assert_eq!(node.latency, 42);
        assert_eq!(node.region, "US-EAST");
    }

    #[test]
    fn test_node_deserializes_with_defaults() {
        let node: GraphNode = serde_json::from_str(r#"{"id":"x","status":"offline"}"#).unwrap();
        assert_eq!(node.id, "x");
        assert!(node.connections.is_empty());
        assert_eq!(node.status, NodeStatus::Offline);
    }
}
