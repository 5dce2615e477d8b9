//! Summary figures shown above the topology map.

use serde::Serialize;
use shared::dto::network::{GraphNode, NodeStatus};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NetworkStats {
    pub total: usize,
    pub active: usize,
    pub syncing: usize,
    pub offline: usize,
    /// Declared edges, resolved or not
    pub edges: usize,
    pub mean_latency_ms: f64,
    pub mean_activity: f64,
}

impl NetworkStats {
    pub fn from_nodes(nodes: &[GraphNode]) -> Self {
        if nodes.is_empty() {
            return Self::default();
        }

        let mut stats = Self {
            total: nodes.len(),
            ..Self::default()
        };
        let mut latency_sum = 0u64;
        let mut activity_sum = 0.0;

        for node in nodes {
            match node.status {
                NodeStatus::Active => stats.active += 1,
                NodeStatus::Syncing => stats.syncing += 1,
                NodeStatus::Offline => stats.offline += 1,
            }
            stats.edges += node.connections.len();
            latency_sum += u64::from(node.latency);
            activity_sum += node.activity;
        }

        stats.mean_latency_ms = latency_sum as f64 / nodes.len() as f64;
        stats.mean_activity = activity_sum / nodes.len() as f64;
        stats
    }

    /// One-line header, e.g. `NODES 3 | ▲ 2 ↻ 1 ✗ 0 | EDGES 4 | LAT 20ms | LOAD 50%`
    pub fn summary_line(&self) -> String {
        format!(
            "NODES {} | ▲ {} ↻ {} ✗ {} | EDGES {} | LAT {:.0}ms | LOAD {:.0}%",
            self.total,
            self.active,
            self.syncing,
            self.offline,
            self.edges,
            self.mean_latency_ms,
            self.mean_activity * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_network() {
        let stats = NetworkStats::from_nodes(&[]);
        assert_eq!(stats, NetworkStats::default());
        assert_eq!(stats.mean_latency_ms, 0.0);
    }

    #[test]
    fn test_counts_and_means() {
        let nodes = vec![
            GraphNode::new("a", NodeStatus::Active)
                .with_connections(["b", "c"])
                .with_latency(10)
                .with_activity(0.25),
            GraphNode::new("b", NodeStatus::Active)
                .with_connections(["a"])
                .with_latency(20)
                .with_activity(0.75),
            GraphNode::new("c", NodeStatus::Syncing)
                .with_connections(["a"])
                .with_latency(30)
                .with_activity(0.5),
        ];
        let stats = NetworkStats::from_nodes(&nodes);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.syncing, 1);
        assert_eq!(stats.offline, 0);
        assert_eq!(stats.edges, 4);
        assert_eq!(stats.mean_latency_ms, 20.0);
        assert_eq!(stats.mean_activity, 0.5);
        assert_eq!(
            stats.summary_line(),
            "NODES 3 | ▲ 2 ↻ 1 ✗ 0 | EDGES 4 | LAT 20ms | LOAD 50%"
        );
    }
}
