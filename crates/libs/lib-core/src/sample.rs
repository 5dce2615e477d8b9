//! # Sample Network Generator
//!
//! Produces plausible [`GraphNode`] lists for the map view when no live
//! network feed is attached. Seeded generators are fully deterministic.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use shared::dto::network::{GraphNode, NodeStatus};

pub const REGIONS: &[&str] = &[
    "us-east", "us-west", "eu-central", "eu-west", "ap-south", "ap-northeast", "sa-east",
];

pub const MIN_LATENCY_MS: u32 = 5;
pub const MAX_LATENCY_MS: u32 = 250;
pub const MAX_CONNECTIONS: usize = 3;

/// Random node list generator
pub struct SampleNetwork {
    rng: StdRng,
}

impl SampleNetwork {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// `count` nodes named `node-00`, `node-01`, ...
    ///
    /// Each node links to 1 to 3 other nodes (fewer when the network is too
    /// small) and never to itself.
    pub fn nodes(&mut self, count: usize) -> Vec<GraphNode> {
        let ids: Vec<String> = (0..count).map(node_id).collect();

        ids.iter()
            .enumerate()
            .map(|(index, id)| {
                let connections = self.connections(&ids, index);
                let status = self.status();
                let region = REGIONS.choose(&mut self.rng).copied().unwrap_or("unknown");

                GraphNode::new(id.clone(), status)
                    .with_connections(connections)
                    .with_activity(self.rng.random::<f64>())
                    .with_latency(self.rng.random_range(MIN_LATENCY_MS..=MAX_LATENCY_MS))
                    .with_region(region)
            })
            .collect()
    }

    fn connections(&mut self, ids: &[String], own: usize) -> Vec<String> {
        let others: Vec<&String> = ids
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != own)
            .map(|(_, id)| id)
            .collect();
        if others.is_empty() {
            return Vec::new();
        }

        let wanted = self.rng.random_range(1..=MAX_CONNECTIONS).min(others.len());
        others
            .choose_multiple(&mut self.rng, wanted)
            .map(|id| (*id).clone())
            .collect()
    }

    /// 70% active, 20% syncing, 10% offline
    fn status(&mut self) -> NodeStatus {
        match self.rng.random_range(0..10u8) {
            0..=6 => NodeStatus::Active,
            7 | 8 => NodeStatus::Syncing,
            _ => NodeStatus::Offline,
        }
    }
}

fn node_id(index: usize) -> String {
    format!("node-{:02}", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_network() {
        let a = SampleNetwork::seeded(11).nodes(12);
        let b = SampleNetwork::seeded(11).nodes(12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_and_ranges() {
        let nodes = SampleNetwork::seeded(3).nodes(15);
        assert_eq!(nodes.len(), 15);
        assert_eq!(nodes[0].id, "node-00");
        assert_eq!(nodes[14].id, "node-14");

        for node in &nodes {
            assert!((0.0..1.0).contains(&node.activity));
            assert!((MIN_LATENCY_MS..=MAX_LATENCY_MS).contains(&node.latency));
            assert!(REGIONS.contains(&node.region.as_str()));
        }
    }

    #[test]
    fn test_connections_are_distinct_and_never_self() {
        let nodes = SampleNetwork::seeded(5).nodes(20);
        let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

        for node in &nodes {
            assert!((1..=MAX_CONNECTIONS).contains(&node.connections.len()));
            assert!(!node.connections.contains(&node.id));
            let unique: HashSet<&String> = node.connections.iter().collect();
            assert_eq!(unique.len(), node.connections.len());
            assert!(node.connections.iter().all(|c| ids.contains(c.as_str())));
        }
    }

    #[test]
    fn test_tiny_networks() {
        assert!(SampleNetwork::seeded(1).nodes(0).is_empty());

        let single = SampleNetwork::seeded(1).nodes(1);
        assert!(single[0].connections.is_empty());

        let pair = SampleNetwork::seeded(1).nodes(2);
        assert_eq!(pair[0].connections, vec!["node-01".to_string()]);
        assert_eq!(pair[1].connections, vec!["node-00".to_string()]);
    }

    #[test]
    fn test_status_mix_is_weighted() {
        let nodes = SampleNetwork::seeded(8).nodes(1000);
        let active = nodes.iter().filter(|n| n.status == NodeStatus::Active).count();
        let offline = nodes.iter().filter(|n| n.status == NodeStatus::Offline).count();
        assert!(active > 600 && active < 800, "active = {}", active);
        assert!(offline > 50 && offline < 150, "offline = {}", offline);
    }
}
