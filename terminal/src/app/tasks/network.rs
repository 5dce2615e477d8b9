//! # Network Ticker
//!
//! Regenerates the sample network on a fixed cadence and hands every snapshot
//! to the console loop.

use crate::app::events::AppEvent;
use async_channel::Sender;
use lib_core::sample::SampleNetwork;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// What the ticker generates and how often
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkTicker {
    pub node_count: usize,
    pub interval: Duration,
    pub seed: Option<u64>,
}

/// Spawn the ticker. The first snapshot is sent immediately.
///
/// The task ends when the event channel closes.
pub(crate) fn spawn_network_ticker(ticker: NetworkTicker, event_tx: Sender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut generator = SampleNetwork::from_seed_option(ticker.seed);
        let mut interval = tokio::time::interval(ticker.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            node_count = ticker.node_count,
            interval_ms = ticker.interval.as_millis() as u64,
            seeded = ticker.seed.is_some(),
            "Network ticker started"
        );

        loop {
            interval.tick().await;
            let nodes = generator.nodes(ticker.node_count);
            tracing::debug!(nodes = nodes.len(), "Network snapshot generated");

            if event_tx.send(AppEvent::NetworkUpdated(nodes)).await.is_err() {
                tracing::debug!("Event channel closed, stopping network ticker");
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ticker_sends_snapshots_until_closed() {
        let (tx, rx) = async_channel::unbounded();
        let handle = spawn_network_ticker(
            NetworkTicker {
                node_count: 4,
                interval: Duration::from_millis(10),
                seed: Some(1),
            },
            tx,
        );

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        match (first, second) {
            (AppEvent::NetworkUpdated(a), AppEvent::NetworkUpdated(b)) => {
                assert_eq!(a.len(), 4);
                assert_eq!(a, SampleNetwork::seeded(1).nodes(4));
                assert_eq!(b.len(), 4);
            }
            other => panic!("unexpected events: {:?}", other),
        }

        rx.close();
        handle.await.unwrap();
    }
}
