//! # Order Tasks
//!
//! Runs one order lifecycle per submitted command and relays its status
//! changes to the console loop.

use crate::app::events::AppEvent;
use async_channel::Sender;
use lib_core::order::{OrderEvent, OrderLifecycle};
use shared::dto::order::OrderIntent;
use tokio::task::JoinHandle;

/// Spawn a lifecycle run for `intent`.
///
/// Every status change arrives as `AppEvent::OrderUpdated`, the terminal one
/// included. Lifecycle errors are reported as `AppEvent::TaskFailed`.
pub(crate) fn submit_order(
    lifecycle: OrderLifecycle,
    intent: OrderIntent,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let (order_tx, order_rx) = async_channel::unbounded::<OrderEvent>();

        let run = async {
            let result = lifecycle.run(intent, Some(&order_tx)).await;
            order_tx.close();
            result
        };
        let forward = async {
            while let Ok(event) = order_rx.recv().await {
                if event_tx.send(AppEvent::OrderUpdated(event.order)).await.is_err() {
                    tracing::debug!("Event channel closed, dropping order updates");
                    break;
                }
            }
        };

        let (result, ()) = tokio::join!(run, forward);
        if let Err(e) = result {
            tracing::error!(error = %e, "Order lifecycle aborted");
            let _ = event_tx.send(AppEvent::TaskFailed(e.to_string())).await;
        }
    })
}
