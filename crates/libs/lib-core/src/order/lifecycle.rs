//! # Order Lifecycle
//!
//! Drives a [`SmartOrder`] through
//! `draft -> validating -> executing -> completed | failed`, delegating the
//! actual work to an [`ExecutionBackend`]. Every status change is published
//! as an [`OrderEvent`] so a UI can follow along.

use super::backend::ExecutionBackend;
use crate::error::Result;
use async_channel::Sender;
use shared::dto::order::{OrderIntent, OrderStatus, SmartOrder};
use std::sync::Arc;

/// Snapshot of an order after a status change
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEvent {
    pub order: SmartOrder,
}

impl OrderEvent {
    pub fn status(&self) -> OrderStatus {
        self.order.status
    }
}

/// Runs orders against a shared backend
#[derive(Clone)]
pub struct OrderLifecycle {
    backend: Arc<dyn ExecutionBackend>,
}

impl OrderLifecycle {
    pub fn new(backend: Arc<dyn ExecutionBackend>) -> Self {
        Self { backend }
    }

    /// Run one intent to a terminal status.
    ///
    /// Backend rejections end in `Failed` and are returned as `Ok`; only
    /// state machine misuse is an `Err`. Events are best effort: a closed
    /// channel does not stop the order.
    pub async fn run(&self, intent: OrderIntent, events: Option<&Sender<OrderEvent>>) -> Result<SmartOrder> {
        let mut order = SmartOrder::draft(intent);
        tracing::info!(
            order_id = %order.short_id(),
            backend = self.backend.name(),
            intent = %order.intent.describe(),
            "Order submitted"
        );
        publish(events, &order).await;

        order.transition(OrderStatus::Validating)?;
        publish(events, &order).await;

        if let Err(reason) = self.backend.validate(&order).await {
            tracing::warn!(order_id = %order.short_id(), %reason, "Order rejected during validation");
            order.fail(reason)?;
            publish(events, &order).await;
            return Ok(order);
        }

        order.transition(OrderStatus::Executing)?;
        publish(events, &order).await;

        match self.backend.execute(&order).await {
            Ok(()) => {
                order.transition(OrderStatus::Completed)?;
                tracing::info!(order_id = %order.short_id(), "Order completed");
            }
            Err(reason) => {
                tracing::warn!(order_id = %order.short_id(), %reason, "Order failed");
                order.fail(reason)?;
            }
        }
        publish(events, &order).await;

        Ok(order)
    }
}

async fn publish(events: Option<&Sender<OrderEvent>>, order: &SmartOrder) {
    let Some(sender) = events else {
        return;
    };
    if let Err(e) = sender.send(OrderEvent { order: order.clone() }).await {
        tracing::debug!(order_id = %order.short_id(), "Order event dropped: {}", e);
    }
}
