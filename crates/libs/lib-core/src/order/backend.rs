//! # Execution Backends
//!
//! Trait seam between the order lifecycle and whatever "executes" an order.
//! The only implementation shipped is [`SimulatedBackend`]: it waits, then
//! fails a configurable share of executions at random.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::dto::order::SmartOrder;
use std::time::Duration;

/// Trait for order execution.
///
/// Errors are rejection reasons shown to the user, not infrastructure
/// failures; the lifecycle turns them into a `failed` order.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &str;

    /// Pre-trade checks. Runs while the order is `validating`.
    async fn validate(&self, order: &SmartOrder) -> Result<(), String>;

    /// Fill the order. Runs while the order is `executing`.
    async fn execute(&self, order: &SmartOrder) -> Result<(), String>;
}

/// Timing and failure odds of the simulated backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    pub validating_delay: Duration,
    pub executing_delay: Duration,
    /// Probability in `[0, 1]` that `execute` fails
    pub failure_rate: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            validating_delay: Duration::from_millis(1000),
            executing_delay: Duration::from_millis(2000),
            failure_rate: 0.10,
        }
    }
}

impl SimulationSettings {
    /// No delays, fixed failure rate. Handy for tests and scripted demos.
    pub fn instant(failure_rate: f64) -> Self {
        Self {
            validating_delay: Duration::ZERO,
            executing_delay: Duration::ZERO,
            failure_rate,
        }
    }
}

/// Time-delayed, randomly failing execution.
///
/// Validation only rejects intents that did not parse; the single random
/// branch is taken during execution.
pub struct SimulatedBackend {
    settings: SimulationSettings,
    rng: Mutex<StdRng>,
}

impl SimulatedBackend {
    pub fn new(settings: SimulationSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Reproducible failure sequence
    pub fn seeded(settings: SimulationSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut settings: SimulationSettings, rng: StdRng) -> Self {
        settings.failure_rate = if settings.failure_rate.is_nan() {
            0.0
        } else {
            settings.failure_rate.clamp(0.0, 1.0)
        };
        Self {
            settings,
            rng: Mutex::new(rng),
        }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    fn roll_failure(&self) -> bool {
        // lock released before any await
        self.rng.lock().random_bool(self.settings.failure_rate)
    }
}

#[async_trait]
impl ExecutionBackend for SimulatedBackend {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn validate(&self, order: &SmartOrder) -> Result<(), String> {
        if !self.settings.validating_delay.is_zero() {
            tokio::time::sleep(self.settings.validating_delay).await;
        }
        match order.intent.validation_error() {
            Some(reason) => Err(reason.to_string()),
            None => Ok(()),
        }
    }

    async fn execute(&self, order: &SmartOrder) -> Result<(), String> {
        let failed = self.roll_failure();
        if !self.settings.executing_delay.is_zero() {
            tokio::time::sleep(self.settings.executing_delay).await;
        }
        if failed {
            tracing::debug!(order_id = %order.id, "Simulated execution failure");
            return Err("Execution failed: simulated network congestion".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::order::OrderIntent;

    fn market() -> SmartOrder {
        SmartOrder::draft(OrderIntent::Market {
            symbol: "SOL".to_string(),
            amount: 1.0,
        })
    }

    #[tokio::test]
    async fn test_never_fails_at_zero_rate() {
        let backend = SimulatedBackend::seeded(SimulationSettings::instant(0.0), 7);
        for _ in 0..50 {
            assert!(backend.execute(&market()).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_always_fails_at_full_rate() {
        let backend = SimulatedBackend::seeded(SimulationSettings::instant(1.0), 7);
        let err = backend.execute(&market()).await.unwrap_err();
        assert!(err.contains("Execution failed"));
    }

    #[tokio::test]
    async fn test_validation_rejects_invalid_intent() {
        let backend = SimulatedBackend::seeded(SimulationSettings::instant(0.0), 1);
        let order = SmartOrder::draft(OrderIntent::Invalid {
            validation_error: "Unknown command: SELL".to_string(),
        });
        assert_eq!(
            backend.validate(&order).await,
            Err("Unknown command: SELL".to_string())
        );
        assert!(backend.validate(&market()).await.is_ok());
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        let backend = SimulatedBackend::seeded(SimulationSettings::instant(3.0), 1);
        assert_eq!(backend.settings().failure_rate, 1.0);
        let backend = SimulatedBackend::seeded(SimulationSettings::instant(f64::NAN), 1);
        assert_eq!(backend.settings().failure_rate, 0.0);
    }

    #[tokio::test]
    async fn test_same_seed_same_outcomes() {
        let a = SimulatedBackend::seeded(SimulationSettings::instant(0.5), 99);
        let b = SimulatedBackend::seeded(SimulationSettings::instant(0.5), 99);
        for _ in 0..20 {
            let order = market();
            assert_eq!(a.execute(&order).await.is_ok(), b.execute(&order).await.is_ok());
        }
    }
}
