//! # Simulated Order Execution
//!
//! - [`backend`]: the [`ExecutionBackend`] seam and its simulated implementation
//! - [`lifecycle`]: walks a smart order through its states and publishes events

pub mod backend;
pub mod lifecycle;

pub use backend::{ExecutionBackend, SimulatedBackend, SimulationSettings};
pub use lifecycle::{OrderEvent, OrderLifecycle};
