//! # Async Tasks
//!
//! Background work feeding the console loop: the network ticker and one
//! task per submitted order.

pub mod network;
pub mod orders;

pub use network::NetworkTicker;
