//! # Application Core
//!
//! The [`App`] ties the console together:
//!
//! ```text
//!   stdin ──► handle_line ──► ConsoleCommand ──► tasks::orders ─┐
//!                                                                 │ AppEvent
//!   tasks::network (ticker) ──────────────────────────────────────┤
//!                                                                 ▼
//!   stdout ◄── handle_event ◄── event_rx ◄──────────────── async_channel
//! ```
//!
//! Background tasks never print; they send [`AppEvent`]s and the console loop
//! turns them into output. Shared state sits behind `Arc<RwLock<AppState>>`
//! and every lock is held only for the duration of a copy or an update.

pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;

pub use events::AppEvent;
pub use state::AppState;

use crate::ui::render;
use crate::utils::validation::validate_console_line;
use async_channel::{unbounded, Receiver, Sender};
use lib_core::command::{help_text, ConsoleCommand};
use lib_core::config::Config;
use lib_core::order::{ExecutionBackend, OrderLifecycle, SimulatedBackend};
use lib_core::sample::SampleNetwork;
use lib_core::topology::GlyphTheme;
use parking_lot::RwLock;
use std::sync::Arc;
use tasks::NetworkTicker;
use tokio::task::JoinHandle;

/// What the console loop should do after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOutcome {
    /// Print this text
    Print(String),
    /// Leave the console
    Quit,
    /// Nothing to show
    Nothing,
}

/// Main application struct
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender, cloned into every background task.
    event_tx: Sender<AppEvent>,

    lifecycle: OrderLifecycle,
    config: Config,
}

impl App {
    /// App backed by the simulated execution backend from `config`.
    pub fn new(config: Config, theme: GlyphTheme) -> Self {
        let settings = config.simulation_settings();
        let backend = match config.sample_seed {
            Some(seed) => SimulatedBackend::seeded(settings, seed),
            None => SimulatedBackend::new(settings),
        };
        Self::with_backend(config, theme, Arc::new(backend))
    }

    pub fn with_backend(config: Config, theme: GlyphTheme, backend: Arc<dyn ExecutionBackend>) -> Self {
        let (event_tx, event_rx) = unbounded();
        let state = AppState::new(&config, theme);

        tracing::info!(
            backend = backend.name(),
            grid_width = config.grid_width,
            grid_height = config.grid_height,
            "App state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            lifecycle: OrderLifecycle::new(backend),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start the periodic network refresh
    pub fn start_network_ticker(&self) -> JoinHandle<()> {
        let ticker = NetworkTicker {
            node_count: self.config.node_count,
            interval: self.config.refresh_interval(),
            seed: self.config.sample_seed,
        };
        tasks::network::spawn_network_ticker(ticker, self.event_tx.clone())
    }

    /// Generate one network snapshot synchronously, for one-shot output
    pub fn refresh_network_now(&self) {
        let nodes = SampleNetwork::from_seed_option(self.config.sample_seed).nodes(self.config.node_count);
        self.state.write().set_nodes(nodes);
    }

    /// Apply an event to the state and return what to print, if anything.
    ///
    /// Network refreshes are silent; order updates print one status line.
    pub fn handle_event(&self, event: AppEvent) -> Option<String> {
        match event {
            AppEvent::NetworkUpdated(nodes) => {
                let mut state = self.state.write();
                state.set_nodes(nodes);
                tracing::debug!(version = state.network_version, "Network updated");
                None
            }
            AppEvent::OrderUpdated(order) => {
                let line = render::render_order_event(&order);
                self.state.write().upsert_order(order);
                Some(line)
            }
            AppEvent::TaskFailed(reason) => {
                tracing::warn!(%reason, "Background task failed");
                Some(format!("✗ {}", reason))
            }
        }
    }

    /// Drain every pending event without waiting
    pub fn drain_events(&self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            lines.extend(self.handle_event(event));
        }
        lines
    }

    /// Interpret one console line.
    ///
    /// Order commands are handed to a background lifecycle task; status
    /// changes come back later through [`App::handle_event`]. Must be called
    /// from within a tokio runtime.
    pub fn handle_line(&self, line: &str) -> ConsoleOutcome {
        let check = validate_console_line(line);
        if let Some(error) = check.error {
            return ConsoleOutcome::Print(format!("✗ {}", error));
        }

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(input = %line.trim(), error = %e, "Command rejected");
                return ConsoleOutcome::Print(format!("✗ {}", e));
            }
        };

        match command {
            ConsoleCommand::Order(intent) => {
                let summary = intent.describe();
                tasks::orders::submit_order(self.lifecycle.clone(), intent, self.event_tx.clone());
                ConsoleOutcome::Print(format!("→ Submitted: {}", summary))
            }
            ConsoleCommand::Help => ConsoleOutcome::Print(help_text()),
            ConsoleCommand::Orders => {
                let state = self.state.read();
                ConsoleOutcome::Print(render::render_orders(&state.orders))
            }
            ConsoleCommand::Map => ConsoleOutcome::Print(self.map_panel()),
            ConsoleCommand::Clear => {
                let removed = self.state.write().clear_finished();
                ConsoleOutcome::Print(format!("Removed {} finished orders", removed))
            }
            ConsoleCommand::Quit => ConsoleOutcome::Quit,
            ConsoleCommand::NoOperation => ConsoleOutcome::Nothing,
        }
    }

    /// Map plus node table for the current snapshot
    pub fn map_panel(&self) -> String {
        let (nodes, frame, theme) = {
            let state = self.state.read();
            (state.nodes.clone(), state.frame, state.theme.clone())
        };
        format!(
            "{}\n\n{}",
            render::render_map(&nodes, &frame, &theme, lib_utils::now_utc()),
            render::render_node_table(&nodes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::order::SimulationSettings;
    use shared::dto::order::OrderStatus;

    fn app(failure_rate: f64) -> App {
        let config = Config {
            sample_seed: Some(9),
            node_count: 6,
            ..Config::default()
        };
        let backend = SimulatedBackend::seeded(SimulationSettings::instant(failure_rate), 9);
        App::with_backend(config, GlyphTheme::default(), Arc::new(backend))
    }

    async fn settle(app: &App) -> Vec<String> {
        let mut lines = Vec::new();
        loop {
            {
                let state = app.state.read();
                if !state.orders.is_empty() && state.pending_orders() == 0 {
                    break;
                }
            }
            let event = app.event_rx.recv().await.unwrap();
            lines.extend(app.handle_event(event));
        }
        lines
    }

    #[tokio::test]
    async fn test_order_command_runs_to_completion() {
        let app = app(0.0);
        let outcome = app.handle_line("buy 1.5 sol");
        assert_eq!(
            outcome,
            ConsoleOutcome::Print("→ Submitted: Market buy 1.5 SOL".to_string())
        );

        let lines = settle(&app).await;
        assert_eq!(lines.len(), 4);
        assert!(lines[3].contains("completed"));
        assert_eq!(app.state.read().orders[0].status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn test_failed_order_is_listed_with_reason() {
        let app = app(1.0);
        app.handle_line("TRAIL SOL SL 3");
        settle(&app).await;

        match app.handle_line("ORDERS") {
            ConsoleOutcome::Print(table) => {
                assert!(table.contains("failed"));
                assert!(table.contains("↳ Execution failed"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(
            app.handle_line("clear"),
            ConsoleOutcome::Print("Removed 1 finished orders".to_string())
        );
    }

    #[tokio::test]
    async fn test_rejected_commands_are_printed_not_submitted() {
        let app = app(0.0);
        assert_eq!(
            app.handle_line("BUY -1 SOL"),
            ConsoleOutcome::Print("✗ Invalid amount: must be greater than 0, got -1".to_string())
        );
        assert!(matches!(app.handle_line("SELL 1 SOL"), ConsoleOutcome::Print(text) if text.contains("Unknown command: SELL")));
        assert!(app.state.read().orders.is_empty());
        assert!(app.event_rx.is_empty());
    }

    #[tokio::test]
    async fn test_meta_commands() {
        let app = app(0.0);
        assert_eq!(app.handle_line("   "), ConsoleOutcome::Nothing);
        assert_eq!(app.handle_line("quit"), ConsoleOutcome::Quit);
        assert!(matches!(app.handle_line("help"), ConsoleOutcome::Print(text) if text.contains("BUY <amount> <symbol>")));
    }

    #[test]
    fn test_map_panel_uses_refreshed_network() {
        let app = app(0.0);
        app.refresh_network_now();
        let panel = app.map_panel();
        assert!(panel.contains("NODES 6"));
        assert!(panel.contains("node-05"));
    }

    #[test]
    fn test_network_events_are_silent() {
        let app = app(0.0);
        let nodes = SampleNetwork::seeded(1).nodes(3);
        assert_eq!(app.handle_event(AppEvent::NetworkUpdated(nodes)), None);
        assert_eq!(app.state.read().nodes.len(), 3);
        assert_eq!(
            app.handle_event(AppEvent::TaskFailed("boom".to_string())),
            Some("✗ boom".to_string())
        );
    }
}
