//! # Map Handler
//!
//! `rinlab map`: print the network map once, or redraw it on every refresh.

use crate::app::{App, AppEvent};
use crate::core::error::{AppError, Result};
use crate::utils::validation::validate_map_size;
use lib_core::config::Config;
use std::io::Write;

/// Command line overrides for the map view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub nodes: Option<usize>,
    pub seed: Option<u64>,
}

impl MapOverrides {
    /// Layer the overrides on top of `config` and re-validate
    pub fn apply(self, mut config: Config) -> Result<Config> {
        config.grid_width = self.width.unwrap_or(config.grid_width);
        config.grid_height = self.height.unwrap_or(config.grid_height);
        config.node_count = self.nodes.unwrap_or(config.node_count);
        config.sample_seed = self.seed.or(config.sample_seed);

        let check = validate_map_size(config.grid_width, config.grid_height);
        if let Some(error) = check.error {
            return Err(AppError::Validation(error));
        }
        config.validate()?;
        Ok(config)
    }
}

/// Print one snapshot and exit
pub fn print_once(app: &App) -> Result<()> {
    app.refresh_network_now();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", app.map_panel())?;
    Ok(())
}

/// Redraw on every ticker refresh until Ctrl-C
pub async fn watch(app: &App) -> Result<()> {
    let ticker = app.start_network_ticker();
    tracing::info!("Map watch started");

    loop {
        tokio::select! {
            event = app.event_rx.recv() => {
                let event = event.map_err(|_| AppError::State("event channel closed".to_string()))?;
                let redraw = matches!(event, AppEvent::NetworkUpdated(_));
                if let Some(line) = app.handle_event(event) {
                    println!("{}", line);
                }
                if redraw {
                    let mut stdout = std::io::stdout().lock();
                    // clear screen, cursor home
                    write!(stdout, "\x1b[2J\x1b[H{}\n\nCtrl-C to quit\n", app.map_panel())?;
                    stdout.flush()?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Map watch interrupted");
                break;
            }
        }
    }

    ticker.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let overrides = MapOverrides {
            width: Some(80),
            nodes: Some(3),
            seed: Some(42),
            ..MapOverrides::default()
        };
        let config = overrides.apply(Config::default()).unwrap();
        assert_eq!(config.grid_width, 80);
        assert_eq!(config.grid_height, 16);
        assert_eq!(config.node_count, 3);
        assert_eq!(config.sample_seed, Some(42));
    }

    #[test]
    fn test_overrides_are_validated() {
        let overrides = MapOverrides {
            height: Some(0),
            ..MapOverrides::default()
        };
        assert!(matches!(overrides.apply(Config::default()), Err(AppError::Validation(_))));

        let overrides = MapOverrides {
            nodes: Some(5000),
            ..MapOverrides::default()
        };
        assert!(matches!(overrides.apply(Config::default()), Err(AppError::Core(_))));
    }
}
