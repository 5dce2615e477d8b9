//! # Application Configuration
//!
//! This module manages configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! ## Variables
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `RINLAB_GRID_WIDTH` | 48 | Topology grid columns |
//! | `RINLAB_GRID_HEIGHT` | 16 | Topology grid rows |
//! | `RINLAB_SPACING_X` | 2 | Columns between node slots |
//! | `RINLAB_SPACING_Y` | 2 | Rows between node slots |
//! | `RINLAB_NODE_COUNT` | 12 | Nodes per generated sample network |
//! | `RINLAB_REFRESH_MS` | 5000 | Sample network refresh cadence |
//! | `RINLAB_FAILURE_RATE` | 0.10 | Simulated execution failure probability |
//! | `RINLAB_VALIDATING_MS` | 1000 | Simulated validation delay |
//! | `RINLAB_EXECUTING_MS` | 2000 | Simulated execution delay |
//! | `RINLAB_SEED` | unset | Seed for sample data and simulated fills |
//! | `RINLAB_THEME_PATH` | `config/theme.json` | Glyph theme file |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let width = core_config().grid_width;
//! ```

use crate::error::{CoreError, Result};
use crate::order::SimulationSettings;
use crate::topology::LayoutOptions;
use lib_utils::envs::{get_env_or, get_env_parse, get_env_parse_or};
use lib_utils::validation::{validate_not_empty, validate_probability, validate_range};
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub grid_width: usize,
    pub grid_height: usize,
    pub spacing_x: usize,
    pub spacing_y: usize,
    pub node_count: usize,
    pub refresh_interval_ms: u64,
    /// Probability in `[0, 1]` that a simulated execution fails
    pub failure_rate: f64,
    pub validating_delay_ms: u64,
    pub executing_delay_ms: u64,
    /// Fixed seed for reproducible demo sessions
    pub sample_seed: Option<u64>,
    pub theme_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 48,
            grid_height: 16,
            spacing_x: 2,
            spacing_y: 2,
            node_count: 12,
            refresh_interval_ms: 5000,
            failure_rate: 0.10,
            validating_delay_ms: 1000,
            executing_delay_ms: 2000,
            sample_seed: None,
            theme_path: PathBuf::from("config/theme.json"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let sample_seed = match get_env_parse::<u64>("RINLAB_SEED") {
            Ok(seed) => Some(seed),
            Err(lib_utils::envs::Error::MissingEnv(_)) => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            grid_width: get_env_parse_or("RINLAB_GRID_WIDTH", defaults.grid_width)?,
            grid_height: get_env_parse_or("RINLAB_GRID_HEIGHT", defaults.grid_height)?,
            spacing_x: get_env_parse_or("RINLAB_SPACING_X", defaults.spacing_x)?,
            spacing_y: get_env_parse_or("RINLAB_SPACING_Y", defaults.spacing_y)?,
            node_count: get_env_parse_or("RINLAB_NODE_COUNT", defaults.node_count)?,
            refresh_interval_ms: get_env_parse_or("RINLAB_REFRESH_MS", defaults.refresh_interval_ms)?,
            failure_rate: get_env_parse_or("RINLAB_FAILURE_RATE", defaults.failure_rate)?,
            validating_delay_ms: get_env_parse_or("RINLAB_VALIDATING_MS", defaults.validating_delay_ms)?,
            executing_delay_ms: get_env_parse_or("RINLAB_EXECUTING_MS", defaults.executing_delay_ms)?,
            sample_seed,
            theme_path: PathBuf::from(get_env_or("RINLAB_THEME_PATH", "config/theme.json")),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            validate_range(self.grid_width, 1, 512, "RINLAB_GRID_WIDTH"),
            validate_range(self.grid_height, 1, 256, "RINLAB_GRID_HEIGHT"),
            validate_range(self.spacing_x, 1, 64, "RINLAB_SPACING_X"),
            validate_range(self.spacing_y, 1, 64, "RINLAB_SPACING_Y"),
            validate_range(self.node_count, 0, 1024, "RINLAB_NODE_COUNT"),
            validate_range(self.refresh_interval_ms, 100, 3_600_000, "RINLAB_REFRESH_MS"),
            validate_probability(self.failure_rate, "RINLAB_FAILURE_RATE"),
            validate_range(self.validating_delay_ms, 0, 60_000, "RINLAB_VALIDATING_MS"),
            validate_range(self.executing_delay_ms, 0, 60_000, "RINLAB_EXECUTING_MS"),
            validate_not_empty(&self.theme_path.to_string_lossy(), "RINLAB_THEME_PATH"),
        ];

        for check in checks {
            check.map_err(CoreError::Config)?;
        }
        Ok(())
    }

    /// Slot geometry for the topology placer
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            spacing_x: self.spacing_x,
            spacing_y: self.spacing_y,
            ..LayoutOptions::default()
        }
    }

    /// Delays and failure odds for the simulated execution backend
    pub fn simulation_settings(&self) -> SimulationSettings {
        SimulationSettings {
            validating_delay: Duration::from_millis(self.validating_delay_ms),
            executing_delay: Duration::from_millis(self.executing_delay_ms),
            failure_rate: self.failure_rate,
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load, validate and install the global configuration.
///
/// # Errors
///
/// Returns an error if environment variables are malformed, validation fails,
/// or the config has already been initialized.
pub fn init_config() -> Result<&'static Config> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| CoreError::Config("Config has already been initialized".to_string()))?;
    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// Falls back to [`Config::default`] when [`init_config`] was never called,
/// which keeps library users and tests free of startup ordering concerns.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
