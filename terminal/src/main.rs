//! `rinlab` command line entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib_core::config::init_config;
use rinlab_terminal::app::handlers::{agent, map, theme as theme_handler};
use rinlab_terminal::app::App;
use rinlab_terminal::debug::{self, DebugConfig};
use rinlab_terminal::ui::theme;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rinlab")]
#[command(about = "Retro DeFi network map and smart order agent console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the network topology map
    Map {
        /// Grid columns
        #[arg(long)]
        width: Option<usize>,

        /// Grid rows
        #[arg(long)]
        height: Option<usize>,

        /// Number of sample nodes
        #[arg(long)]
        nodes: Option<usize>,

        /// Seed for a reproducible network
        #[arg(long)]
        seed: Option<u64>,

        /// Redraw on every refresh until Ctrl-C
        #[arg(short, long)]
        watch: bool,
    },

    /// Interactive smart order console
    Agent,

    /// Write or show the glyph theme
    Theme {
        /// Write a starter theme to this path
        #[arg(long, value_name = "PATH")]
        init: Option<PathBuf>,

        /// Use plain ASCII glyphs for the starter theme
        #[arg(long)]
        ascii: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _log_guard = debug::init(&DebugConfig::from_env());
    let config = init_config().context("invalid configuration")?.clone();

    match cli.command {
        Command::Map {
            width,
            height,
            nodes,
            seed,
            watch,
        } => {
            let overrides = map::MapOverrides {
                width,
                height,
                nodes,
                seed,
            };
            let config = overrides.apply(config)?;
            let app = App::new(config.clone(), theme::load_or_default(&config.theme_path));
            if watch {
                map::watch(&app).await?;
            } else {
                map::print_once(&app)?;
            }
        }
        Command::Agent => {
            let app = App::new(config.clone(), theme::load_or_default(&config.theme_path));
            agent::run(&app).await?;
        }
        Command::Theme { init, ascii, force } => match init {
            Some(path) => {
                theme_handler::init_theme(&path, ascii, force)?;
                println!("Wrote glyph theme to {}", path.display());
            }
            None => println!("{}", theme_handler::show_theme(&config.theme_path)?),
        },
    }

    Ok(())
}
