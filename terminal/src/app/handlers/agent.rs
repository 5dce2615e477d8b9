//! # Agent Console Handler
//!
//! `rinlab agent`: a line-oriented REPL for smart order commands. Input is
//! read from stdin while order status changes stream in from background
//! tasks; both are multiplexed with `tokio::select!`.

use crate::app::{App, ConsoleOutcome};
use crate::core::error::{AppError, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const BANNER: &str = "RINLAB SMART ORDER AGENT  (HELP for commands, QUIT to leave)";
const PROMPT: &str = "> ";

/// Run the console until `QUIT`, end of input or Ctrl-C
pub async fn run(app: &App) -> Result<()> {
    app.refresh_network_now();
    let ticker = app.start_network_ticker();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", BANNER);
    prompt()?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("Console input closed");
                    break;
                };
                match app.handle_line(&line) {
                    ConsoleOutcome::Print(text) => println!("{}", text),
                    ConsoleOutcome::Quit => break,
                    ConsoleOutcome::Nothing => {}
                }
                prompt()?;
            }
            event = app.event_rx.recv() => {
                let event = event.map_err(|_| AppError::State("event channel closed".to_string()))?;
                if let Some(line) = app.handle_event(event) {
                    println!("\r{}", line);
                    prompt()?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }

    ticker.abort();
    let pending = app.state.read().pending_orders();
    if pending > 0 {
        tracing::warn!(pending, "Console closed with orders still in flight");
    }
    tracing::info!("Agent console closed");
    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;
    Ok(())
}
