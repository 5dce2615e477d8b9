//! # Order Command Parser
//!
//! The mini-DSL typed into the smart order agent console. Input is
//! uppercased, split on whitespace and dispatched on the first token:
//!
//! | Command | Tokens |
//! |---|---|
//! | `BUY <amount> <symbol>` | 3 |
//! | `SMART <symbol> TP <price> SL <price> DCA <levels>` | 8 |
//! | `TRAIL <symbol> <TP\|SL> <percent>` | 4 |
//! | `EXIT <symbol> ON <PROFIT\|VOLUME\|HOLDERS>` | 4 |
//!
//! Parsing is pure: the same string always yields the same result.

use super::error::CommandError;
use shared::dto::order::{ExitCondition, OrderIntent, TrailSide};

pub const BUY_USAGE: &str = "BUY <amount> <symbol>";
pub const SMART_USAGE: &str = "SMART <symbol> TP <price> SL <price> DCA <levels>";
pub const TRAIL_USAGE: &str = "TRAIL <symbol> <TP|SL> <percent>";
pub const EXIT_USAGE: &str = "EXIT <symbol> ON <PROFIT|VOLUME|HOLDERS>";

/// Upper bound for DCA ladder depth
pub const MAX_DCA_LEVELS: i64 = 100;

/// Parse a command, folding any rejection into `OrderIntent::Invalid`.
pub fn parse(input: &str) -> OrderIntent {
    try_parse(input).unwrap_or_else(|err| OrderIntent::Invalid {
        validation_error: err.to_string(),
    })
}

/// Parse a command into a valid intent or the reason it was rejected.
///
/// Never returns `OrderIntent::Invalid`.
pub fn try_parse(input: &str) -> Result<OrderIntent, CommandError> {
    let upper = input.to_uppercase();
    let tokens: Vec<&str> = upper.split_whitespace().collect();

    let Some(&command) = tokens.first() else {
        return Err(CommandError::Empty);
    };

    match command {
        "BUY" => parse_buy(&tokens),
        "SMART" => parse_smart(&tokens),
        "TRAIL" => parse_trail(&tokens),
        "EXIT" => parse_exit(&tokens),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_buy(tokens: &[&str]) -> Result<OrderIntent, CommandError> {
    expect_arity(tokens, "BUY", 3, BUY_USAGE)?;
    let amount = positive_number("amount", tokens[1])?;
    Ok(OrderIntent::Market {
        symbol: tokens[2].to_string(),
        amount,
    })
}

fn parse_smart(tokens: &[&str]) -> Result<OrderIntent, CommandError> {
    expect_arity(tokens, "SMART", 8, SMART_USAGE)?;
    expect_keyword(tokens, 2, "TP")?;
    expect_keyword(tokens, 4, "SL")?;
    expect_keyword(tokens, 6, "DCA")?;

    let take_profit = positive_number("take profit", tokens[3])?;
    let stop_loss = positive_number("stop loss", tokens[5])?;
    let dca_levels = dca_levels(tokens[7])?;

    Ok(OrderIntent::Smart {
        symbol: tokens[1].to_string(),
        take_profit,
        stop_loss,
        dca_levels,
    })
}

fn parse_trail(tokens: &[&str]) -> Result<OrderIntent, CommandError> {
    expect_arity(tokens, "TRAIL", 4, TRAIL_USAGE)?;
    let side = match tokens[2] {
        "TP" => TrailSide::Tp,
        "SL" => TrailSide::Sl,
        other => {
            return Err(CommandError::InvalidChoice {
                field: "trailing side",
                value: other.to_string(),
                expected: "TP or SL",
            })
        }
    };

    let trailing_percent = positive_number("trailing percent", tokens[3])?;
    if trailing_percent > 100.0 {
        return Err(CommandError::OutOfRange {
            field: "trailing percent",
            value: tokens[3].to_string(),
            min: "0",
            max: "100",
        });
    }

    Ok(OrderIntent::Trailing {
        symbol: tokens[1].to_string(),
        side,
        trailing_percent,
    })
}

fn parse_exit(tokens: &[&str]) -> Result<OrderIntent, CommandError> {
    expect_arity(tokens, "EXIT", 4, EXIT_USAGE)?;
    expect_keyword(tokens, 2, "ON")?;

    let condition = match tokens[3] {
        "PROFIT" => ExitCondition::Profit,
        "VOLUME" => ExitCondition::Volume,
        "HOLDERS" => ExitCondition::Holders,
        other => {
            return Err(CommandError::InvalidChoice {
                field: "exit condition",
                value: other.to_string(),
                expected: "PROFIT, VOLUME or HOLDERS",
            })
        }
    };

    Ok(OrderIntent::Exit {
        symbol: tokens[1].to_string(),
        condition,
    })
}

fn expect_arity(
    tokens: &[&str],
    command: &'static str,
    expected: usize,
    usage: &'static str,
) -> Result<(), CommandError> {
    if tokens.len() != expected {
        return Err(CommandError::ArgumentCount {
            command,
            expected,
            found: tokens.len(),
            usage,
        });
    }
    Ok(())
}

fn expect_keyword(tokens: &[&str], position: usize, keyword: &'static str) -> Result<(), CommandError> {
    match tokens.get(position) {
        Some(&found) if found == keyword => Ok(()),
        found => Err(CommandError::Keyword {
            position,
            expected: keyword,
            found: found.map(|s| s.to_string()).unwrap_or_default(),
        }),
    }
}

/// Finite, strictly positive float
fn positive_number(field: &'static str, token: &str) -> Result<f64, CommandError> {
    let value = token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::NotANumber {
            field,
            value: token.to_string(),
        })?;

    if value <= 0.0 {
        return Err(CommandError::NotPositive {
            field,
            value: token.to_string(),
        });
    }
    Ok(value)
}

fn dca_levels(token: &str) -> Result<u32, CommandError> {
    let levels = token.parse::<i64>().map_err(|_| CommandError::NotANumber {
        field: "DCA levels",
        value: token.to_string(),
    })?;

    if levels <= 0 {
        return Err(CommandError::NotPositive {
            field: "DCA levels",
            value: token.to_string(),
        });
    }
    if levels > MAX_DCA_LEVELS {
        return Err(CommandError::OutOfRange {
            field: "DCA levels",
            value: token.to_string(),
            min: "1",
            max: "100",
        });
    }
    Ok(levels as u32)
}
