//! Agent console input: meta commands plus order commands.

use super::error::CommandError;
use super::parser::{self, BUY_USAGE, EXIT_USAGE, SMART_USAGE, TRAIL_USAGE};
use shared::dto::order::OrderIntent;
use std::str::FromStr;

/// One line typed into the agent console
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// A valid order command
    Order(OrderIntent),
    /// `HELP` or `?`
    Help,
    /// `ORDERS`: list submitted orders
    Orders,
    /// `MAP`: print the current network map
    Map,
    /// `CLEAR`: drop finished orders from the list
    Clear,
    /// `QUIT`, `EXIT` alone, or `Q`
    Quit,
    /// Blank line
    NoOperation,
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let trimmed = source.trim();
        match trimmed.to_uppercase().as_str() {
            "" => Ok(Self::NoOperation),
            "HELP" | "?" => Ok(Self::Help),
            "ORDERS" => Ok(Self::Orders),
            "MAP" => Ok(Self::Map),
            "CLEAR" => Ok(Self::Clear),
            // bare EXIT leaves the console; EXIT with arguments is an order
            "QUIT" | "Q" | "EXIT" => Ok(Self::Quit),
            _ => parser::try_parse(trimmed).map(Self::Order),
        }
    }
}

/// Help text listing every command
pub fn help_text() -> String {
    [
        "ORDER COMMANDS",
        &format!("  {}", BUY_USAGE),
        &format!("  {}", SMART_USAGE),
        &format!("  {}", TRAIL_USAGE),
        &format!("  {}", EXIT_USAGE),
        "CONSOLE",
        "  ORDERS   list orders",
        "  MAP      show network map",
        "  CLEAR    remove finished orders",
        "  HELP     this text",
        "  QUIT     leave the console",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::order::ExitCondition;

    #[test]
    fn test_meta_commands() {
        assert_eq!("help".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Help));
        assert_eq!("?".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Help));
        assert_eq!(" orders ".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Orders));
        assert_eq!("Map".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Map));
        assert_eq!("clear".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Clear));
        assert_eq!("q".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Quit));
        assert_eq!("".parse::<ConsoleCommand>(), Ok(ConsoleCommand::NoOperation));
    }

    #[test]
    fn test_bare_exit_quits_but_exit_order_parses() {
        assert_eq!("exit".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Quit));
        assert_eq!(
            "exit sol on volume".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Order(OrderIntent::Exit {
                symbol: "SOL".to_string(),
                condition: ExitCondition::Volume,
            }))
        );
    }

    #[test]
    fn test_order_errors_propagate() {
        assert_eq!(
            "BUY SOL".parse::<ConsoleCommand>().unwrap_err().to_string(),
            "BUY expects 3 tokens, got 2. Usage: BUY <amount> <symbol>"
        );
        assert!(matches!(
            "WAT".parse::<ConsoleCommand>(),
            Err(CommandError::Unknown(_))
        ));
    }

    #[test]
    fn test_help_lists_all_grammars() {
        let help = help_text();
        for usage in [BUY_USAGE, SMART_USAGE, TRAIL_USAGE, EXIT_USAGE] {
            assert!(help.contains(usage));
        }
    }
}
