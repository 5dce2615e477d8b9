//! # Agent Console Commands
//!
//! Parsing of the smart order agent's command language.
//!
//! - [`parser`]: the four order grammars (`BUY`, `SMART`, `TRAIL`, `EXIT`)
//! - [`console`]: console meta commands layered on top
//! - [`error`]: validation errors
//!
//! Validation failures are values, not panics or aborts:
//!
//! ```rust
//! use lib_core::command::parse;
//!
//! let intent = parse("BUY -1 SOL");
//! assert!(!intent.is_valid());
//! assert!(intent.validation_error().is_some());
//! ```

pub mod console;
pub mod error;
pub mod parser;

pub use console::{help_text, ConsoleCommand};
pub use error::CommandError;
pub use parser::{parse, try_parse};
