//! Parser
//!
//!     Validates a command string against the palette grammar and extracts the
//!     [PaletteCommand](crate::coolor::ast::PaletteCommand).
//!
//!     Each call tokenizes its own input and owns its own cursor, so parsing shares
//!     nothing between calls except the read-only lexicon and is safe to run from
//!     several threads at once.
//!
//!     See [grammar](grammar) for the accepted language and [parser](parser) for the
//!     validation steps.

pub mod grammar;
pub mod parser;

pub use grammar::Grammar;
pub use parser::Parser;

use crate::coolor::ast::PaletteCommand;
use crate::coolor::error::ParseError;

/// Parse a command with the active (core) grammar.
pub fn parse(source: &str) -> Result<PaletteCommand, ParseError> {
    parse_with(source, Grammar::Core)
}

/// Parse a command with an explicitly selected grammar.
pub fn parse_with(source: &str, grammar: Grammar) -> Result<PaletteCommand, ParseError> {
    let result = Parser::new(source, grammar).and_then(Parser::parse);

    match &result {
        Ok(command) => tracing::debug!(grammar = grammar.name(), %command, "parsed command"),
        Err(err) => tracing::debug!(grammar = grammar.name(), error = %err, "rejected command"),
    }

    result
}
