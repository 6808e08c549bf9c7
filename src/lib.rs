//! # coolor
//!
//! A tokenizer and parser for the coolor palette command language.
//!
//! A command such as `GENERATE PALETTE 5 COLORS` goes through two stages:
//!
//!     1. Lexing. The raw text is split into units and every unit is classified
//!        against the lexicon (keyword, color, adjective, number, symbol).
//!        See [lexing](coolor::lexing).
//!
//!     2. Parsing. A single forward cursor walks the tokens and enforces the
//!        grammar, producing a [PaletteCommand](coolor::ast::PaletteCommand).
//!        See [parsing](coolor::parsing).
//!
//! Any violation is fatal for the call: there is no recovery and no partial result.
//! Callers get exactly one error type, [ParseError](coolor::error::ParseError), whose
//! `Display` output is meant to be shown to the user verbatim.

pub mod coolor;

pub use coolor::ast::{BaseColor, ColorRange, CommandVerb, PaletteCommand, Shade, ShadedColor};
pub use coolor::error::{LexError, ParseError};
pub use coolor::lexing::{tokenize, Token, TokenKind};
pub use coolor::parsing::{parse, parse_with, Grammar, Parser};
