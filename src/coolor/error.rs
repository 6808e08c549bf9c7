//! Error types for lexing and parsing
//!
//! There are two kinds of failure. A [LexError] means some unit of the input could not
//! be classified at all. A [ParseError] means the tokens are fine but the command does
//! not follow the grammar. The parser wraps every `LexError` into
//! [ParseError::Lexing], so callers only ever handle `ParseError`.
//!
//! The `Display` output of both types is the user-facing message.

use crate::coolor::lexing::TokenKind;
use std::fmt;
use std::ops::Range;

/// Failure to classify a unit of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The unit is not a keyword, color, adjective, number or symbol.
    Undefined { text: String, span: Range<usize> },
}

impl LexError {
    pub fn text(&self) -> &str {
        match self {
            LexError::Undefined { text, .. } => text,
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            LexError::Undefined { span, .. } => span.clone(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::Undefined { text, .. } => {
                write!(f, "\"{}\" is not defined in the command language.", text)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Word(&'static str),
    AnyOf(&'static [&'static str]),
    Kind(TokenKind),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Word(word) => write!(f, "'{}'", word),
            Expected::AnyOf(words) => write!(f, "one of [{}]", words.join(", ")),
            Expected::Kind(TokenKind::Adjective) => write!(f, "adjective (LIGHT or DARK)"),
            Expected::Kind(TokenKind::Color) => write!(f, "color (RED, BLUE, etc.)"),
            Expected::Kind(TokenKind::Number) => write!(f, "a number (2-9)"),
            Expected::Kind(kind) => write!(f, "{}", kind),
        }
    }
}

/// What the parser saw instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token(String),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(text) => write!(f, "'{}'", text),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Grammar violation, or a lexing failure surfaced through the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Lexing(LexError),
    EmptyInput,
    Unexpected { expected: Expected, found: Found },
    NumberOutOfRange { found: String },
    TrailingToken { found: String },
}

impl ParseError {
    pub fn unexpected(expected: Expected, found: Found) -> Self {
        ParseError::Unexpected { expected, found }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lexing(err) => write!(f, "Lexing Error: {}", err),
            ParseError::EmptyInput => write!(f, "Input is empty."),
            ParseError::Unexpected { expected, found } => {
                write!(f, "Syntax error: Expected {} but found {}", expected, found)
            }
            ParseError::NumberOutOfRange { found } => write!(
                f,
                "Syntax error: Expected number from 2 to 9 but found '{}'",
                found
            ),
            ParseError::TrailingToken { found } => write!(
                f,
                "Syntax error: Unexpected token '{}' after valid command.",
                found
            ),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lexing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lexing(err)
    }
}
