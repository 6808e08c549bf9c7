//! Lexer
//!
//!     Turns a raw command string into classified tokens. This runs in two steps:
//!
//!         1. Base tokenization with logos. See [base_tokenization](base_tokenization).
//!            Whitespace separates units and produces nothing. A unit is either a
//!            maximal run of word characters or a single other character.
//!
//!         2. Classification against the lexicon. See [lexicon](crate::coolor::lexicon).
//!            Each unit becomes a [Token] carrying its original text and span.
//!
//!     Tokenization is fail-fast: the first unit that fits no category aborts the
//!     whole call with a [LexError] and no tokens are returned. Empty input is not an
//!     error here, it yields an empty sequence (the parser rejects it).

pub mod base_tokenization;
pub mod tokens;

pub use tokens::{Token, TokenKind, Unit};

use crate::coolor::error::LexError;
use crate::coolor::lexicon::{Lexicon, STANDARD_LEXICON};

/// Tokenize a command string with the standard lexicon.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, &STANDARD_LEXICON)
}

/// Tokenize a command string with an explicit lexicon.
pub fn tokenize_with(source: &str, lexicon: &Lexicon) -> Result<Vec<Token>, LexError> {
    let spans = base_tokenization::scan(source);
    let mut tokens = Vec::with_capacity(spans.len());

    for span in spans {
        let text = &source[span.clone()];
        match lexicon.classify(text) {
            Some(kind) => tokens.push(Token::new(kind, text, span)),
            None => {
                tracing::debug!(unit = text, "unclassifiable unit");
                return Err(LexError::Undefined {
                    text: text.to_string(),
                    span,
                });
            }
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}
