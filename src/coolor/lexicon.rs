//! Lexicon
//!
//!     The fixed vocabulary of the command language. Classification works on the
//!     uppercase form of a unit and follows a strict priority order:
//!
//!         keyword -> color -> adjective -> number -> symbol
//!
//!     so `:` (listed as a keyword) is always a Keyword, never a Symbol.
//!
//!     The standard lexicon is built once, on first use, and is never mutated
//!     afterwards. Every parser shares it by reference.

use crate::coolor::lexing::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub const KEYWORDS: &[&str] = &[
    "MAKE", "GENERATE", "PALETTE", "COLOR", "COLORS", "FROM", "TO", ":",
];

pub const COLORS: &[&str] = &["RED", "GREEN", "BLUE", "YELLOW", "BLACK", "BROWN", "ORANGE"];

pub const ADJECTIVES: &[&str] = &["LIGHT", "DARK"];

pub const SYMBOLS: &[&str] = &["(", ")", ":"];

static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// The process-wide lexicon used by [tokenize](crate::coolor::lexing::tokenize).
pub static STANDARD_LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::standard);

/// Word sets used to classify units.
#[derive(Debug, Clone)]
pub struct Lexicon {
    keywords: HashSet<&'static str>,
    colors: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
}

impl Lexicon {
    /// Build the lexicon of the palette command language.
    pub fn standard() -> Self {
        Self {
            keywords: KEYWORDS.iter().copied().collect(),
            colors: COLORS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
        }
    }

    /// Classify a single unit, or `None` if it belongs to no category.
    pub fn classify(&self, unit: &str) -> Option<TokenKind> {
        let word = unit.to_uppercase();

        if self.keywords.contains(word.as_str()) {
            Some(TokenKind::Keyword)
        } else if self.colors.contains(word.as_str()) {
            Some(TokenKind::Color)
        } else if self.adjectives.contains(word.as_str()) {
            Some(TokenKind::Adjective)
        } else if NUMBER_REGEX.is_match(unit) {
            Some(TokenKind::Number)
        } else if SYMBOLS.contains(&unit) {
            Some(TokenKind::Symbol)
        } else {
            None
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}
