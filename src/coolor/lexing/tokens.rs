//! Token definitions for the coolor command language
//!
//! Two layers live here. [Unit] is the raw logos token: it only knows whether a piece
//! of input is whitespace, a word (`\w+`) or a single non-word, non-space character.
//! [Token] is what the parser consumes: a unit that the lexicon managed to classify,
//! with its original text and byte span.
//!
//! The logos patterns match a single character. Runs of word or space characters are
//! extended by [extend_run] with one regex scan, so the generated automaton never
//! loops and long runs cost no stack.
use logos::{Lexer, Logos};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w*").unwrap());
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*").unwrap());

/// Raw lexical units, before classification.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Unit {
    // Maximal run of whitespace, dropped by the scanner
    #[regex(r"\s", |lex| extend_run(lex, &SPACE_RUN))]
    Space,

    // Maximal run of alphanumeric/underscore characters
    #[regex(r"\w", |lex| extend_run(lex, &WORD_RUN))]
    Word,

    // Any single character that is neither a word character nor whitespace
    #[regex(r"[^\w\s]")]
    Mark,
}

/// Grow the current unit over the rest of its run.
fn extend_run(lex: &mut Lexer<Unit>, run: &Regex) {
    if let Some(found) = run.find(lex.remainder()) {
        lex.bump(found.end());
    }
}

/// Lexical category of a classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Color,
    Adjective,
    Number,
    Symbol,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Color => "color",
            TokenKind::Adjective => "adjective",
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
        };
        write!(f, "{}", name)
    }
}

/// A classified unit of input.
///
/// `text` keeps the original casing; only classification and matching look at the
/// uppercase form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Uppercase form used for every comparison against the grammar.
    pub fn normalized(&self) -> String {
        self.text.to_uppercase()
    }

    /// Case-insensitive comparison with a grammar word.
    pub fn matches(&self, word: &str) -> bool {
        self.normalized() == word.to_uppercase()
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_and_mark_units() {
        let mut lexer = Unit::lexer("FROM (light");
        assert_eq!(lexer.next(), Some(Ok(Unit::Word)));
        assert_eq!(lexer.slice(), "FROM");
        assert_eq!(lexer.next(), Some(Ok(Unit::Mark)));
        assert_eq!(lexer.slice(), "(");
        assert_eq!(lexer.next(), Some(Ok(Unit::Word)));
        assert_eq!(lexer.slice(), "light");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_whitespace_is_one_unit() {
        let mut lexer = Unit::lexer(" \t\n red");
        assert_eq!(lexer.next(), Some(Ok(Unit::Space)));
        assert_eq!(lexer.slice(), " \t\n ");
        assert_eq!(lexer.next(), Some(Ok(Unit::Word)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_long_runs_are_single_units() {
        let source = format!("{}{}", "ab".repeat(100_000), " ".repeat(100_000));
        let mut lexer = Unit::lexer(&source);
        assert_eq!(lexer.next(), Some(Ok(Unit::Word)));
        assert_eq!(lexer.span(), 0..200_000);
        assert_eq!(lexer.next(), Some(Ok(Unit::Space)));
        assert_eq!(lexer.span(), 200_000..300_000);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_marks_are_single_characters() {
        let mut lexer = Unit::lexer("):");
        assert_eq!(lexer.next(), Some(Ok(Unit::Mark)));
        assert_eq!(lexer.slice(), ")");
        assert_eq!(lexer.next(), Some(Ok(Unit::Mark)));
        assert_eq!(lexer.slice(), ":");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_underscore_and_digits_join_words() {
        let mut lexer = Unit::lexer("dark_red5");
        assert_eq!(lexer.next(), Some(Ok(Unit::Word)));
        assert_eq!(lexer.slice(), "dark_red5");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_token_matching_ignores_case() {
        let token = Token::new(TokenKind::Keyword, "PaLeTtE", 0..7);
        assert!(token.matches("palette"));
        assert!(token.matches("PALETTE"));
        assert!(!token.matches("COLORS"));
        assert_eq!(token.text, "PaLeTtE");
        assert_eq!(token.normalized(), "PALETTE");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Color, "Blue", 0..4);
        assert_eq!(token.to_string(), "color(Blue)");
    }
}
