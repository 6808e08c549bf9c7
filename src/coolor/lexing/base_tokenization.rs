//! Base tokenization for the coolor lexer
//!
//! This module runs the raw logos lexer over a source string and returns the byte
//! spans of every non-whitespace unit. Nothing is classified here; that is the job of
//! [tokenize](crate::coolor::lexing::tokenize).

use crate::coolor::lexing::tokens::Unit;
use logos::Logos;

/// Split source text into the spans of its words and marks.
///
/// Input the logos automaton cannot match (none is expected, the three unit patterns
/// cover every character) is kept as a span of its own so that the classification step
/// rejects it with the offending text.
pub fn scan(source: &str) -> Vec<logos::Span> {
    let mut lexer = Unit::lexer(source);
    let mut spans = Vec::new();

    while let Some(result) = lexer.next() {
        if result != Ok(Unit::Space) {
            spans.push(lexer.span());
        }
    }

    spans
}
