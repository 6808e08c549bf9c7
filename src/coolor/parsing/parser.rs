//! Recursive-descent parser
//!
//! The parser owns the full token sequence (tokenized once, eagerly, in
//! [Parser::new]) and a cursor into it. The cursor only moves forward, one token at a
//! time, and every decision looks at the current token alone. The first violation ends
//! the parse.

use crate::coolor::ast::{BaseColor, ColorRange, CommandVerb, PaletteCommand, Shade, ShadedColor};
use crate::coolor::error::{Expected, Found, ParseError};
use crate::coolor::lexing::{tokenize, Token, TokenKind};
use crate::coolor::parsing::grammar::{
    Grammar, CLOSE_PAREN, COLOR_WORDS, FROM_WORD, MAX_COLORS, MIN_COLORS, OPEN_PAREN,
    PALETTE_WORD, RANGE_SEPARATORS, START_WORDS,
};

/// Single-use parser over one command string.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    grammar: Grammar,
}

impl Parser {
    /// Tokenize `source` and prepare to parse it. Lexing failures come back as
    /// [ParseError::Lexing].
    pub fn new(source: &str, grammar: Grammar) -> Result<Self, ParseError> {
        Ok(Self {
            tokens: tokenize(source)?,
            cursor: 0,
            grammar,
        })
    }

    /// Run the grammar over the whole token sequence.
    pub fn parse(mut self) -> Result<PaletteCommand, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let verb = self.command_start()?;
        self.expect(PALETTE_WORD)?;
        let number_of_colors = self.color_count()?;
        self.expect_any_of(COLOR_WORDS)?;

        let range = if self.grammar.has_color_range() {
            Some(self.color_range()?)
        } else {
            None
        };

        self.expect_end()?;

        Ok(PaletteCommand::new(verb, number_of_colors, range))
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn found(&self) -> Found {
        match self.current() {
            Some(token) => Found::Token(token.text.clone()),
            None => Found::EndOfInput,
        }
    }

    fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// Consume the current token if it is `word` (case-insensitive).
    fn expect(&mut self, word: &'static str) -> Result<(), ParseError> {
        match self.current() {
            Some(token) if token.matches(word) => {
                self.advance();
                Ok(())
            }
            _ => Err(ParseError::unexpected(Expected::Word(word), self.found())),
        }
    }

    /// Consume the current token if it is any of `words`, returning its uppercase form.
    fn expect_any_of(&mut self, words: &'static [&'static str]) -> Result<String, ParseError> {
        match self.current() {
            Some(token) if words.iter().any(|word| token.matches(word)) => {
                let word = token.normalized();
                self.advance();
                Ok(word)
            }
            _ => Err(ParseError::unexpected(Expected::AnyOf(words), self.found())),
        }
    }

    /// Consume the current token if it has the given kind, returning its uppercase form.
    fn expect_kind(&mut self, kind: TokenKind) -> Result<String, ParseError> {
        match self.current() {
            Some(token) if token.is_kind(kind) => {
                let word = token.normalized();
                self.advance();
                Ok(word)
            }
            _ => Err(ParseError::unexpected(Expected::Kind(kind), self.found())),
        }
    }

    /// Consume the current token only if it is `word`.
    fn accept(&mut self, word: &str) -> bool {
        match self.current() {
            Some(token) if token.matches(word) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.current() {
            Some(token) => Err(ParseError::TrailingToken {
                found: token.text.clone(),
            }),
            None => Ok(()),
        }
    }

    fn command_start(&mut self) -> Result<CommandVerb, ParseError> {
        let word = self.expect_any_of(START_WORDS)?;
        CommandVerb::from_word(&word).ok_or_else(|| {
            ParseError::unexpected(Expected::AnyOf(START_WORDS), Found::Token(word))
        })
    }

    fn color_count(&mut self) -> Result<u8, ParseError> {
        let token = match self.current() {
            Some(token) if token.is_kind(TokenKind::Number) => token,
            _ => {
                return Err(ParseError::unexpected(
                    Expected::Kind(TokenKind::Number),
                    self.found(),
                ))
            }
        };

        let count = token
            .text
            .parse::<u8>()
            .ok()
            .filter(|n| (MIN_COLORS..=MAX_COLORS).contains(n))
            .ok_or_else(|| ParseError::NumberOutOfRange {
                found: token.text.clone(),
            })?;

        self.advance();
        Ok(count)
    }

    fn color_range(&mut self) -> Result<ColorRange, ParseError> {
        self.expect(FROM_WORD)?;
        self.accept(OPEN_PAREN);
        let from = self.shaded_color()?;
        self.expect_any_of(RANGE_SEPARATORS)?;
        let to = self.shaded_color()?;
        self.accept(CLOSE_PAREN);
        Ok(ColorRange { from, to })
    }

    fn shaded_color(&mut self) -> Result<ShadedColor, ParseError> {
        let adjective = self.expect_kind(TokenKind::Adjective)?;
        let shade = Shade::from_word(&adjective).ok_or_else(|| {
            ParseError::unexpected(Expected::Kind(TokenKind::Adjective), Found::Token(adjective))
        })?;

        let name = self.expect_kind(TokenKind::Color)?;
        let color = BaseColor::from_word(&name).ok_or_else(|| {
            ParseError::unexpected(Expected::Kind(TokenKind::Color), Found::Token(name))
        })?;

        Ok(ShadedColor { shade, color })
    }
}
