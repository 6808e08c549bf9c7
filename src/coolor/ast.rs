//! Command record
//!
//! The value produced by a successful parse. It is built only once the whole input
//! has been accepted, is never modified afterwards and has no identity beyond its
//! fields: two parses of the same text compare equal.

use serde::Serialize;
use std::fmt;

/// The verb that starts a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommandVerb {
    #[serde(rename = "GENERATE PALETTE")]
    Generate,
    #[serde(rename = "MAKE PALETTE")]
    Make,
}

impl CommandVerb {
    /// Look up a verb from a start word, ignoring case.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_uppercase().as_str() {
            "GENERATE" => Some(CommandVerb::Generate),
            "MAKE" => Some(CommandVerb::Make),
            _ => None,
        }
    }

    /// Normalized command text, e.g. `GENERATE PALETTE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandVerb::Generate => "GENERATE PALETTE",
            CommandVerb::Make => "MAKE PALETTE",
        }
    }
}

/// Base colors known to the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BaseColor {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
    Brown,
    Orange,
}

impl BaseColor {
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_uppercase().as_str() {
            "RED" => Some(BaseColor::Red),
            "GREEN" => Some(BaseColor::Green),
            "BLUE" => Some(BaseColor::Blue),
            "YELLOW" => Some(BaseColor::Yellow),
            "BLACK" => Some(BaseColor::Black),
            "BROWN" => Some(BaseColor::Brown),
            "ORANGE" => Some(BaseColor::Orange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseColor::Red => "RED",
            BaseColor::Green => "GREEN",
            BaseColor::Blue => "BLUE",
            BaseColor::Yellow => "YELLOW",
            BaseColor::Black => "BLACK",
            BaseColor::Brown => "BROWN",
            BaseColor::Orange => "ORANGE",
        }
    }
}

/// Color adjectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_uppercase().as_str() {
            "LIGHT" => Some(Shade::Light),
            "DARK" => Some(Shade::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shade::Light => "LIGHT",
            Shade::Dark => "DARK",
        }
    }
}

/// An adjective applied to a base color, e.g. `DARK ORANGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShadedColor {
    pub shade: Shade,
    pub color: BaseColor,
}

impl fmt::Display for ShadedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.shade.as_str(), self.color.as_str())
    }
}

/// Endpoints of a palette, only produced by the color-range grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorRange {
    pub from: ShadedColor,
    pub to: ShadedColor,
}

impl fmt::Display for ColorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FROM {} TO {}", self.from, self.to)
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PaletteCommand {
    #[serde(rename = "command")]
    verb: CommandVerb,
    number_of_colors: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<ColorRange>,
}

impl PaletteCommand {
    pub(crate) fn new(verb: CommandVerb, number_of_colors: u8, range: Option<ColorRange>) -> Self {
        Self {
            verb,
            number_of_colors,
            range,
        }
    }

    /// `"GENERATE PALETTE"` or `"MAKE PALETTE"`.
    pub fn command(&self) -> &'static str {
        self.verb.as_str()
    }

    pub fn verb(&self) -> CommandVerb {
        self.verb
    }

    /// Always within 2..=9.
    pub fn number_of_colors(&self) -> u8 {
        self.number_of_colors
    }

    pub fn range(&self) -> Option<&ColorRange> {
        self.range.as_ref()
    }
}

impl fmt::Display for PaletteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} COLORS", self.command(), self.number_of_colors)?;
        if let Some(range) = &self.range {
            write!(f, " {}", range)?;
        }
        Ok(())
    }
}
