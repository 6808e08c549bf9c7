//! Grammar definitions
//!
//! The active command grammar is:
//!
//!     command   := start PALETTE count colorWord
//!     start     := GENERATE | MAKE
//!     count     := <number, 2 to 9>
//!     colorWord := COLOR | COLORS
//!
//! followed by the end of input.
//!
//! A second rule describes the endpoints of the palette:
//!
//!     range     := FROM [ ( ] ADJ COLOR ( TO | : ) ADJ COLOR [ ) ]
//!
//! It is written out in full but not part of the accepted language unless a caller
//! selects [Grammar::ColorRange] explicitly. Enabling it changes which inputs are
//! accepted, so [Grammar::Core] stays the default. The two parentheses are optional
//! independently of each other.

pub const START_WORDS: &[&str] = &["GENERATE", "MAKE"];
pub const PALETTE_WORD: &str = "PALETTE";
pub const COLOR_WORDS: &[&str] = &["COLOR", "COLORS"];

pub const FROM_WORD: &str = "FROM";
pub const RANGE_SEPARATORS: &[&str] = &["TO", ":"];
pub const OPEN_PAREN: &str = "(";
pub const CLOSE_PAREN: &str = ")";

pub const MIN_COLORS: u8 = 2;
pub const MAX_COLORS: u8 = 9;

/// Which language the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// `start PALETTE count colorWord`, nothing after it.
    #[default]
    Core,
    /// The core rule followed by the `FROM ... TO ...` range rule. Inactive unless
    /// selected.
    ColorRange,
}

impl Grammar {
    pub fn from_flag(color_range: bool) -> Self {
        if color_range {
            Grammar::ColorRange
        } else {
            Grammar::Core
        }
    }

    pub fn has_color_range(&self) -> bool {
        matches!(self, Grammar::ColorRange)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grammar::Core => "core",
            Grammar::ColorRange => "color-range",
        }
    }
}
