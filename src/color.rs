//! ANSI color codes for terminal output
//! Uses standard ANSI colors (0-15) so they adapt to terminal theme

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

pub const RESET: &str = "\x1b[0m";

const FG_RED: &str = "\x1b[31m"; // Color 1: Red
const FG_GREEN: &str = "\x1b[32m"; // Color 2: Green
const FG_YELLOW: &str = "\x1b[33m"; // Color 3: Yellow
const FG_BLUE: &str = "\x1b[34m"; // Color 4: Blue
const FG_PURPLE: &str = "\x1b[35m"; // Color 5: Magenta
const FG_CYAN: &str = "\x1b[36m"; // Color 6: Cyan
const FG_WHITE: &str = "\x1b[37m"; // Color 7: White
const FG_GRAY: &str = "\x1b[90m"; // Bright black/gray

const BG_RED: &str = "\x1b[41m";
const BG_GREEN: &str = "\x1b[42m";
const BG_YELLOW: &str = "\x1b[43m";
const BG_BLUE: &str = "\x1b[44m";
const BG_PURPLE: &str = "\x1b[45m";
const BG_CYAN: &str = "\x1b[46m";
const BG_WHITE: &str = "\x1b[47m";
const BG_GRAY: &str = "\x1b[100m";

/// Named terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    /// Terminal default; both planes map to the reset code
    #[default]
    Reset = 0,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    Gray,
}

impl Color {
    /// Every color, in index order
    pub const ALL: [Self; 9] = [
        Self::Reset,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Purple,
        Self::Cyan,
        Self::White,
        Self::Gray,
    ];

    /// Color for a raw index. Anything outside `0..=8` is `Reset`.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Red,
            2 => Self::Green,
            3 => Self::Yellow,
            4 => Self::Blue,
            5 => Self::Purple,
            6 => Self::Cyan,
            7 => Self::White,
            8 => Self::Gray,
            _ => Self::Reset,
        }
    }

    /// Escape sequence that sets the text color
    #[must_use]
    pub const fn foreground(self) -> &'static str {
        match self {
            Self::Reset => RESET,
            Self::Red => FG_RED,
            Self::Green => FG_GREEN,
            Self::Yellow => FG_YELLOW,
            Self::Blue => FG_BLUE,
            Self::Purple => FG_PURPLE,
            Self::Cyan => FG_CYAN,
            Self::White => FG_WHITE,
            Self::Gray => FG_GRAY,
        }
    }

    /// Escape sequence that sets the fill color
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Reset => RESET,
            Self::Red => BG_RED,
            Self::Green => BG_GREEN,
            Self::Yellow => BG_YELLOW,
            Self::Blue => BG_BLUE,
            Self::Purple => BG_PURPLE,
            Self::Cyan => BG_CYAN,
            Self::White => BG_WHITE,
            Self::Gray => BG_GRAY,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Self::from_index(index)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" => Ok(Self::Reset),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "purple" | "magenta" => Ok(Self::Purple),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            "gray" | "grey" => Ok(Self::Gray),
            _ => Err(Error::UnknownColor(s.to_string())),
        }
    }
}

/// Foreground escape sequence for `color`
#[must_use]
pub const fn foreground_code(color: Color) -> &'static str {
    color.foreground()
}

/// Background escape sequence for `color`
#[must_use]
pub const fn background_code(color: Color) -> &'static str {
    color.background()
}

/// Foreground escape sequence for a raw color index, reset if out of range
#[must_use]
pub const fn foreground_code_for(index: u8) -> &'static str {
    Color::from_index(index).foreground()
}

/// Background escape sequence for a raw color index, reset if out of range
#[must_use]
pub const fn background_code_for(index: u8) -> &'static str {
    Color::from_index(index).background()
}
