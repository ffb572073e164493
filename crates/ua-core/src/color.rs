use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Séquence SGR de remise à zéro.
pub const RESET: &str = "\x1b[0m";

/// Palette ANSI 8 couleurs (premier plan) utilisable pour colorer un spinner.
///
/// # Example
/// ```
/// use ua_core::color::AnsiColor;
/// let c: AnsiColor = "cyan".parse().unwrap();
/// assert_eq!(c.code(), "\x1b[36m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsiColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    /// Every color, sorted by name.
    pub const ALL: [Self; 7] = [
        Self::Blue,
        Self::Cyan,
        Self::Green,
        Self::Magenta,
        Self::Red,
        Self::White,
        Self::Yellow,
    ];

    /// Lowercase name as accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// SGR foreground escape sequence (`ESC[31m` … `ESC[37m`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }

    /// Wrap `text` in this color followed by a reset.
    ///
    /// # Example
    /// ```
    /// use ua_core::color::{AnsiColor, RESET};
    /// assert_eq!(AnsiColor::Red.paint("⠋"), format!("\x1b[31m⠋{RESET}"));
    /// ```
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{RESET}", self.code())
    }
}

impl FromStr for AnsiColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ValidationError::UnknownColor(s.to_string()))
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
