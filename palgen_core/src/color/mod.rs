//! Color values: strict `#rrggbb` parsing, lowercase formatting and
//! references to palette slots.

use std::fmt;
use std::str::FromStr;

pub use vte::ansi::Rgb;

use crate::error::{PaletteError, Result};
use crate::palette::AnsiColor;

/// How upper-case hex digits in incoming color strings are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
    /// Only lowercase `#rrggbb` is accepted.
    #[default]
    Strict,
    /// ASCII-lowercase the string before strict validation.
    Normalize,
}

/// Parse a strict `#rrggbb` color. Lowercase digits only, exactly 7 chars.
pub fn parse_hex_color(s: &str) -> Result<Rgb> {
    let bytes = s.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return Err(PaletteError::invalid(s));
    }

    let mut channels = [0u8; 3];
    for (channel, pair) in channels.iter_mut().zip(bytes[1..].chunks_exact(2)) {
        match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => *channel = (hi << 4) | lo,
            _ => return Err(PaletteError::invalid(s)),
        }
    }

    let [r, g, b] = channels;
    Ok(Rgb { r, g, b })
}

/// Parse a color honoring `mode`.
pub fn parse_hex_color_with(s: &str, mode: CaseMode) -> Result<Rgb> {
    match mode {
        CaseMode::Strict => parse_hex_color(s),
        CaseMode::Normalize => parse_hex_color(&s.to_ascii_lowercase()),
    }
}

/// Format as `#rrggbb`, lowercase.
pub fn format_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}

/// Plain decimal digits, no sign and no leading zero.
fn is_canonical_index(digits: &str) -> bool {
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
}

/// A color given either as one of the 16 base slots or as a direct value.
///
/// Written as `colorN` (N in 0..=15) or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRef {
    Slot(AnsiColor),
    Rgb(Rgb),
}

impl ColorRef {
    /// Parse a `colorN` slot reference or a hex color.
    pub fn parse(s: &str, mode: CaseMode) -> Result<Self> {
        if let Some(digits) = s.strip_prefix("color") {
            return Some(digits)
                .filter(|d| is_canonical_index(d))
                .and_then(|d| d.parse::<usize>().ok())
                .and_then(AnsiColor::from_index)
                .map(Self::Slot)
                .ok_or_else(|| PaletteError::invalid(s));
        }
        parse_hex_color_with(s, mode).map(Self::Rgb)
    }
}

impl From<AnsiColor> for ColorRef {
    fn from(slot: AnsiColor) -> Self {
        Self::Slot(slot)
    }
}

impl From<Rgb> for ColorRef {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl FromStr for ColorRef {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, CaseMode::Strict)
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slot(slot) => write!(f, "color{}", slot.index()),
            Self::Rgb(rgb) => f.write_str(&format_hex(*rgb)),
        }
    }
}
