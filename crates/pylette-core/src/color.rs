//! Hex RGB color validation and contrast inversion.

use std::fmt;
use std::str::FromStr;

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hex digits in the body of a color code.
pub const HEX_DIGITS: usize = 6;

/// Characters of rejected input kept in a [`ColorError`].
const ECHO_CHARS: usize = 16;

/// Errors produced while reading a color code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Not an RGB hex code: {0:?}")]
    InvalidColorFormat(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// A 24-bit RGB color written as `#RRGGBB`.
///
/// Values only come out of [`HexColor::validate`] (or the functions built on
/// it), so every `HexColor` has a well-formed six digit body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    value: u32,
}

impl HexColor {
    /// Black, `#000000`.
    pub const BLACK: Self = Self { value: 0x000000 };
    /// White, `#FFFFFF`.
    pub const WHITE: Self = Self { value: 0xFFFFFF };

    /// Accept `text` only if it is exactly `#` followed by six hex digits.
    ///
    /// Case is ignored. Surrounding whitespace, shorthand forms and alpha
    /// channels are all rejected.
    pub fn validate(text: &str) -> ColorResult<Self> {
        let invalid =
            || ColorError::InvalidColorFormat(text.chars().take(ECHO_CHARS).collect());

        let body = text.strip_prefix('#').ok_or_else(invalid)?;
        if body.len() != HEX_DIGITS {
            return Err(invalid());
        }

        let mut value = 0u32;
        for byte in body.bytes() {
            let digit = hex_value(byte).ok_or_else(invalid)?;
            value = (value << 4) | u32::from(digit);
        }
        Ok(Self { value })
    }

    /// Alias for [`HexColor::validate`].
    pub fn parse(text: &str) -> ColorResult<Self> {
        Self::validate(text)
    }

    /// Build a color from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u32) << 16) | ((g as u32) << 8) | b as u32,
        }
    }

    /// Complement every hex digit independently (`0<->F`, `1<->E`, ... `7<->8`).
    ///
    /// This is the contrasting foreground used for text drawn on a swatch.
    /// The input is already validated, so there is nothing to re-check here.
    pub fn invert(self) -> Self {
        let mut value = 0u32;
        for shift in (0..HEX_DIGITS as u32).rev() {
            let nibble = (self.value >> (shift * 4)) & 0xF;
            value = (value << 4) | (0xF - nibble);
        }
        Self { value }
    }

    /// Packed `0xRRGGBB` value.
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Red, green and blue channels.
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            (self.value >> 16) as u8,
            (self.value >> 8) as u8,
            self.value as u8,
        )
    }
}

/// Free-function form of [`HexColor::validate`].
pub fn validate(text: &str) -> ColorResult<HexColor> {
    HexColor::validate(text)
}

/// Free-function form of [`HexColor::invert`].
pub fn invert(color: HexColor) -> HexColor {
    color.invert()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.value)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        let (r, g, b) = color.rgb();
        Color::from_rgba8(r, g, b, 255)
    }
}
