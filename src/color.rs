//! Caption colors: `#rrggbb` values and their `rgba()` form with an opacity percentage.

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::map_res,
    sequence::preceded,
    IResult, Parser as _,
};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::util::{IResultExt as _, NomError};

/// Error of color parsing.
#[derive(Debug, Error)]
#[error("Invalid color '{text}', expected '#rrggbb'")]
pub struct ColorError {
    text: String,
    source: NomError,
}

/// Opaque `RGB` color, written `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl HexColor {
    /// Create a color from its components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// `CSS` color with `opacity` in percent, like `rgba(29, 32, 33, 0.8)`.
    ///
    /// The opacity is clamped to `0..=100`, `NaN` counts as fully opaque.
    #[must_use]
    pub fn rgba(self, opacity: f64) -> String {
        let opacity = if opacity.is_nan() {
            1.
        } else {
            opacity.clamp(0., 100.) / 100.
        };
        let Self { red, green, blue } = self;
        format!("rgba({red}, {green}, {blue}, {opacity})")
    }
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |hex| u8::from_str_radix(hex, 16),
    )
    .parse(input)
}

fn hex_color(input: &str) -> IResult<&str, HexColor> {
    preceded(char('#'), (hex_byte, hex_byte, hex_byte))
        .map(|(red, green, blue)| HexColor { red, green, blue })
        .parse(input)
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        hex_color(text.trim())
            .to_result_no_rest()
            .map_err(|source| ColorError {
                text: text.into(),
                source,
            })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Color and opacity of a caption layer (text or background).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerColor {
    /// Color of the layer
    pub color: HexColor,
    /// Opacity in percent, `0..=100`
    pub opacity: f64,
}

impl LayerColor {
    /// `CSS` value of the layer color.
    #[must_use]
    pub fn rgba(&self) -> String {
        self.color.rgba(self.opacity)
    }
}
