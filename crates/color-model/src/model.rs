//! Color notation tags
//!
//! A [`ColorModel`] selects which parser and formatter handle a piece of
//! color text. Lists are always written in a single notation.

use std::fmt;
use std::str::FromStr;

use crate::cmyk::Cmyk;
use crate::error::ParseColorError;
use crate::hsl::Hsl;
use crate::parse;
use crate::rgb::Rgb;

/// Notation of a color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`
    Hex,
    /// `r,g,b` or `rgb(r,g,b)` with channels in 0..=255
    Rgb,
    /// `h,s,l` or `hsl(h,s%,l%)`
    Hsl,
    /// `c,m,y,k` or `cmyk(c%,m%,y%,k%)`
    Cmyk,
}

impl ColorModel {
    /// All notations, in the order multi-notation input is concatenated.
    pub const ALL: [ColorModel; 4] = [
        ColorModel::Hex,
        ColorModel::Rgb,
        ColorModel::Hsl,
        ColorModel::Cmyk,
    ];

    /// Lowercase tag name (`"hex"`, `"rgb"`, `"hsl"`, `"cmyk"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ColorModel::Hex => "hex",
            ColorModel::Rgb => "rgb",
            ColorModel::Hsl => "hsl",
            ColorModel::Cmyk => "cmyk",
        }
    }

    /// Parse a single color written in this notation.
    pub fn parse(self, text: &str) -> Result<Rgb, ParseColorError> {
        parse::parse_color(text, self)
    }

    /// Parse a `;`-separated list written in this notation.
    pub fn parse_list(self, raw: &str) -> Result<Vec<Rgb>, ParseColorError> {
        parse::parse_color_list(raw, self)
    }

    /// Format a color in this notation.
    ///
    /// Components are rounded to integers. Hex output is uppercase.
    ///
    /// # Example
    /// ```
    /// use color_model::{ColorModel, Rgb};
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(ColorModel::Hex.format(red), "#FF0000");
    /// assert_eq!(ColorModel::Rgb.format(red), "rgb(255,0,0)");
    /// assert_eq!(ColorModel::Hsl.format(red), "hsl(0,100%,50%)");
    /// assert_eq!(ColorModel::Cmyk.format(red), "cmyk(0%,100%,100%,0%)");
    /// ```
    pub fn format(self, color: Rgb) -> String {
        match self {
            ColorModel::Hex => color.to_hex(),
            ColorModel::Rgb => format!("rgb({},{},{})", color.r, color.g, color.b),
            ColorModel::Hsl => {
                let hsl = Hsl::from_rgb(color);
                format!(
                    "hsl({},{}%,{}%)",
                    hsl.hue.round() as i64 % 360,
                    hsl.saturation.round() as i64,
                    hsl.lightness.round() as i64
                )
            }
            ColorModel::Cmyk => {
                let cmyk = Cmyk::from_rgb(color);
                format!(
                    "cmyk({}%,{}%,{}%,{}%)",
                    cmyk.cyan.round() as i64,
                    cmyk.magenta.round() as i64,
                    cmyk.yellow.round() as i64,
                    cmyk.key.round() as i64
                )
            }
        }
    }
}

/// Format a color in the given notation.
pub fn format_color(color: Rgb, model: ColorModel) -> String {
    model.format(color)
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorModel {
    type Err = ParseColorError;

    /// Parse a tag name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ColorModel::ALL
            .into_iter()
            .find(|model| tag.eq_ignore_ascii_case(model.as_str()))
            .ok_or_else(|| ParseColorError::UnknownModel(tag.to_string()))
    }
}
