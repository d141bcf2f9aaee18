//! 8-bit RGB color type
//!
//! [`Rgb`] is the common currency of the crate: every notation parses into
//! it and every metric is computed from it.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;
use crate::parse::parse_hex;

/// An opaque color with three 8-bit channels.
///
/// Value type: equality is component-wise and there is no identity beyond
/// the channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from real-valued channels on the 0..=255 scale.
    ///
    /// Each channel is rounded to the nearest integer and clamped.
    ///
    /// # Example
    /// ```
    /// use color_model::Rgb;
    /// assert_eq!(Rgb::from_f64(254.6, -3.0, 300.0), Rgb::new(255, 0, 255));
    /// ```
    #[inline]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_from_f64(r),
            g: channel_from_f64(g),
            b: channel_from_f64(b),
        }
    }

    /// Channels as a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as `#RRGGBB` with uppercase digits.
    ///
    /// # Example
    /// ```
    /// use color_model::Rgb;
    /// assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#FF8000");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Round a real channel value and clamp it into 0..=255.
#[inline]
pub(crate) fn channel_from_f64(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a hex color (`#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}
