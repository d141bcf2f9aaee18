//! CMYK color type
//!
//! Components are percentages. The conversion is the naive device-independent
//! one; no ink profiles are involved.

use crate::rgb::Rgb;

/// A color in CMYK notation, each component a percentage (0..=100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    /// Cyan percentage
    pub cyan: f64,
    /// Magenta percentage
    pub magenta: f64,
    /// Yellow percentage
    pub yellow: f64,
    /// Key (black) percentage
    pub key: f64,
}

impl Cmyk {
    /// Create a CMYK color without validation.
    #[inline]
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// Convert to RGB: `channel = 255 * (1 - color) * (1 - key)`, rounded and clamped.
    ///
    /// # Example
    /// ```
    /// use color_model::{Cmyk, Rgb};
    /// assert_eq!(Cmyk::new(100.0, 0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 255, 255));
    /// ```
    pub fn to_rgb(self) -> Rgb {
        let k = 1.0 - self.key / 100.0;
        Rgb::from_f64(
            255.0 * (1.0 - self.cyan / 100.0) * k,
            255.0 * (1.0 - self.magenta / 100.0) * k,
            255.0 * (1.0 - self.yellow / 100.0) * k,
        )
    }

    /// Decompose an RGB color. Pure black maps to `(0, 0, 0, 100)`.
    pub fn from_rgb(color: Rgb) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let key = 1.0 - r.max(g).max(b);
        if key >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, 100.0);
        }

        let ink = |channel: f64| (1.0 - channel - key) / (1.0 - key) * 100.0;
        Self::new(ink(r), ink(g), ink(b), key * 100.0)
    }
}
