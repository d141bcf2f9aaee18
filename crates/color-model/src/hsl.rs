//! HSL color type and RGB <-> HSL conversion

use crate::error::ParseColorError;
use crate::rgb::{channel_from_f64, Rgb};

/// A color in HSL notation.
///
/// Hue is in degrees, saturation and lightness are percentages (0..=100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees (any value; reduced modulo 360 on conversion)
    pub hue: f64,
    /// Saturation percentage (0..=100)
    pub saturation: f64,
    /// Lightness percentage (0..=100)
    pub lightness: f64,
}

impl Hsl {
    /// Create an HSL color without validation.
    #[inline]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Decompose an RGB color. Hue is in [0, 360).
    pub fn from_rgb(color: Rgb) -> Self {
        rgb_to_hsl(color)
    }

    /// Convert to RGB, validating saturation and lightness.
    pub fn to_rgb(self) -> Result<Rgb, ParseColorError> {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }

    /// Same saturation and lightness, hue shifted by `degrees` and normalized.
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            hue: normalize_hue(self.hue + degrees),
            ..self
        }
    }
}

/// Reduce a hue modulo 360 into [0, 360).
#[inline]
pub fn normalize_hue(hue: f64) -> f64 {
    let hue = hue % 360.0;
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Convert HSL (degrees, percent, percent) to RGB.
///
/// Saturation and lightness must lie in 0..=100; hue is unbounded.
/// Zero saturation yields a gray with every channel equal to the lightness.
///
/// # Example
/// ```
/// use color_model::{hsl_to_rgb, Rgb};
/// assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0).unwrap(), Rgb::new(255, 0, 0));
/// assert_eq!(hsl_to_rgb(480.0, 100.0, 50.0).unwrap(), Rgb::new(0, 255, 0));
/// ```
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Result<Rgb, ParseColorError> {
    check_percent("saturation", saturation)?;
    check_percent("lightness", lightness)?;
    Ok(hsl_to_rgb_clamped(hue, saturation, lightness))
}

/// HSL to RGB without validation; saturation and lightness are clamped.
pub(crate) fn hsl_to_rgb_clamped(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = normalize_hue(hue) / 360.0;
    let s = saturation.clamp(0.0, 100.0) / 100.0;
    let l = lightness.clamp(0.0, 100.0) / 100.0;

    if s <= 0.0 {
        return Rgb::from_f64(l * 255.0, l * 255.0, l * 255.0);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        channel_from_f64(hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0),
        channel_from_f64(hue_to_channel(p, q, h) * 255.0),
        channel_from_f64(hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0),
    )
}

/// Piecewise hue-to-channel function around `p` and `q`.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn check_percent(component: &'static str, value: f64) -> Result<(), ParseColorError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ParseColorError::OutOfRange {
            component,
            value,
            min: 0.0,
            max: 100.0,
        })
    }
}

/// Decompose RGB into HSL (degrees, percent, percent).
///
/// When several channels share the maximum, red wins over green and green
/// over blue when picking the hue sector.
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let lightness = (max + min) / 2.0;
    let mut hue = 0.0;
    let mut saturation = 0.0;

    if delta > 0.0 {
        saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        hue *= 60.0;
    }

    Hsl {
        hue,
        saturation: saturation * 100.0,
        lightness: lightness * 100.0,
    }
}
