//! Relative luminance, contrast ratio and WCAG classification
//!
//! Luminance follows WCAG 2.x: channels are linearized (see [`crate::lut`])
//! and weighted `0.2126 R + 0.7152 G + 0.0722 B`. The contrast ratio of two
//! colors is `(L_lighter + 0.05) / (L_darker + 0.05)`, so it ranges from 1
//! (identical luminance) to 21 (black on white).

use std::fmt;

use crate::lut::channel_to_linear;
use crate::rgb::Rgb;

/// Minimum ratio for AA normal-size text.
pub const AA_NORMAL_MIN: f64 = 4.5;
/// Minimum ratio for AA large text.
pub const AA_LARGE_MIN: f64 = 3.0;
/// Minimum ratio for AAA normal-size text.
pub const AAA_NORMAL_MIN: f64 = 7.0;
/// Minimum ratio for AAA large text.
pub const AAA_LARGE_MIN: f64 = 4.5;

/// Relative luminance of a color, in 0.0..=1.0.
#[inline]
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * channel_to_linear(color.r)
        + 0.7152 * channel_to_linear(color.g)
        + 0.0722 * channel_to_linear(color.b)
}

/// Contrast ratio between two colors. Symmetric, always >= 1.0.
///
/// # Example
/// ```
/// use color_model::{contrast_ratio, Rgb};
/// let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio of a text color against pure black.
pub fn contrast_ratio_on_black(text: Rgb) -> f64 {
    contrast_ratio(text, Rgb::BLACK)
}

/// WCAG pass/fail flags for one text/background pair.
///
/// Only the ratio is stored; every flag, the pass count and the rating are
/// derived from it, so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WcagContrast {
    ratio: f64,
}

impl WcagContrast {
    /// Classify a text color against a background color.
    pub fn evaluate(text: Rgb, background: Rgb) -> Self {
        Self::from_ratio(contrast_ratio(text, background))
    }

    /// Classify an already computed contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self { ratio }
    }

    /// The underlying contrast ratio (>= 1.0 when built via [`evaluate`](Self::evaluate)).
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// AA, normal text: ratio >= 4.5
    pub fn aa_normal(&self) -> bool {
        self.ratio >= AA_NORMAL_MIN
    }

    /// AA, large text: ratio >= 3.0
    pub fn aa_large(&self) -> bool {
        self.ratio >= AA_LARGE_MIN
    }

    /// AAA, normal text: ratio >= 7.0
    pub fn aaa_normal(&self) -> bool {
        self.ratio >= AAA_NORMAL_MIN
    }

    /// AAA, large text: ratio >= 4.5
    pub fn aaa_large(&self) -> bool {
        self.ratio >= AAA_LARGE_MIN
    }

    /// Number of passed checks (0..=4).
    pub fn pass_count(&self) -> u8 {
        [
            self.aa_normal(),
            self.aa_large(),
            self.aaa_normal(),
            self.aaa_large(),
        ]
        .into_iter()
        .filter(|&pass| pass)
        .count() as u8
    }

    /// Pass count times 25.
    pub fn rating_percent(&self) -> u8 {
        self.pass_count() * 25
    }

    /// Coarse verdict derived from the pass count.
    pub fn quality(&self) -> ContrastQuality {
        match self.pass_count() {
            4 => ContrastQuality::Perfect,
            3 => ContrastQuality::Good,
            2 => ContrastQuality::Fair,
            _ => ContrastQuality::Poor,
        }
    }
}

/// Evaluate WCAG contrast of `text` drawn on `background`.
pub fn evaluate_wcag_contrast(text: Rgb, background: Rgb) -> WcagContrast {
    WcagContrast::evaluate(text, background)
}

/// Verdict bucket for a [`WcagContrast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContrastQuality {
    /// 0 or 1 checks passed
    Poor,
    /// 2 checks passed
    Fair,
    /// 3 checks passed
    Good,
    /// All 4 checks passed
    Perfect,
}

impl fmt::Display for ContrastQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContrastQuality::Poor => "poor",
            ContrastQuality::Fair => "fair",
            ContrastQuality::Good => "good",
            ContrastQuality::Perfect => "perfect",
        })
    }
}
