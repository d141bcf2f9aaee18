//! Ready-made swatch sets and contrast banners
//!
//! Each swatch set pairs the colors it shows with the numbered flat-grid PNG
//! of those colors, in the same order.

use color_model::{
    complementary, evaluate_wcag_contrast, mix, nearest_web_safe, split_complementary, Rgb,
    WcagContrast,
};

use crate::error::InputError;
use crate::models::InputLimits;
use crate::services::palette_image::PaletteRenderer;

/// Colors shown in a flat swatch grid, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchSet {
    pub colors: Vec<Rgb>,
    /// Empty when the render failed
    pub png: Vec<u8>,
}

/// The two fixed backgrounds contrast is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastBackground {
    Black,
    White,
}

impl ContrastBackground {
    pub fn color(self) -> Rgb {
        match self {
            ContrastBackground::Black => Rgb::BLACK,
            ContrastBackground::White => Rgb::WHITE,
        }
    }

    /// Uppercase name as drawn on the banner.
    pub fn name(self) -> &'static str {
        match self {
            ContrastBackground::Black => "BLACK",
            ContrastBackground::White => "WHITE",
        }
    }
}

/// A rendered contrast banner and the evaluation behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastBanner {
    pub contrast: WcagContrast,
    pub lines: Vec<String>,
    /// Empty when the render failed
    pub png: Vec<u8>,
}

/// The four banner lines for `text` on `background`:
///
/// ```text
/// COLOR FF8800
/// CONTRAST ON BLACK
/// PASS 3 OF 4
/// 75 PERCENT RATING
/// ```
pub fn contrast_banner_lines(text: Rgb, background: ContrastBackground) -> Vec<String> {
    let result = evaluate_wcag_contrast(text, background.color());
    banner_lines(text, background, &result)
}

fn banner_lines(text: Rgb, background: ContrastBackground, result: &WcagContrast) -> Vec<String> {
    let hex = text.to_hex();
    vec![
        format!("COLOR {}", hex.trim_start_matches('#')),
        format!("CONTRAST ON {}", background.name()),
        format!("PASS {} OF 4", result.pass_count()),
        format!("{} PERCENT RATING", result.rating_percent()),
    ]
}

/// Banner for `text` on `background` using the default layout.
pub fn render_contrast_banner(text: Rgb, background: ContrastBackground) -> ContrastBanner {
    PaletteRenderer::default().contrast_banner(text, background)
}

impl PaletteRenderer {
    /// Evaluate `text` against `background` and draw the banner in `text`
    /// on that background.
    pub fn contrast_banner(&self, text: Rgb, background: ContrastBackground) -> ContrastBanner {
        let contrast = evaluate_wcag_contrast(text, background.color());
        let lines = banner_lines(text, background, &contrast);
        tracing::debug!(
            color = %text,
            background = background.name(),
            ratio = contrast.ratio(),
            passes = contrast.pass_count(),
            "Contrast banner"
        );
        let png = self.text(&lines, text, background.color());
        ContrastBanner {
            contrast,
            lines,
            png,
        }
    }

    /// Base color and its complement.
    pub fn complementary_swatches(&self, base: Rgb) -> SwatchSet {
        self.swatch_set(vec![base, complementary(base)])
    }

    /// Base color and the two hues flanking its complement.
    pub fn split_complementary_swatches(&self, base: Rgb) -> SwatchSet {
        self.swatch_set(split_complementary(base).to_vec())
    }

    /// Original color and its nearest web-safe color.
    pub fn web_safe_swatches(&self, color: Rgb) -> SwatchSet {
        self.swatch_set(vec![color, nearest_web_safe(color)])
    }

    /// The mixed inputs followed by their average.
    pub fn mix_swatches(&self, colors: &[Rgb], limits: &InputLimits) -> Result<SwatchSet, InputError> {
        if colors.len() < limits.min_mix {
            return Err(InputError::TooFewColors {
                min: limits.min_mix,
                found: colors.len(),
            });
        }
        if colors.len() > limits.max_mix {
            return Err(InputError::TooManyColors {
                max: limits.max_mix,
                found: colors.len(),
            });
        }
        let mixed = mix(colors).ok_or(InputError::NoColors)?;

        let mut shown = colors.to_vec();
        shown.push(mixed);
        Ok(self.swatch_set(shown))
    }

    fn swatch_set(&self, colors: Vec<Rgb>) -> SwatchSet {
        let png = self.swatches(&colors, true);
        SwatchSet { colors, png }
    }
}
