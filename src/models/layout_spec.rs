use serde::Deserialize;

use crate::error::RenderError;

/// Canvas geometry shared by every render.
///
/// All lengths are in pixels. Fields missing from a YAML document take the
/// value from [`LayoutSpec::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutSpec {
    pub width: u32,
    pub height: u32,
    pub margin_x: u32,
    pub margin_y: u32,
    /// Gap between neighbouring swatches
    pub gap: u32,
    /// Column cap for flat swatch grids
    pub max_columns: usize,
    /// Largest text scale tried when fitting a banner
    pub max_text_scale: u32,
    /// Smallest text scale; used even when nothing fits
    pub min_text_scale: u32,
}

impl LayoutSpec {
    /// 800x600 canvas, 40px margins, 8px gaps, at most 5 flat columns,
    /// text scale searched from 20 down to 2.
    pub const DEFAULT: Self = Self {
        width: 800,
        height: 600,
        margin_x: 40,
        margin_y: 40,
        gap: 8,
        max_columns: 5,
        max_text_scale: 20,
        min_text_scale: 2,
    };

    /// Width left for content once both horizontal margins are taken.
    pub fn content_width(&self) -> i64 {
        self.width as i64 - 2 * self.margin_x as i64
    }

    /// Height left for content once both vertical margins are taken.
    pub fn content_height(&self) -> i64 {
        self.height as i64 - 2 * self.margin_y as i64
    }

    /// Reject layouts that cannot hold a single swatch or glyph.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.content_width() <= 0 || self.content_height() <= 0 {
            return Err(RenderError::InvalidLayout(format!(
                "{}x{} canvas leaves no room inside {}x{} margins",
                self.width, self.height, self.margin_x, self.margin_y
            )));
        }
        if self.max_columns == 0 {
            return Err(RenderError::InvalidLayout(
                "max_columns must be at least 1".to_string(),
            ));
        }
        if self.min_text_scale == 0 || self.max_text_scale < self.min_text_scale {
            return Err(RenderError::InvalidLayout(format!(
                "text scale range {}..={} is empty",
                self.min_text_scale, self.max_text_scale
            )));
        }
        Ok(())
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
