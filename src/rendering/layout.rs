//! Grid and text placement on the canvas
//!
//! All coordinates are signed: text that does not fit at the smallest scale
//! is still centered and simply runs off both edges.

use crate::error::RenderError;
use crate::models::LayoutSpec;

use super::font::{text_width, GLYPH_ROWS};

/// Smallest and largest digit scale for swatch numbers.
const DIGIT_SCALE_MIN: i64 = 3;
const DIGIT_SCALE_MAX: i64 = 12;

/// Floor for the vertical gap between text lines.
const MIN_LINE_GAP: i64 = 4;

/// Placement of a grid of equally sized swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub swatch_width: i64,
    pub swatch_height: i64,
    pub gap: i64,
    /// Top-left corner of the first swatch
    pub origin_x: i64,
    pub origin_y: i64,
}

impl GridLayout {
    /// Grid for `total` independent colors: up to `max_columns` per row,
    /// anchored at the top-left margin.
    pub fn flat(spec: &LayoutSpec, total: usize) -> Result<Self, RenderError> {
        let columns = spec.max_columns.min(total);
        let rows = if columns == 0 {
            0
        } else {
            total.div_ceil(columns)
        };
        let mut grid = Self::sized(spec, columns, rows)?;
        grid.origin_x = spec.margin_x as i64;
        grid.origin_y = spec.margin_y as i64;
        Ok(grid)
    }

    /// Grid of exactly `columns` x `rows`, centered on the canvas.
    pub fn centered(spec: &LayoutSpec, columns: usize, rows: usize) -> Result<Self, RenderError> {
        let mut grid = Self::sized(spec, columns, rows)?;
        grid.origin_x = (spec.width as i64 - grid.width()) / 2;
        grid.origin_y = (spec.height as i64 - grid.height()) / 2;
        Ok(grid)
    }

    fn sized(spec: &LayoutSpec, columns: usize, rows: usize) -> Result<Self, RenderError> {
        if columns == 0 || rows == 0 {
            return Err(RenderError::EmptyGrid { columns, rows });
        }
        spec.validate()?;

        let gap = spec.gap as i64;
        let swatch_width = swatch_extent(spec.content_width(), columns as i64, gap);
        let swatch_height = swatch_extent(spec.content_height(), rows as i64, gap);
        if swatch_width <= 0 || swatch_height <= 0 {
            return Err(RenderError::InvalidLayout(format!(
                "{columns}x{rows} grid does not fit in {}x{}",
                spec.width, spec.height
            )));
        }

        Ok(Self {
            columns,
            rows,
            swatch_width,
            swatch_height,
            gap,
            origin_x: 0,
            origin_y: 0,
        })
    }

    /// Total width of all columns and the gaps between them.
    pub fn width(&self) -> i64 {
        self.columns as i64 * self.swatch_width + (self.columns as i64 - 1) * self.gap
    }

    /// Total height of all rows and the gaps between them.
    pub fn height(&self) -> i64 {
        self.rows as i64 * self.swatch_height + (self.rows as i64 - 1) * self.gap
    }

    /// Top-left corner of the swatch at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> (i64, i64) {
        (
            self.origin_x + column as i64 * (self.swatch_width + self.gap),
            self.origin_y + row as i64 * (self.swatch_height + self.gap),
        )
    }

    /// Scale for numbers drawn inside a swatch.
    pub fn digit_scale(&self) -> i64 {
        (self.swatch_width / 6)
            .min(self.swatch_height / 8)
            .clamp(DIGIT_SCALE_MIN, DIGIT_SCALE_MAX)
    }
}

fn swatch_extent(available: i64, count: i64, gap: i64) -> i64 {
    (available - (count - 1) * gap) / count
}

/// Placement of a block of text lines, centered on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    pub scale: i64,
    /// Top edge of the first line
    pub top: i64,
    canvas_width: i64,
}

impl TextLayout {
    /// Pick the largest scale at which every line fits inside the margins
    /// and the whole block fits vertically. Falls back to the smallest scale
    /// when nothing fits.
    pub fn fit<S: AsRef<str>>(spec: &LayoutSpec, lines: &[S]) -> Self {
        let max_scale = spec.max_text_scale as i64;
        let min_scale = spec.min_text_scale as i64;

        let scale = (min_scale..=max_scale)
            .rev()
            .find(|&scale| {
                let widest = lines
                    .iter()
                    .map(|line| text_width(line.as_ref(), scale))
                    .max()
                    .unwrap_or(0);
                widest <= spec.content_width()
                    && block_height(lines.len(), scale) <= spec.content_height()
            })
            .unwrap_or(min_scale);

        Self {
            scale,
            top: (spec.height as i64 - block_height(lines.len(), scale)) / 2,
            canvas_width: spec.width as i64,
        }
    }

    pub fn line_height(&self) -> i64 {
        GLYPH_ROWS * self.scale
    }

    pub fn line_gap(&self) -> i64 {
        line_gap(self.scale)
    }

    /// Left edge of `line`, centered horizontally.
    pub fn line_x(&self, line: &str) -> i64 {
        (self.canvas_width - text_width(line, self.scale)) / 2
    }

    /// Top edge of line number `index`.
    pub fn line_y(&self, index: usize) -> i64 {
        self.top + index as i64 * (self.line_height() + self.line_gap())
    }
}

fn line_gap(scale: i64) -> i64 {
    scale.max(MIN_LINE_GAP)
}

/// Height of `lines` stacked lines at `scale`.
pub fn block_height(lines: usize, scale: i64) -> i64 {
    let n = lines as i64;
    n * GLYPH_ROWS * scale + (n - 1).max(0) * line_gap(scale)
}
