use color_model::{clamp_steps, shades_to_black, tints_to_white, RampKind, Rgb};

use crate::error::RenderError;
use crate::models::{EngineConfig, LayoutSpec, LogicalPalette, PaletteImage};
use crate::rendering::font::{draw_digit, draw_number, draw_text, DIGIT_COLUMNS, DIGIT_ROWS};
use crate::rendering::{encode_png, Canvas, GridLayout, TextLayout};

/// Label color for a number drawn on `swatch`: white on dark swatches,
/// near-black on light ones.
pub fn number_color(swatch: Rgb) -> Rgb {
    let brightness = 0.299 * swatch.r as f64 + 0.587 * swatch.g as f64 + 0.114 * swatch.b as f64;
    if brightness < 145.0 {
        Rgb::WHITE
    } else {
        Rgb::new(10, 10, 10)
    }
}

/// Group colors into the rows of a palette grid.
///
/// `amount` is clamped to 2..=8 and becomes the row width. When
/// `colors_are_steps` is set the input is already a run of ramp steps and is
/// cut into rows; a short final row repeats its last color (or black when
/// empty). Otherwise every color seeds its own shades-to-black row.
pub fn arrange_palette(colors: &[Rgb], amount: usize, colors_are_steps: bool) -> LogicalPalette {
    let width = clamp_steps(amount);
    if !colors_are_steps {
        return colors
            .iter()
            .map(|&seed| shades_to_black(seed, width))
            .collect::<Vec<_>>()
            .into();
    }

    colors
        .chunks(width)
        .map(|chunk| {
            let mut line = chunk.to_vec();
            let fill = line.last().copied().unwrap_or(Rgb::BLACK);
            line.resize(width, fill);
            line
        })
        .collect::<Vec<_>>()
        .into()
}

/// Draws palette grids, flat swatch grids and text banners, and encodes them
/// as PNG.
///
/// Every render comes in two forms: `try_*` returns the reason a render was
/// abandoned, the plain form logs it and returns empty bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteRenderer {
    layout: LayoutSpec,
}

impl PaletteRenderer {
    pub fn new(layout: LayoutSpec) -> Self {
        Self { layout }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.layout)
    }

    pub fn layout(&self) -> &LayoutSpec {
        &self.layout
    }

    /// Arrange `colors` (see [`arrange_palette`]) and render the result as a
    /// centered, numbered step grid.
    ///
    /// Fails with [`RenderError::InvalidLayout`] once there are so many rows
    /// that a swatch would be less than one pixel tall; no shrunken grid is
    /// drawn. Callers bound the seed count with
    /// [`InputLimits`](crate::InputLimits).
    pub fn try_color_palette(
        &self,
        colors: &[Rgb],
        amount: usize,
        colors_are_steps: bool,
    ) -> Result<PaletteImage, RenderError> {
        if colors.is_empty() {
            return Err(RenderError::EmptyInput);
        }
        let palette = arrange_palette(colors, amount, colors_are_steps);
        let png = self.render_step_grid(&palette)?;
        Ok(PaletteImage { png, palette })
    }

    pub fn color_palette(&self, colors: &[Rgb], amount: usize, colors_are_steps: bool) -> PaletteImage {
        self.try_color_palette(colors, amount, colors_are_steps)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, colors = colors.len(), "Palette render abandoned");
                PaletteImage::default()
            })
    }

    /// Shades: every seed becomes a shades-to-black row. Tints: every seed
    /// becomes a tints-to-white row.
    pub fn try_ramp_palette(
        &self,
        kind: RampKind,
        seeds: &[Rgb],
        amount: usize,
    ) -> Result<PaletteImage, RenderError> {
        match kind {
            RampKind::Shades => self.try_color_palette(seeds, amount, false),
            RampKind::Tints => {
                let steps: Vec<Rgb> = seeds
                    .iter()
                    .flat_map(|&seed| tints_to_white(seed, amount))
                    .collect();
                self.try_color_palette(&steps, amount, true)
            }
        }
    }

    pub fn ramp_palette(&self, kind: RampKind, seeds: &[Rgb], amount: usize) -> PaletteImage {
        self.try_ramp_palette(kind, seeds, amount).unwrap_or_else(|e| {
            tracing::warn!(error = %e, ?kind, seeds = seeds.len(), "Ramp render abandoned");
            PaletteImage::default()
        })
    }

    /// Flat grid of independent swatches, up to `max_columns` per row,
    /// anchored at the top-left margin. Numbers are 1-based in input order.
    pub fn try_swatches(&self, colors: &[Rgb], include_numbers: bool) -> Result<Vec<u8>, RenderError> {
        if colors.is_empty() {
            return Err(RenderError::EmptyInput);
        }
        let grid = GridLayout::flat(&self.layout, colors.len())?;
        let digit_scale = grid.digit_scale();
        tracing::debug!(
            columns = grid.columns,
            rows = grid.rows,
            swatch_width = grid.swatch_width,
            swatch_height = grid.swatch_height,
            digit_scale,
            "Swatch grid layout"
        );

        let mut canvas = self.blank_canvas(Rgb::WHITE);
        for (i, &color) in colors.iter().enumerate() {
            let (x, y) = grid.cell(i / grid.columns, i % grid.columns);
            canvas.fill_rect(x, y, grid.swatch_width, grid.swatch_height, color);

            if include_numbers {
                draw_number(
                    &mut canvas,
                    i + 1,
                    x + grid.swatch_width / 2,
                    y + grid.swatch_height / 2,
                    digit_scale,
                    number_color(color),
                );
            }
        }
        Ok(encode_png(&canvas))
    }

    pub fn swatches(&self, colors: &[Rgb], include_numbers: bool) -> Vec<u8> {
        self.try_swatches(colors, include_numbers).unwrap_or_else(|e| {
            tracing::warn!(error = %e, colors = colors.len(), "Swatch render abandoned");
            Vec::new()
        })
    }

    /// Centered block of text lines at the largest scale that fits.
    pub fn try_text<S: AsRef<str>>(
        &self,
        lines: &[S],
        text_color: Rgb,
        background: Rgb,
    ) -> Result<Vec<u8>, RenderError> {
        if lines.is_empty() {
            return Err(RenderError::EmptyText);
        }
        self.layout.validate()?;

        let layout = TextLayout::fit(&self.layout, lines);
        tracing::debug!(lines = lines.len(), scale = layout.scale, top = layout.top, "Text layout");

        let mut canvas = self.blank_canvas(background);
        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            draw_text(
                &mut canvas,
                line,
                layout.line_x(line),
                layout.line_y(i),
                layout.scale,
                text_color,
            );
        }
        Ok(encode_png(&canvas))
    }

    pub fn text<S: AsRef<str>>(&self, lines: &[S], text_color: Rgb, background: Rgb) -> Vec<u8> {
        self.try_text(lines, text_color, background)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Text render abandoned");
                Vec::new()
            })
    }

    /// Centered grid, one row per palette row, each swatch labelled with its
    /// 1-based column.
    fn render_step_grid(&self, palette: &LogicalPalette) -> Result<Vec<u8>, RenderError> {
        let grid = GridLayout::centered(&self.layout, palette.column_count(), palette.row_count())?;
        let digit_scale = grid.digit_scale();
        tracing::debug!(
            columns = grid.columns,
            rows = grid.rows,
            swatch_width = grid.swatch_width,
            swatch_height = grid.swatch_height,
            digit_scale,
            "Step grid layout"
        );

        let mut canvas = self.blank_canvas(Rgb::WHITE);
        for (row, line) in palette.rows().iter().enumerate() {
            for (col, &swatch) in line.iter().take(grid.columns).enumerate() {
                let (x, y) = grid.cell(row, col);
                canvas.fill_rect(x, y, grid.swatch_width, grid.swatch_height, swatch);
                draw_digit(
                    &mut canvas,
                    (col + 1) as u8,
                    x + (grid.swatch_width - DIGIT_COLUMNS * digit_scale) / 2,
                    y + (grid.swatch_height - DIGIT_ROWS * digit_scale) / 2,
                    digit_scale,
                    number_color(swatch),
                );
            }
        }
        Ok(encode_png(&canvas))
    }

    fn blank_canvas(&self, background: Rgb) -> Canvas {
        Canvas::new(self.layout.width, self.layout.height, background)
    }
}

/// Palette grid on the default 800x600 layout. Empty `png` on failure.
pub fn generate_color_palette(colors: &[Rgb], amount: usize, colors_are_steps: bool) -> PaletteImage {
    PaletteRenderer::default().color_palette(colors, amount, colors_are_steps)
}

/// Shade or tint palette on the default layout. Empty `png` on failure.
pub fn render_ramp_palette(kind: RampKind, seeds: &[Rgb], amount: usize) -> PaletteImage {
    PaletteRenderer::default().ramp_palette(kind, seeds, amount)
}

/// Flat swatch grid on the default layout. Empty on failure.
pub fn generate_palette_image(colors: &[Rgb], include_numbers: bool) -> Vec<u8> {
    PaletteRenderer::default().swatches(colors, include_numbers)
}

/// Text banner on the default layout. Empty on failure.
pub fn text_on_background<S: AsRef<str>>(lines: &[S], text_color: Rgb, background: Rgb) -> Vec<u8> {
    PaletteRenderer::default().text(lines, text_color, background)
}

pub fn text_on_black<S: AsRef<str>>(lines: &[S], text_color: Rgb) -> Vec<u8> {
    text_on_background(lines, text_color, Rgb::BLACK)
}

pub fn text_on_white<S: AsRef<str>>(lines: &[S], text_color: Rgb) -> Vec<u8> {
    text_on_background(lines, text_color, Rgb::WHITE)
}
