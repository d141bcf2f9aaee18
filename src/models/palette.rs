use color_model::Rgb;

/// Rows of colors exactly as they were laid out in a rendered grid.
///
/// Row `i`, column `j` is the swatch at grid row `i`, column `j`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalPalette {
    rows: Vec<Vec<Rgb>>,
}

impl LogicalPalette {
    pub fn new(rows: Vec<Vec<Rgb>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Rgb>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Rgb>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row; every row built by this crate has the same width.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every color in row-major order.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.rows.iter().flatten().copied()
    }
}

impl From<Vec<Vec<Rgb>>> for LogicalPalette {
    fn from(rows: Vec<Vec<Rgb>>) -> Self {
        Self::new(rows)
    }
}

/// Encoded PNG plus the palette it depicts.
///
/// An empty `png` means no image was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteImage {
    pub png: Vec<u8>,
    pub palette: LogicalPalette,
}

impl PaletteImage {
    /// True when the render failed and there is nothing to send.
    pub fn is_empty(&self) -> bool {
        self.png.is_empty()
    }
}
