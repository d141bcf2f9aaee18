use color_model::Rgb;

const BYTES_PER_PIXEL: usize = 4;

/// Opaque RGBA8 raster, row-major.
///
/// The pixel at `(x, y)` starts at byte `(y * width + x) * 4`. Alpha is
/// always 255: there is no API that writes anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; len],
        };
        canvas.fill_rect(0, 0, width as i64, height as i64, background);
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` long.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One RGBA row, `width * 4` bytes.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = y as usize * stride;
        self.pixels.get(start..start + stride)
    }

    /// Iterate over every row top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on 0; a zero-width canvas has no bytes anyway
        self.pixels.chunks_exact(self.stride().max(1))
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        self.pixels
            .get(i..i + 3)
            .map(|rgb| Rgb::new(rgb[0], rgb[1], rgb[2]))
    }

    /// Fill a rectangle, clipped to the canvas.
    ///
    /// Negative origins and oversized extents are fine; a rectangle entirely
    /// outside the canvas writes nothing.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i64);
        let y1 = y.saturating_add(h).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let rgba = [color.r, color.g, color.b, 255];
        let stride = self.stride();
        for py in y0 as usize..y1 as usize {
            let start = py * stride + x0 as usize * BYTES_PER_PIXEL;
            let end = py * stride + x1 as usize * BYTES_PER_PIXEL;
            for px in self.pixels[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}
