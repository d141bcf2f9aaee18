//! Test fixtures and constants.

use palette_engine::color::Rgb;

/// Named colors used across tests
pub mod colors {
    use super::Rgb;

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const ORANGE: Rgb = Rgb::new(255, 136, 0);
    pub const NAVY: Rgb = Rgb::new(0, 0, 128);
    pub const SAND: Rgb = Rgb::new(230, 210, 160);

    /// Label color drawn on light swatches
    pub const LABEL_DARK: Rgb = Rgb::new(10, 10, 10);
}

/// Default canvas size
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

/// Seven distinct colors, enough to wrap a flat grid onto a second row
pub fn seven_colors() -> Vec<Rgb> {
    vec![
        Rgb::new(200, 30, 30),
        Rgb::new(30, 200, 30),
        Rgb::new(30, 30, 200),
        Rgb::new(200, 200, 30),
        Rgb::new(30, 200, 200),
        Rgb::new(200, 30, 200),
        Rgb::new(90, 90, 90),
    ]
}

pub fn bytes(color: Rgb) -> [u8; 3] {
    color.to_bytes()
}
