pub mod color_input;
pub mod palette_image;
pub mod schemes;

pub use color_input::{validate_amount, ColorInput};
pub use palette_image::{
    arrange_palette, generate_color_palette, generate_palette_image, number_color,
    render_ramp_palette, text_on_background, text_on_black, text_on_white, PaletteRenderer,
};
pub use schemes::{
    contrast_banner_lines, render_contrast_banner, ContrastBackground, ContrastBanner, SwatchSet,
};
