//! Palette Engine
//!
//! Renders color palettes, swatch grids and text banners into PNG images
//! with a built-in bitmap font and a dependency-free PNG writer.
//! Color parsing and derivation live in the `color-model` crate, which is
//! re-exported as [`color`].

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use color_model as color;
pub use error::{ConfigError, InputError, RenderError};
pub use models::{EngineConfig, InputLimits, LayoutSpec, LogicalPalette, PaletteImage};
pub use services::*;
