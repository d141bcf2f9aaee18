pub mod config;
pub mod layout_spec;
pub mod palette;

pub use config::{EngineConfig, InputLimits, CONFIG_ENV_VAR};
pub use layout_spec::LayoutSpec;
pub use palette::{LogicalPalette, PaletteImage};
