pub mod canvas;
pub mod checksum;
pub mod font;
pub mod layout;
pub mod png;

pub use canvas::Canvas;
pub use layout::{GridLayout, TextLayout};
pub use png::{encode_png, PNG_SIGNATURE};
