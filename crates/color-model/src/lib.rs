// Generated LUT tables carry full f64 precision
#![allow(clippy::excessive_precision)]

//! color-model: parsing, conversion and derivation of 8-bit RGB colors
//!
//! Every color in this crate is an opaque 24-bit [`Rgb`] triple. Input
//! notations ([`ColorModel`]) are parsed into it, and everything else
//! (harmonies, ramps, web-safe snapping, mixing, WCAG contrast) is computed
//! from it.
//!
//! # Quick Start
//!
//! ```
//! use color_model::{parse_color, ColorModel, Rgb};
//!
//! let red = parse_color("#f00", ColorModel::Hex).unwrap();
//! assert_eq!(red, Rgb::new(255, 0, 0));
//!
//! let green = parse_color("hsl(120, 100%, 50%)", ColorModel::Hsl).unwrap();
//! assert_eq!(green, Rgb::new(0, 255, 0));
//! ```
//!
//! # Derived Colors
//!
//! ```
//! use color_model::{shades_to_black, Rgb};
//!
//! let ramp = shades_to_black(Rgb::new(200, 100, 50), 4);
//! assert_eq!(ramp.len(), 4);
//! assert_eq!(ramp[3], Rgb::BLACK);
//! ```
//!
//! # Contrast
//!
//! [`evaluate_wcag_contrast`] returns a [`WcagContrast`] holding only the
//! ratio; pass flags, pass count and percent rating are derived from it.

pub mod cmyk;
pub mod contrast;
pub mod error;
pub mod harmony;
pub mod hsl;
pub mod lut;
pub mod mix;
pub mod model;
pub mod parse;
pub mod ramp;
pub mod rgb;
pub mod websafe;


pub use cmyk::Cmyk;
pub use contrast::{
    contrast_ratio, contrast_ratio_on_black, evaluate_wcag_contrast, relative_luminance,
    ContrastQuality, WcagContrast, AAA_LARGE_MIN, AAA_NORMAL_MIN, AA_LARGE_MIN, AA_NORMAL_MIN,
};
pub use error::ParseColorError;
pub use harmony::{complementary, rotate_hue, split_complementary};
pub use hsl::{hsl_to_rgb, normalize_hue, rgb_to_hsl, Hsl};
pub use lut::channel_to_linear;
pub use mix::mix;
pub use model::{format_color, ColorModel};
pub use parse::{parse_cmyk, parse_color, parse_color_list, parse_hex, parse_hsl, parse_rgb};
pub use ramp::{clamp_steps, shades_to_black, tints_to_white, RampKind, MAX_STEPS, MIN_STEPS};
pub use rgb::Rgb;
pub use websafe::{is_web_safe, nearest_web_safe, nearest_web_safe_channel, WEB_SAFE_STEPS};
