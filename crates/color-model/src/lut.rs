//! Channel linearization lookup table
//!
//! The table is generated at compile time by build.rs, one exact `f64`
//! entry per 8-bit channel value.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/srgb_lut.rs"));

/// Linearize an 8-bit sRGB channel (WCAG breakpoint 0.03928).
#[inline]
pub fn channel_to_linear(channel: u8) -> f64 {
    SRGB_TO_LINEAR[channel as usize]
}
