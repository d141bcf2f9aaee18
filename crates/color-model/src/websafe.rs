//! Web-safe palette snapping
//!
//! The web-safe palette is the 6x6x6 cube whose channels are multiples of 51.

use crate::rgb::Rgb;

/// The six channel values of the web-safe palette, ascending.
pub const WEB_SAFE_STEPS: [u8; 6] = [0, 51, 102, 153, 204, 255];

/// True when every channel is one of [`WEB_SAFE_STEPS`].
pub fn is_web_safe(color: Rgb) -> bool {
    color
        .to_bytes()
        .iter()
        .all(|channel| WEB_SAFE_STEPS.contains(channel))
}

/// Snap each channel independently to its nearest web-safe step.
///
/// Channels exactly between two steps cannot occur (steps are 51 apart), but
/// the scan keeps the lower step on ties.
///
/// # Example
/// ```
/// use color_model::{nearest_web_safe, Rgb};
/// assert_eq!(nearest_web_safe(Rgb::new(30, 130, 250)), Rgb::new(51, 153, 255));
/// ```
pub fn nearest_web_safe(color: Rgb) -> Rgb {
    Rgb::new(
        nearest_web_safe_channel(color.r),
        nearest_web_safe_channel(color.g),
        nearest_web_safe_channel(color.b),
    )
}

/// Nearest web-safe step for a single channel.
pub fn nearest_web_safe_channel(value: u8) -> u8 {
    let mut nearest = WEB_SAFE_STEPS[0];
    let mut best = value.abs_diff(nearest);
    for &candidate in &WEB_SAFE_STEPS[1..] {
        let distance = value.abs_diff(candidate);
        if distance < best {
            best = distance;
            nearest = candidate;
        }
    }
    nearest
}
