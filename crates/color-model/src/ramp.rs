//! Shade and tint ramps
//!
//! A ramp interpolates from a seed color toward black (shades) or white
//! (tints). Step counts are clamped to [`MIN_STEPS`]..=[`MAX_STEPS`], and the
//! terminal entries are pinned so rounding can never keep a ramp from ending
//! on pure black or pure white.

use crate::rgb::Rgb;

/// Fewest entries a ramp may have.
pub const MIN_STEPS: usize = 2;
/// Most entries a ramp may have.
pub const MAX_STEPS: usize = 8;

/// Clamp a requested step count into `MIN_STEPS..=MAX_STEPS`.
#[inline]
pub fn clamp_steps(steps: usize) -> usize {
    steps.clamp(MIN_STEPS, MAX_STEPS)
}

/// Direction of a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RampKind {
    /// Seed toward black
    Shades,
    /// Seed toward white
    Tints,
}

impl RampKind {
    /// Build a ramp of this kind.
    pub fn ramp(self, seed: Rgb, steps: usize) -> Vec<Rgb> {
        match self {
            RampKind::Shades => shades_to_black(seed, steps),
            RampKind::Tints => tints_to_white(seed, steps),
        }
    }

    /// The color every ramp of this kind ends on.
    pub fn terminal(self) -> Rgb {
        match self {
            RampKind::Shades => Rgb::BLACK,
            RampKind::Tints => Rgb::WHITE,
        }
    }
}

/// Interpolation position of step `i` out of `steps`.
fn position(i: usize, steps: usize) -> f64 {
    if steps > 1 {
        i as f64 / (steps - 1) as f64
    } else {
        1.0
    }
}

/// Darken `seed` toward black in `steps` entries (clamped to 2..=8).
///
/// Entry `i` keeps `1 - i/(n-1)` of every channel. The first entry is the
/// seed and the last is exactly black.
///
/// # Example
/// ```
/// use color_model::{shades_to_black, Rgb};
/// let ramp = shades_to_black(Rgb::new(200, 100, 50), 5);
/// assert_eq!(ramp.len(), 5);
/// assert_eq!(ramp[0], Rgb::new(200, 100, 50));
/// assert_eq!(ramp[2], Rgb::new(100, 50, 25));
/// assert_eq!(ramp[4], Rgb::BLACK);
/// ```
pub fn shades_to_black(seed: Rgb, steps: usize) -> Vec<Rgb> {
    let steps = clamp_steps(steps);
    let mut shades: Vec<Rgb> = (0..steps)
        .map(|i| {
            let keep = 1.0 - position(i, steps);
            Rgb::from_f64(
                seed.r as f64 * keep,
                seed.g as f64 * keep,
                seed.b as f64 * keep,
            )
        })
        .collect();

    if let Some(last) = shades.last_mut() {
        *last = Rgb::BLACK;
    }
    shades
}

/// Lighten `seed` toward white in `steps` entries (clamped to 2..=8).
///
/// Entry `i` moves `i/(n-1)` of the way from each channel to 255. The first
/// entry is exactly the seed and the last is exactly white.
///
/// # Example
/// ```
/// use color_model::{tints_to_white, Rgb};
/// let ramp = tints_to_white(Rgb::new(0, 100, 255), 3);
/// assert_eq!(ramp, vec![Rgb::new(0, 100, 255), Rgb::new(128, 178, 255), Rgb::WHITE]);
/// ```
pub fn tints_to_white(seed: Rgb, steps: usize) -> Vec<Rgb> {
    let steps = clamp_steps(steps);
    let toward_white = |channel: u8, t: f64| channel as f64 + (255.0 - channel as f64) * t;

    let mut tints: Vec<Rgb> = (0..steps)
        .map(|i| {
            let t = position(i, steps);
            Rgb::from_f64(
                toward_white(seed.r, t),
                toward_white(seed.g, t),
                toward_white(seed.b, t),
            )
        })
        .collect();

    if let Some(first) = tints.first_mut() {
        *first = seed;
    }
    if let Some(last) = tints.last_mut() {
        *last = Rgb::WHITE;
    }
    tints
}
