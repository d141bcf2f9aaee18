//! Multi-color averaging

use crate::rgb::Rgb;

/// Average colors channel by channel, rounding to the nearest integer.
///
/// Returns `None` for an empty slice.
///
/// # Example
/// ```
/// use color_model::{mix, Rgb};
/// let mixed = mix(&[Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]).unwrap();
/// assert_eq!(mixed, Rgb::new(128, 0, 128));
/// ```
pub fn mix(colors: &[Rgb]) -> Option<Rgb> {
    if colors.is_empty() {
        return None;
    }

    let (r, g, b) = colors.iter().fold((0u32, 0u32, 0u32), |(r, g, b), c| {
        (r + c.r as u32, g + c.g as u32, b + c.b as u32)
    });
    let n = colors.len() as f64;
    Some(Rgb::from_f64(r as f64 / n, g as f64 / n, b as f64 / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_empty() {
        assert_eq!(mix(&[]), None);
    }

    #[test]
    fn test_mix_single_is_identity() {
        let color = Rgb::new(12, 34, 56);
        assert_eq!(mix(&[color]), Some(color));
    }

    #[test]
    fn test_mix_three() {
        let mixed = mix(&[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]);
        assert_eq!(mixed, Some(Rgb::new(85, 85, 85)));
    }

    #[test]
    fn test_mix_rounds_to_nearest() {
        // (10 + 11) / 2 = 10.5 -> 11; (0 + 1 + 1) / 3 = 0.67 -> 1
        assert_eq!(
            mix(&[Rgb::new(10, 0, 0), Rgb::new(11, 1, 0)]),
            Some(Rgb::new(11, 1, 0))
        );
        assert_eq!(
            mix(&[Rgb::new(0, 0, 0), Rgb::new(1, 0, 0), Rgb::new(1, 0, 0)]),
            Some(Rgb::new(1, 0, 0))
        );
    }
}
