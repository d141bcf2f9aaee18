//! Hue-rotation color harmonies

use crate::hsl::{hsl_to_rgb_clamped, Hsl};
use crate::rgb::Rgb;

/// Rotate the hue of a color, keeping saturation and lightness.
pub fn rotate_hue(color: Rgb, degrees: f64) -> Rgb {
    let hsl = Hsl::from_rgb(color).rotate(degrees);
    hsl_to_rgb_clamped(hsl.hue, hsl.saturation, hsl.lightness)
}

/// The color opposite on the color wheel (hue + 180).
///
/// # Example
/// ```
/// use color_model::{complementary, Rgb};
/// assert_eq!(complementary(Rgb::new(255, 0, 0)), Rgb::new(0, 255, 255));
/// ```
pub fn complementary(color: Rgb) -> Rgb {
    rotate_hue(color, 180.0)
}

/// Base color plus the two hues flanking its complement (hue + 150, hue + 210).
pub fn split_complementary(color: Rgb) -> [Rgb; 3] {
    [color, rotate_hue(color, 150.0), rotate_hue(color, 210.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_of_primaries() {
        assert_eq!(complementary(Rgb::new(0, 255, 0)), Rgb::new(255, 0, 255));
        assert_eq!(complementary(Rgb::new(0, 0, 255)), Rgb::new(255, 255, 0));
    }

    #[test]
    fn test_complement_of_gray_is_itself() {
        let gray = Rgb::new(60, 60, 60);
        assert_eq!(complementary(gray), gray);
    }

    #[test]
    fn test_double_complement_returns() {
        let color = Rgb::new(200, 40, 90);
        assert_eq!(complementary(complementary(color)), color);
    }

    #[test]
    fn test_split_complementary_red() {
        let [base, left, right] = split_complementary(Rgb::new(255, 0, 0));
        assert_eq!(base, Rgb::new(255, 0, 0));
        // hue 150: green-cyan, hue 210: azure; the half-way channel may round either way
        assert_eq!((left.r, left.g), (0, 255));
        assert!(left.b.abs_diff(128) <= 1, "left = {left}");
        assert_eq!((right.r, right.b), (0, 255));
        assert!(right.g.abs_diff(128) <= 1, "right = {right}");
    }
}
