//! Fixed bitmap fonts
//!
//! Two glyph sets, both stored as one bit mask per row with the leftmost
//! column in the highest used bit:
//!
//! - a 3x5 digit font used to number swatches
//! - a 5x7 font covering A-Z, 0-9, `.` and `-`, with a blank fallback
//!
//! Every "on" cell is drawn as a `scale x scale` filled square.

use color_model::Rgb;

use super::canvas::Canvas;

pub const DIGIT_COLUMNS: i64 = 3;
pub const DIGIT_ROWS: i64 = 5;
pub const GLYPH_COLUMNS: i64 = 5;
pub const GLYPH_ROWS: i64 = 7;

type DigitGlyph = [u8; DIGIT_ROWS as usize];
type Glyph = [u8; GLYPH_ROWS as usize];

#[rustfmt::skip]
const DIGITS: [DigitGlyph; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

const BLANK: Glyph = [0; 7];
const DOT: Glyph = [0, 0, 0, 0, 0, 0b00110, 0b00110];
const DASH: Glyph = [0, 0, 0, 0b11111, 0, 0, 0];

#[rustfmt::skip]
const LETTERS: [Glyph; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01111, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b01111], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01111, 0b10000, 0b10000, 0b10011, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

#[rustfmt::skip]
const NUMERALS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b10000, 0b11110, 0b00001, 0b00001, 0b11110], // 5
    [0b01110, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110], // 9
];

/// The 5x7 pattern for `c`, case-folded; unknown characters are blank.
pub fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        c @ 'A'..='Z' => &LETTERS[(c as u8 - b'A') as usize],
        c @ '0'..='9' => &NUMERALS[(c as u8 - b'0') as usize],
        '.' => &DOT,
        '-' => &DASH,
        _ => &BLANK,
    }
}

/// Horizontal gap between neighbouring digits or characters.
#[inline]
pub fn char_spacing(scale: i64) -> i64 {
    (scale / 2).max(1)
}

fn draw_cells(canvas: &mut Canvas, rows: &[u8], columns: i64, x: i64, y: i64, scale: i64, color: Rgb) {
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..columns {
            if (bits >> (columns - 1 - col)) & 1 == 1 {
                canvas.fill_rect(x + col * scale, y + row as i64 * scale, scale, scale, color);
            }
        }
    }
}

/// Draw one 3x5 digit with its top-left corner at `(x, y)`. Values above 9
/// draw nothing.
pub fn draw_digit(canvas: &mut Canvas, digit: u8, x: i64, y: i64, scale: i64, color: Rgb) {
    if let Some(rows) = DIGITS.get(digit as usize) {
        draw_cells(canvas, rows, DIGIT_COLUMNS, x, y, scale, color);
    }
}

/// Rendered width of `number` in the 3x5 digit font.
pub fn number_width(number: usize, scale: i64) -> i64 {
    let len = number.to_string().len() as i64;
    len * DIGIT_COLUMNS * scale + (len - 1) * char_spacing(scale)
}

/// Draw a decimal number centered on `(center_x, center_y)`.
pub fn draw_number(
    canvas: &mut Canvas,
    number: usize,
    center_x: i64,
    center_y: i64,
    scale: i64,
    color: Rgb,
) {
    let advance = DIGIT_COLUMNS * scale + char_spacing(scale);
    let mut x = center_x - number_width(number, scale) / 2;
    let y = center_y - (DIGIT_ROWS * scale) / 2;

    for digit in number.to_string().bytes().map(|b| b - b'0') {
        draw_digit(canvas, digit, x, y, scale, color);
        x += advance;
    }
}

/// Draw one 5x7 character with its top-left corner at `(x, y)`.
pub fn draw_glyph(canvas: &mut Canvas, c: char, x: i64, y: i64, scale: i64, color: Rgb) {
    draw_cells(canvas, glyph(c), GLYPH_COLUMNS, x, y, scale, color);
}

/// Rendered width of a text line; an empty line is 0 wide.
pub fn text_width(line: &str, scale: i64) -> i64 {
    let len = line.chars().count() as i64;
    if len == 0 {
        return 0;
    }
    len * GLYPH_COLUMNS * scale + (len - 1) * char_spacing(scale)
}

/// Draw a line of text left to right starting at `(x, y)`.
pub fn draw_text(canvas: &mut Canvas, line: &str, x: i64, y: i64, scale: i64, color: Rgb) {
    let advance = GLYPH_COLUMNS * scale + char_spacing(scale);
    let mut cursor = x;
    for c in line.chars() {
        draw_glyph(canvas, c, cursor, y, scale, color);
        cursor += advance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(canvas: &Canvas, color: Rgb) -> Vec<(u32, u32)> {
        (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Some(color))
            .collect()
    }

    #[test]
    fn test_glyph_lookup_is_case_insensitive() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), &LETTERS[25]);
        assert_eq!(glyph('7'), &NUMERALS[7]);
        assert_eq!(glyph('?'), &BLANK);
        assert_eq!(glyph(' '), &BLANK);
        assert_eq!(glyph('é'), &BLANK);
    }

    #[test]
    fn test_glyph_rows_fit_width() {
        for g in LETTERS.iter().chain(NUMERALS.iter()) {
            assert!(g.iter().all(|&row| row < 1 << GLYPH_COLUMNS));
            assert!(g.iter().any(|&row| row != 0));
        }
        for d in DIGITS.iter() {
            assert!(d.iter().all(|&row| row < 1 << DIGIT_COLUMNS));
        }
    }

    #[test]
    fn test_draw_digit_one_at_scale_one() {
        let mut canvas = Canvas::new(3, 5, Rgb::WHITE);
        draw_digit(&mut canvas, 1, 0, 0, 1, Rgb::BLACK);
        // 010 / 110 / 010 / 010 / 111
        assert_eq!(
            lit(&canvas, Rgb::BLACK),
            vec![(1, 0), (0, 1), (1, 1), (1, 2), (1, 3), (0, 4), (1, 4), (2, 4)]
        );
    }

    #[test]
    fn test_draw_digit_scales_cells() {
        let mut canvas = Canvas::new(12, 20, Rgb::WHITE);
        draw_digit(&mut canvas, 8, 0, 0, 4, Rgb::BLACK);
        // 8 has 13 lit cells
        assert_eq!(lit(&canvas, Rgb::BLACK).len(), 13 * 16);
    }

    #[test]
    fn test_draw_digit_out_of_range_is_noop() {
        let mut canvas = Canvas::new(5, 5, Rgb::WHITE);
        draw_digit(&mut canvas, 10, 0, 0, 1, Rgb::BLACK);
        assert!(lit(&canvas, Rgb::BLACK).is_empty());
    }

    #[test]
    fn test_number_width() {
        assert_eq!(number_width(7, 4), 12);
        // two digits of 12 plus a gap of 2
        assert_eq!(number_width(12, 4), 26);
        assert_eq!(number_width(100, 1), 3 * 3 + 2);
    }

    #[test]
    fn test_draw_number_is_centered() {
        let mut canvas = Canvas::new(40, 20, Rgb::WHITE);
        draw_number(&mut canvas, 11, 20, 10, 2, Rgb::BLACK);
        // width = 2*6 + 1 = 13, start at 20 - 6 = 14; top at 10 - 5 = 5
        let pixels = lit(&canvas, Rgb::BLACK);
        let min_x = pixels.iter().map(|p| p.0).min().unwrap();
        let max_x = pixels.iter().map(|p| p.0).max().unwrap();
        let min_y = pixels.iter().map(|p| p.1).min().unwrap();
        let max_y = pixels.iter().map(|p| p.1).max().unwrap();
        // "1" is 010 on its first row, 110 below; the final row spans 111
        assert_eq!((min_x, max_x), (14, 14 + 13 - 1));
        assert_eq!((min_y, max_y), (5, 5 + 10 - 1));
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_width("A", 3), 15);
        assert_eq!(text_width("AB", 3), 15 * 2 + 1);
        assert_eq!(text_width("ABC", 1), 5 * 3 + 2);
    }

    #[test]
    fn test_draw_text_dash() {
        let mut canvas = Canvas::new(11, 7, Rgb::BLACK);
        draw_text(&mut canvas, "--", 0, 0, 1, Rgb::WHITE);
        let pixels = lit(&canvas, Rgb::WHITE);
        assert_eq!(pixels.len(), 10);
        assert!(pixels.iter().all(|&(_, y)| y == 3));
        // second dash starts after 5 columns plus 1 spacing
        assert!(pixels.contains(&(6, 3)));
        assert!(!pixels.contains(&(5, 3)));
    }

    #[test]
    fn test_draw_text_clips_at_edges() {
        let mut canvas = Canvas::new(4, 4, Rgb::BLACK);
        draw_text(&mut canvas, "W", -2, -2, 1, Rgb::WHITE);
        draw_text(&mut canvas, "W", 100, 100, 1, Rgb::WHITE);
        assert!(!lit(&canvas, Rgb::WHITE).is_empty());
    }
}
