//! Tests for text banners and contrast banners.

mod common;

use common::fixtures::{bytes, colors};
use common::DecodedImage;
use palette_engine::color::Rgb;
use palette_engine::{
    render_contrast_banner, text_on_background, text_on_black, text_on_white, ContrastBackground,
    LayoutSpec, PaletteRenderer, RenderError,
};
use pretty_assertions::assert_eq;

/// Inclusive bounding box `(min_x, min_y, max_x, max_y)` of pixels equal to `color`.
fn bounding_box(image: &DecodedImage, color: [u8; 3]) -> Option<(u32, u32, u32, u32)> {
    let mut found = None;
    for y in 0..image.height {
        for x in 0..image.width {
            if image.rgb(x, y) != color {
                continue;
            }
            let (x0, y0, x1, y1) = found.unwrap_or((x, y, x, y));
            found = Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y)));
        }
    }
    found
}

#[test]
fn test_single_line_is_centered() {
    let png = text_on_black(&["HELLO"], Rgb::WHITE);
    common::assert_valid_png(&png);
    let image = common::decode_png(&png);

    assert_eq!(image.rgb(0, 0), [0, 0, 0]);
    // Scale 20: 5 glyphs of 100px plus 4 gaps of 10px, 140px tall
    assert_eq!(bounding_box(&image, [255, 255, 255]), Some((130, 230, 669, 369)));
}

#[test]
fn test_lowercase_renders_like_uppercase() {
    let lower = text_on_white(&["palette"], colors::NAVY);
    let upper = text_on_white(&["PALETTE"], colors::NAVY);
    assert_eq!(lower, upper);
}

#[test]
fn test_background_and_text_colors() {
    let png = text_on_background(&["AB 12"], colors::ORANGE, colors::NAVY);
    let image = common::decode_png(&png);

    assert_eq!(image.rgb(0, 0), bytes(colors::NAVY));
    assert_eq!(image.rgb(799, 599), bytes(colors::NAVY));
    let text_pixels = image.count(bytes(colors::ORANGE));
    let background_pixels = image.count(bytes(colors::NAVY));
    assert!(text_pixels > 0);
    assert_eq!(text_pixels + background_pixels, 800 * 600);
}

#[test]
fn test_overlong_line_still_renders() {
    let line = "W".repeat(200);
    let png = text_on_white(&[line.as_str()], Rgb::BLACK);
    let image = common::decode_png(&png);

    assert_eq!((image.width, image.height), (800, 600));
    // Clipped at the smallest scale: text reaches both canvas edges
    let (x0, _, x1, _) = bounding_box(&image, [0, 0, 0]).unwrap();
    assert_eq!((x0, x1), (0, 799));
}

#[test]
fn test_unknown_characters_leave_gaps() {
    let known = common::decode_png(&text_on_white(&["A A"], Rgb::BLACK));
    let unknown = common::decode_png(&text_on_white(&["A?A"], Rgb::BLACK));
    assert_eq!(known.pixels, unknown.pixels);
}

#[test]
fn test_no_lines_is_an_error() {
    let lines: [&str; 0] = [];
    assert!(text_on_black(&lines, Rgb::WHITE).is_empty());

    let renderer = PaletteRenderer::default();
    assert_eq!(renderer.try_text(&lines, Rgb::WHITE, Rgb::BLACK), Err(RenderError::EmptyText));
}

#[test]
fn test_custom_layout_size() {
    let renderer = PaletteRenderer::new(LayoutSpec {
        width: 200,
        height: 100,
        margin_x: 10,
        margin_y: 10,
        ..LayoutSpec::DEFAULT
    });
    let png = renderer.text(&["OK"], Rgb::WHITE, Rgb::BLACK);
    assert_eq!(common::png_dimensions(&png), (200, 100));
}

#[test]
fn test_contrast_banner_on_black() {
    let banner = render_contrast_banner(colors::ORANGE, ContrastBackground::Black);

    assert_eq!(
        banner.lines,
        vec![
            "COLOR FF8800".to_string(),
            "CONTRAST ON BLACK".to_string(),
            format!("PASS {} OF 4", banner.contrast.pass_count()),
            format!("{} PERCENT RATING", banner.contrast.rating_percent()),
        ]
    );
    assert_eq!(banner.contrast.pass_count(), 4);

    let image = common::decode_png(&banner.png);
    assert_eq!(image.rgb(0, 0), [0, 0, 0]);
    assert!(image.count(bytes(colors::ORANGE)) > 0);
}

#[test]
fn test_contrast_banner_on_white_fails_for_white() {
    let banner = render_contrast_banner(Rgb::WHITE, ContrastBackground::White);

    assert_eq!(banner.contrast.pass_count(), 0);
    assert_eq!(banner.lines[2], "PASS 0 OF 4");
    // White on white draws nothing visible
    let image = common::decode_png(&banner.png);
    assert_eq!(image.count([255, 255, 255]), 800 * 600);
}
