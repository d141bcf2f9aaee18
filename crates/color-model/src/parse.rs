//! Parsers for the four color notations.
//!
//! Every notation except hex accepts either a bare tuple (`10,20,30`) or the
//! same tuple wrapped in its function form (`rgb(10,20,30)`). The function
//! prefix is matched case-insensitively. Each numeric token is trimmed and
//! must be a number in its entirety: `12px` is rejected, not truncated.

use crate::cmyk::Cmyk;
use crate::error::ParseColorError;
use crate::hsl::hsl_to_rgb;
use crate::model::ColorModel;
use crate::rgb::Rgb;

/// Parse a single color written in `model` notation.
///
/// # Example
/// ```
/// use color_model::{parse_color, ColorModel, Rgb};
///
/// assert_eq!(parse_color("cmyk(100,0,0,0)", ColorModel::Cmyk).unwrap(), Rgb::new(0, 255, 255));
/// assert!(parse_color("rgb(999,0,0)", ColorModel::Rgb).is_err());
/// ```
pub fn parse_color(text: &str, model: ColorModel) -> Result<Rgb, ParseColorError> {
    match model {
        ColorModel::Hex => parse_hex(text),
        ColorModel::Rgb => parse_rgb(text),
        ColorModel::Hsl => parse_hsl(text),
        ColorModel::Cmyk => parse_cmyk(text),
    }
}

/// Parse a `;`-separated list of colors written in `model` notation.
///
/// Empty and whitespace-only entries are skipped. A single bad entry fails
/// the whole list, and a list with no entries at all is an error.
///
/// # Example
/// ```
/// use color_model::{parse_color_list, ColorModel, Rgb};
///
/// let colors = parse_color_list("#f00; ; 00ff00;", ColorModel::Hex).unwrap();
/// assert_eq!(colors, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]);
/// ```
pub fn parse_color_list(raw: &str, model: ColorModel) -> Result<Vec<Rgb>, ParseColorError> {
    let colors = raw
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            parse_color(token, model).map_err(|e| ParseColorError::ListEntry {
                model,
                index: i + 1,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if colors.is_empty() {
        return Err(ParseColorError::EmptyList { model });
    }
    Ok(colors)
}

/// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive).
///
/// The three-digit form duplicates each digit: `abc` is `aabbcc`.
pub fn parse_hex(value: &str) -> Result<Rgb, ParseColorError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ParseColorError::Empty);
    }
    let value = value.strip_prefix('#').unwrap_or(value);

    let digits = value
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ParseColorError::InvalidHexDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>();

    // Length is reported before bad digits so "#12345g7" says "length 7"
    let count = value.chars().count();
    if count != 3 && count != 6 {
        return Err(ParseColorError::InvalidLength(count));
    }
    let digits = digits?;

    let [r, g, b] = match digits.as_slice() {
        &[r, g, b] => [r * 17, g * 17, b * 17],
        &[r1, r0, g1, g0, b1, b0] => [r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0],
        _ => return Err(ParseColorError::InvalidLength(count)),
    };
    Ok(Rgb::new(r, g, b))
}

/// Parse `r,g,b` or `rgb(r,g,b)`. Channels are real numbers rounded to the
/// nearest integer, which must then lie in 0..=255.
pub fn parse_rgb(value: &str) -> Result<Rgb, ParseColorError> {
    let body = strip_wrapper(value.trim(), "rgb");
    let [r, g, b] = split_components::<3>(body)?;
    Ok(Rgb::new(
        parse_channel(r, "red")?,
        parse_channel(g, "green")?,
        parse_channel(b, "blue")?,
    ))
}

/// Parse `h,s,l` or `hsl(h,s%,l%)`. Hue is unbounded and reduced modulo 360;
/// saturation and lightness are percentages with an optional `%`.
pub fn parse_hsl(value: &str) -> Result<Rgb, ParseColorError> {
    let body = strip_wrapper(value.trim(), "hsl");
    let [h, s, l] = split_components::<3>(body)?;
    let hue = parse_number(h)?;
    let saturation = parse_percent(s, "saturation")?;
    let lightness = parse_percent(l, "lightness")?;
    hsl_to_rgb(hue, saturation, lightness)
}

/// Parse `c,m,y,k` or `cmyk(c%,m%,y%,k%)`, each a percentage in 0..=100.
pub fn parse_cmyk(value: &str) -> Result<Rgb, ParseColorError> {
    let body = strip_wrapper(value.trim(), "cmyk");
    let [c, m, y, k] = split_components::<4>(body)?;
    Ok(Cmyk::new(
        parse_percent(c, "cyan")?,
        parse_percent(m, "magenta")?,
        parse_percent(y, "yellow")?,
        parse_percent(k, "key")?,
    )
    .to_rgb())
}

/// Remove a `prefix(` ... `)` wrapper if present; otherwise return the input.
fn strip_wrapper<'a>(value: &'a str, prefix: &str) -> &'a str {
    let open = prefix.len() + 1;
    if value.len() <= open || !value.ends_with(')') {
        return value;
    }
    let wrapped = value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        && value.as_bytes()[prefix.len()] == b'(';
    if wrapped {
        &value[open..value.len() - 1]
    } else {
        value
    }
}

/// Split on commas, requiring exactly `N` components.
fn split_components<const N: usize>(body: &str) -> Result<[&str; N], ParseColorError> {
    let parts: Vec<&str> = body.split(',').collect();
    let found = parts.len();
    parts
        .try_into()
        .map_err(|_| ParseColorError::ComponentCount { expected: N, found })
}

/// Parse a finite real number from the entire trimmed token.
fn parse_number(token: &str) -> Result<f64, ParseColorError> {
    let trimmed = token.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseColorError::InvalidNumber(trimmed.to_string())),
    }
}

fn parse_channel(token: &str, component: &'static str) -> Result<u8, ParseColorError> {
    let rounded = parse_number(token)?.round();
    if !(0.0..=255.0).contains(&rounded) {
        return Err(ParseColorError::OutOfRange {
            component,
            value: rounded,
            min: 0.0,
            max: 255.0,
        });
    }
    Ok(rounded as u8)
}

fn parse_percent(token: &str, component: &'static str) -> Result<f64, ParseColorError> {
    let trimmed = token.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
    let value = parse_number(number)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ParseColorError::OutOfRange {
            component,
            value,
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(value)
}
