//! Conversions from theme strings into GPUI values.
//!
//! Theme fields are kept as the strings they were configured with. Consumers
//! that style GPUI elements from a theme use these helpers to turn them into
//! concrete colors and lengths.

use gpui::{AbsoluteLength, Rgba, px, rems};

use super::ThemeError;

/// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)` and a few keywords.
pub fn parse_color(value: &str) -> Result<Rgba, ThemeError> {
    let trimmed = value.trim();
    let invalid = || ThemeError::InvalidColor(value.to_string());

    match trimmed.to_ascii_lowercase().as_str() {
        "black" => return Ok(rgba(0., 0., 0., 1.)),
        "white" => return Ok(rgba(255., 255., 255., 1.)),
        "transparent" => return Ok(rgba(0., 0., 0., 0.)),
        _ => {}
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    let (args, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
        (rest.strip_suffix(')').ok_or_else(invalid)?, true)
    } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
        (rest.strip_suffix(')').ok_or_else(invalid)?, false)
    } else {
        return Err(invalid());
    };

    let components = args
        .split(',')
        .map(|component| component.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    match (components.as_slice(), has_alpha) {
        ([r, g, b], false) => Ok(rgba(*r, *g, *b, 1.)),
        ([r, g, b, a], true) => Ok(rgba(*r, *g, *b, *a)),
        _ => Err(invalid()),
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(f32::from);
    let short = |i: usize| channel(&hex[i..i + 1].repeat(2));

    match hex.len() {
        3 => Some(rgba(short(0)?, short(1)?, short(2)?, 1.)),
        6 => Some(rgba(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            1.,
        )),
        8 => Some(rgba(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])? / 255.,
        )),
        _ => None,
    }
}

fn rgba(r: f32, g: f32, b: f32, a: f32) -> Rgba {
    Rgba {
        r: (r / 255.).clamp(0., 1.),
        g: (g / 255.).clamp(0., 1.),
        b: (b / 255.).clamp(0., 1.),
        a: a.clamp(0., 1.),
    }
}

/// Parses `px` and `rem` lengths. A bare `0` is accepted as zero pixels.
pub fn parse_length(value: &str) -> Result<AbsoluteLength, ThemeError> {
    let trimmed = value.trim();
    let invalid = || ThemeError::InvalidLength(value.to_string());

    if trimmed == "0" {
        return Ok(AbsoluteLength::Pixels(px(0.)));
    }

    if let Some(number) = trimmed.strip_suffix("rem") {
        let number = number.trim().parse::<f32>().map_err(|_| invalid())?;
        return Ok(AbsoluteLength::Rems(rems(number)));
    }

    if let Some(number) = trimmed.strip_suffix("px") {
        let number = number.trim().parse::<f32>().map_err(|_| invalid())?;
        return Ok(AbsoluteLength::Pixels(px(number)));
    }

    Err(invalid())
}
