//! Reads an existing CSS gradient declaration back into a [`GradientSpec`].
//!
//! The parser is forgiving: it accepts a bare function, a full
//! `background: ...;` declaration or vendor-prefixed variants, and ignores anything it
//! doesn't understand. Input it can't make sense of yields `None`, never an error, so a
//! host can try it on any pasted text and keep its current gradient on failure.

use regex::Regex;

use crate::gradient::{ColorStop, GradientKind, GradientSpec};

lazy_static! {
    static ref VENDOR_PREFIX: Regex = Regex::new(r"-(?:webkit|moz|o|ms)-").unwrap();
    /// A whole part that is nothing but an angle, e.g. `45deg` or `-0.25turn`.
    static ref ANGLE: Regex =
        Regex::new(r"(?i)^\s*(-?\d*\.?\d+)(deg|grad|rad|turn)\s*$").unwrap();
    /// A color token at the start of a stop, followed by an optional position.
    static ref STOP: Regex = Regex::new(
        r"(?i)^(#(?:[0-9a-f]{8}|[0-9a-f]{6}|[0-9a-f]{3,4})\b|(?:rgba?|hsla?)\([^)]*\)|[a-z]+)\s*(-?\d+(?:\.\d+)?)?\s*(%|px)?"
    )
    .unwrap();
}

/// Parses `text` into a gradient, or `None` when it isn't a recognizable gradient with
/// at least two color stops.
pub fn parse(text: &str) -> Option<GradientSpec> {
    let text = VENDOR_PREFIX.replace_all(text.trim(), "");
    let lowercase = text.to_ascii_lowercase();

    let kind = if lowercase.contains("linear-gradient") {
        GradientKind::Linear
    } else if lowercase.contains("radial-gradient") {
        GradientKind::Radial
    } else if lowercase.contains("conic-gradient") {
        GradientKind::Conic
    } else {
        return None;
    };

    let repeating = lowercase.contains(&format!("repeating-{}", kind.css_function()));

    let keyword_at = lowercase.find(kind.css_function())?;
    let body = function_body(&text, keyword_at)?;
    let parts = split_top_level(body);

    let (angle, stop_parts) = match kind {
        GradientKind::Linear => linear_prelude(&parts),
        GradientKind::Radial => (90, skip_radial_prelude(&parts)),
        GradientKind::Conic => conic_prelude(&parts),
    };

    let stops = color_stops(stop_parts);

    if stops.len() < GradientSpec::MIN_STOPS {
        return None;
    }

    Some(GradientSpec {
        kind,
        angle,
        stops,
        repeating,
    })
}

/// The text between the first `(` after `from` and its matching `)`.
fn function_body(text: &str, from: usize) -> Option<&str> {
    let open = from + text[from..].find('(')?;
    let mut depth = 0;

    for (i, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open + 1..open + i]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Splits on commas that aren't nested inside parentheses, so `rgb(1, 2, 3)` stays whole.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = vec![];
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(body[start..].trim());

    parts
}

/// Reads the angle or `to <side>` direction of a linear gradient. Without either, the
/// angle is 90 and every part is a stop.
fn linear_prelude<'a>(parts: &'a [&'a str]) -> (i32, &'a [&'a str]) {
    let Some(first) = parts.first() else {
        return (90, parts);
    };

    if let Some(angle) = parse_angle(first) {
        return (angle, &parts[1..]);
    }

    let lowercase = first.to_ascii_lowercase();
    if let Some(direction) = lowercase.strip_prefix("to ") {
        let direction = direction.split_whitespace().collect::<Vec<_>>().join(" ");
        return (direction_angle(&direction).unwrap_or(90), &parts[1..]);
    }

    (90, parts)
}

fn direction_angle(direction: &str) -> Option<i32> {
    let angle = match direction {
        "top" => 0,
        "right" => 90,
        "bottom" => 180,
        "left" => 270,
        "top right" | "right top" => 45,
        "bottom right" | "right bottom" => 135,
        "bottom left" | "left bottom" => 225,
        "top left" | "left top" => 315,
        _ => return None,
    };

    Some(angle)
}

/// Radial shape, extent, size and position come before the stops; none of them carry
/// anything the model keeps. A first part that doesn't start with a color is prelude too,
/// e.g. `100px 50px`.
fn skip_radial_prelude<'a>(parts: &'a [&'a str]) -> &'a [&'a str] {
    const PRELUDE_WORDS: &[&str] = &[
        "circle",
        "ellipse",
        "closest-side",
        "closest-corner",
        "farthest-side",
        "farthest-corner",
        "at",
    ];

    match parts.first() {
        Some(first)
            if first
                .split_whitespace()
                .next()
                .map(|word| PRELUDE_WORDS.contains(&word.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
                || !STOP.is_match(first) =>
        {
            &parts[1..]
        }
        _ => parts,
    }
}

/// `from <angle>` and/or `at <position>`. Conic gradients start at 0deg when no angle is
/// given.
fn conic_prelude<'a>(parts: &'a [&'a str]) -> (i32, &'a [&'a str]) {
    match parts.first() {
        Some(first) => {
            let lowercase = first.to_ascii_lowercase();
            if let Some(rest) = lowercase.strip_prefix("from ") {
                let angle = rest.split_whitespace().next().and_then(parse_angle);
                (angle.unwrap_or(0), &parts[1..])
            } else if lowercase.starts_with("at ") {
                (0, &parts[1..])
            } else {
                (0, parts)
            }
        }
        None => (0, parts),
    }
}

/// Reads an angle in any CSS unit and converts it to whole degrees.
fn parse_angle(text: &str) -> Option<i32> {
    let captures = ANGLE.captures(text)?;
    let value: f64 = captures.get(1)?.as_str().parse().ok()?;

    let degrees = match captures.get(2)?.as_str().to_ascii_lowercase().as_str() {
        "deg" => value,
        "grad" => value * 0.9,
        "rad" => value.to_degrees(),
        "turn" => value * 360.,
        _ => return None,
    };

    Some(degrees.round() as i32)
}

/// Extracts `(color, position)` from every part. Parts without an explicit position are
/// spread evenly by their index among the stop parts.
fn color_stops(parts: &[&str]) -> Vec<ColorStop> {
    let step = if parts.len() > 1 {
        100. / (parts.len() - 1) as f64
    } else {
        0.
    };

    parts
        .iter()
        .enumerate()
        .filter_map(|(i, part)| {
            let captures = STOP.captures(part)?;
            let token = captures.get(1)?.as_str();

            let color = if token.starts_with('#') {
                token.to_ascii_uppercase()
            } else {
                token.to_string()
            };

            let position = captures
                .get(2)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .unwrap_or(i as f64 * step);

            Some(ColorStop::new(color, position.round()))
        })
        .collect()
}
