//! Native mobile drawing APIs: UIKit layers, Android drawables and Flutter decorations.
//!
//! These targets need numeric channels rather than CSS text, so every stop color is
//! decomposed first. Tokens that don't describe a concrete color (`var(--x)`,
//! `currentcolor`, typos) are reported as [`Error::UnsupportedColor`] instead of being
//! turned into garbage numbers. Stop opacity is folded into the alpha channel.

use color_utils::{decompose, format_decimal, Rgba};
use itertools::Itertools;

use crate::code_options::CodeOptions;
use crate::gradient::{ColorStop, GradientKind, GradientSpec};
use crate::output_format::OutputFormat;
use crate::{Error, Result};

fn stop_color(stop: &ColorStop, format: OutputFormat) -> Result<Rgba> {
    decompose(&stop.color)
        .map(|color| color.fade(stop.opacity / 100.))
        .map_err(|_| Error::UnsupportedColor {
            color: stop.color.clone(),
            format,
        })
}

fn stop_colors(spec: &GradientSpec, format: OutputFormat) -> Result<Vec<Rgba>> {
    spec.stops
        .iter()
        .map(|stop| stop_color(stop, format))
        .collect()
}

/// Stop positions as fractions with two decimals, e.g. `0.00, 0.50, 1.00`.
fn locations(spec: &GradientSpec) -> String {
    spec.stops
        .iter()
        .map(|stop| format!("{:.2}", stop.position / 100.))
        .join(", ")
}

fn alpha_byte(color: Rgba) -> u8 {
    (color.a * 255.).round() as u8
}

/// A `CAGradientLayer` setup for UIKit.
pub fn swift(spec: &GradientSpec, _options: &CodeOptions) -> Result<String> {
    let colors = stop_colors(spec, OutputFormat::Swift)?
        .into_iter()
        .map(|color| {
            let (r, g, b) = color.unit_channels();
            let alpha = if color.is_opaque() {
                "1.0".to_string()
            } else {
                format_decimal(color.a, 2)
            };

            format!(
                "UIColor(red: {:.2}, green: {:.2}, blue: {:.2}, alpha: {}).cgColor",
                r, g, b, alpha
            )
        })
        .join(",\n  ");

    let mut lines = vec![
        "let gradient = CAGradientLayer()".to_string(),
        "gradient.colors = [".to_string(),
        format!("  {}", colors),
        "]".to_string(),
        format!("gradient.locations = [{}]", locations(spec)),
    ];

    if spec.kind == GradientKind::Linear {
        lines.push("gradient.startPoint = CGPoint(x: 0.5, y: 0)".to_string());
        lines.push("gradient.endPoint = CGPoint(x: 0.5, y: 1)".to_string());
    }

    lines.push("gradient.frame = view.bounds".to_string());
    lines.push("view.layer.insertSublayer(gradient, at: 0)".to_string());

    Ok(lines.join("\n"))
}

/// An Android `GradientDrawable`.
///
/// `Color.parseColor` understands `#RRGGBB` and `#AARRGGBB`, so six-digit hex tokens are
/// passed through and everything else is normalized to one of those.
pub fn kotlin(spec: &GradientSpec, _options: &CodeOptions) -> Result<String> {
    let colors = spec
        .stops
        .iter()
        .map(|stop| {
            let color = stop_color(stop, OutputFormat::Kotlin)?;

            let literal = if color.is_opaque() && is_hex6(&stop.color) {
                stop.color.trim().to_string()
            } else if color.is_opaque() {
                color.to_hex()
            } else {
                format!("#{:02X}{}", alpha_byte(color), color.hex_digits())
            };

            Ok(format!("Color.parseColor(\"{}\")", literal))
        })
        .collect::<Result<Vec<_>>>()?
        .join(", ");

    let orientation = match spec.kind {
        GradientKind::Linear => "TOP_BOTTOM",
        _ => "TL_BR",
    };

    let mut lines = vec![
        "val gradientDrawable = GradientDrawable(".to_string(),
        format!("    GradientDrawable.Orientation.{},", orientation),
        format!("    intArrayOf({})", colors),
        ")".to_string(),
    ];

    if spec.kind == GradientKind::Radial {
        lines.push(
            "gradientDrawable.gradientType = GradientDrawable.RADIAL_GRADIENT".to_string(),
        );
    }

    lines.push("view.background = gradientDrawable".to_string());

    Ok(lines.join("\n"))
}

fn is_hex6(token: &str) -> bool {
    token
        .trim()
        .strip_prefix('#')
        .map(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// A Flutter `BoxDecoration`. Conic gradients map to Flutter's `SweepGradient`.
pub fn flutter(spec: &GradientSpec, _options: &CodeOptions) -> Result<String> {
    let colors = stop_colors(spec, OutputFormat::Flutter)?
        .into_iter()
        .map(|color| format!("Color(0x{:02X}{})", alpha_byte(color), color.hex_digits()))
        .join(", ");
    let stops = locations(spec);

    Ok(match spec.kind {
        GradientKind::Linear => formatdoc!(
            "
            Container(
              decoration: BoxDecoration(
                gradient: LinearGradient(
                  begin: Alignment.topCenter,
                  end: Alignment.bottomCenter,
                  colors: [{colors}],
                  stops: [{stops}],
                ),
              ),
            )",
            colors = colors,
            stops = stops,
        ),
        GradientKind::Radial => formatdoc!(
            "
            Container(
              decoration: BoxDecoration(
                gradient: RadialGradient(
                  colors: [{colors}],
                  stops: [{stops}],
                ),
              ),
            )",
            colors = colors,
            stops = stops,
        ),
        GradientKind::Conic => formatdoc!(
            "
            Container(
              decoration: BoxDecoration(
                gradient: SweepGradient(
                  colors: [{colors}],
                  stops: [{stops}],
                ),
              ),
            )",
            colors = colors,
            stops = stops,
        ),
    })
}
