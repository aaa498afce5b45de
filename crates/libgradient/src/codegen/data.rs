//! Data-oriented output: the spec itself as JSON, and a standalone SVG image.

use color_utils::format_decimal;
use svg::node::element::{Definitions, LinearGradient, RadialGradient, Rectangle, Stop};
use svg::Document;

use crate::code_options::CodeOptions;
use crate::gradient::{GradientKind, GradientSpec};
use crate::output_format::OutputFormat;
use crate::{Error, Result};

const GRADIENT_ID: &str = "gradient";

/// Pretty-printed JSON in the same shape the model deserializes from.
pub fn json(spec: &GradientSpec, _options: &CodeOptions) -> Result<String> {
    serde_json::to_string_pretty(spec).map_err(|e| Error::Serialization(e.to_string()))
}

/// A 400x400 SVG document whose only shape is filled with the gradient.
///
/// SVG has no conic gradient, so conic specs are refused.
pub fn svg(spec: &GradientSpec, _options: &CodeOptions) -> Result<String> {
    let stops: Vec<Stop> = spec
        .stops
        .iter()
        .map(|stop| {
            Stop::new()
                .set("offset", format!("{}%", stop.position))
                .set("stop-color", stop.color.as_str())
                .set("stop-opacity", format_decimal(stop.opacity / 100., 2))
        })
        .collect();

    let spread = if spec.repeating { "repeat" } else { "pad" };

    let definitions = match spec.kind {
        GradientKind::Linear => {
            let (x1, y1, x2, y2) = linear_endpoints(spec.angle);
            let mut gradient = LinearGradient::new()
                .set("id", GRADIENT_ID)
                .set("x1", x1)
                .set("y1", y1)
                .set("x2", x2)
                .set("y2", y2)
                .set("spreadMethod", spread);
            for stop in stops {
                gradient = gradient.add(stop);
            }
            Definitions::new().add(gradient)
        }
        GradientKind::Radial => {
            // `circle` sized to the farthest corner of the unit box.
            let mut gradient = RadialGradient::new()
                .set("id", GRADIENT_ID)
                .set("cx", "0.5")
                .set("cy", "0.5")
                .set("r", format_decimal(std::f64::consts::FRAC_1_SQRT_2, 4))
                .set("spreadMethod", spread);
            for stop in stops {
                gradient = gradient.add(stop);
            }
            Definitions::new().add(gradient)
        }
        GradientKind::Conic => {
            return Err(Error::UnsupportedKind {
                kind: spec.kind,
                format: OutputFormat::Svg,
            })
        }
    };

    let document = Document::new()
        .set("width", "400")
        .set("height", "400")
        .set("viewBox", "0 0 400 400")
        .add(definitions)
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", format!("url(#{})", GRADIENT_ID)),
        );

    Ok(document.to_string())
}

/// Maps a CSS gradient angle onto `objectBoundingBox` endpoints.
///
/// CSS measures clockwise from "to top"; the gradient line runs through the center.
fn linear_endpoints(angle: i32) -> (String, String, String, String) {
    let radians = (angle as f64).to_radians();
    let (dx, dy) = (radians.sin() * 0.5, radians.cos() * 0.5);

    let coord = |v: f64| format_decimal(v, 4);

    (
        coord(0.5 - dx),
        coord(0.5 + dy),
        coord(0.5 + dx),
        coord(0.5 - dy),
    )
}
