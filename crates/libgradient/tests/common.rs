#![allow(dead_code)]

use libgradient::{ColorStop, GradientKind, GradientSpec};

pub fn stops(colors: &[(&str, f64)]) -> Vec<ColorStop> {
    colors
        .iter()
        .map(|(color, position)| ColorStop::new(*color, *position))
        .collect()
}

pub fn spec(kind: GradientKind, angle: i32, colors: &[(&str, f64)]) -> GradientSpec {
    GradientSpec::new(kind, angle, stops(colors)).unwrap()
}

/// A handful of specs covering every kind, odd angles and non-hex tokens.
pub fn assorted_specs() -> Vec<GradientSpec> {
    vec![
        spec(
            GradientKind::Linear,
            90,
            &[("#FF416C", 0.), ("#FF4B2B", 100.)],
        ),
        spec(
            GradientKind::Linear,
            315,
            &[("#2193B0", 0.), ("rgba(0, 0, 0, 0.5)", 40.), ("#6DD5ED", 100.)],
        ),
        spec(
            GradientKind::Linear,
            0,
            &[("red", 10.), ("hsl(120, 100%, 50%)", 55.), ("blue", 90.)],
        ),
        spec(
            GradientKind::Radial,
            90,
            &[("#CC2B5E", 0.), ("#753A88", 100.)],
        ),
        spec(
            GradientKind::Radial,
            90,
            &[("#134E5E", 0.), ("white", 50.), ("#71B280", 100.)],
        ),
        spec(
            GradientKind::Conic,
            45,
            &[("#000000", 0.), ("#FFFFFF", 25.), ("#000000", 100.)],
        ),
    ]
}

/// Case-insensitive colors with positions, for comparing a spec with its parsed copy.
pub fn normalized_stops(spec: &GradientSpec) -> Vec<(String, f64)> {
    spec.stops
        .iter()
        .map(|stop| (stop.color.to_ascii_lowercase(), stop.position))
        .collect()
}
