//! Gradient to source-code generators.
//!
//! Every generator is a pure function of a [`GradientSpec`] and the [`CodeOptions`]; they
//! share nothing but the stop-string and axis-clause helpers below. The formats are too
//! different from each other (declarations, markup, imperative statements) to share more.

pub mod components;
pub mod data;
pub mod mobile;
pub mod stylesheet;

use itertools::Itertools;

use crate::code_options::CodeOptions;
use crate::gradient::{GradientKind, GradientSpec};
use crate::output_format::OutputFormat;
use crate::Result;

/// Generates `format` code for `spec` with default options.
pub fn generate(format: OutputFormat, spec: &GradientSpec) -> Result<String> {
    generate_with(format, spec, &CodeOptions::default())
}

/// Generates `format` code for `spec`.
///
/// With `options.rgb_mode` set the format is ignored and the hue-rotating animation is
/// produced instead.
pub fn generate_with(
    format: OutputFormat,
    spec: &GradientSpec,
    options: &CodeOptions,
) -> Result<String> {
    spec.validate()?;

    if options.rgb_mode {
        return rgb_animation(spec, options);
    }

    (format.generator())(spec, options)
}

/// `"{color} {position}%"` for every stop, joined with `", "`.
pub fn stop_string(
    spec: &GradientSpec,
    options: &CodeOptions,
    format: OutputFormat,
) -> Result<String> {
    let stops: Vec<String> = spec
        .stops
        .iter()
        .map(|stop| {
            Ok(format!(
                "{} {}%",
                options.render_color(stop, format)?,
                stop.position
            ))
        })
        .collect::<Result<_>>()?;

    Ok(stops.into_iter().join(", "))
}

/// The full CSS gradient function, e.g. `linear-gradient(90deg, #000 0%, #fff 100%)`.
pub fn axis_clause(
    spec: &GradientSpec,
    options: &CodeOptions,
    format: OutputFormat,
) -> Result<String> {
    let stops = stop_string(spec, options, format)?;

    Ok(axis_clause_with_stops(spec, &stops))
}

pub(crate) fn axis_clause_with_stops(spec: &GradientSpec, stops: &str) -> String {
    let prefix = if spec.repeating { "repeating-" } else { "" };

    match spec.kind {
        GradientKind::Linear => {
            format!("{}linear-gradient({}deg, {})", prefix, spec.angle, stops)
        }
        GradientKind::Radial => format!("{}radial-gradient(circle, {})", prefix, stops),
        GradientKind::Conic => {
            format!("{}conic-gradient(from {}deg, {})", prefix, spec.angle, stops)
        }
    }
}

/// The "RGB mode" override: a keyframe animation rotating the hue of the gradient.
pub fn rgb_animation(spec: &GradientSpec, options: &CodeOptions) -> Result<String> {
    let gradient = axis_clause(spec, options, OutputFormat::Css)?;

    let code = formatdoc!(
        "
        @keyframes rgb-shift {{
          0% {{ filter: hue-rotate(0deg); }}
          100% {{ filter: hue-rotate(360deg); }}
        }}

        .{class} {{
          background: {gradient};
          animation: rgb-shift {speed}s linear infinite;
        }}",
        class = options.class_name_or("gradient"),
        gradient = gradient,
        speed = options.rgb_speed,
    );

    Ok(options.finish(code))
}
