//! Stylesheet-family output: plain CSS, preprocessors, custom properties and utility classes.

use crate::code_options::CodeOptions;
use crate::codegen::axis_clause;
use crate::gradient::{GradientKind, GradientSpec};
use crate::output_format::OutputFormat;
use crate::{Error, Result};

/// A single `background:` declaration.
pub fn css(spec: &GradientSpec, options: &CodeOptions) -> Result<String> {
    let mut lines = vec![];

    if options.include_fallback {
        if let Some(first) = spec.first_stop() {
            lines.push(format!(
                "background: {};",
                options.render_color(first, OutputFormat::Css)?
            ));
        }
    }

    if options.include_vendor_prefixes {
        if let Some(prefixed) = webkit_clause(spec, options)? {
            lines.push(format!("background: {};", prefixed));
        }
    }

    lines.push(format!(
        "background: {};",
        axis_clause(spec, options, OutputFormat::Css)?
    ));

    Ok(options.finish(lines.join("\n")))
}

/// The legacy `-webkit-` form. Its angles run counter-clockwise from "to right", so the
/// standard angle is mirrored. Conic gradients never had a prefixed form.
fn webkit_clause(spec: &GradientSpec, options: &CodeOptions) -> Result<Option<String>> {
    if spec.kind == GradientKind::Conic {
        return Ok(None);
    }

    let legacy = GradientSpec {
        angle: (90 - spec.angle).rem_euclid(360),
        ..spec.clone()
    };

    Ok(Some(format!(
        "-webkit-{}",
        axis_clause(&legacy, options, OutputFormat::Css)?
    )))
}

/// A Tailwind utility snippet.
///
/// Tailwind's gradient utilities only take a start and an end color here, so every stop
/// between the first and the last is dropped.
pub fn tailwind(spec: &GradientSpec, _options: &CodeOptions) -> Result<String> {
    let [first, .., last] = spec.stops.as_slice() else {
        return Err(Error::TooFewStops(spec.stops.len()));
    };

    let arbitrary = |color: &str| color.replace(' ', "_");

    Ok(format!(
        r#"<div class="bg-gradient-to-r from-[{}] to-[{}]"></div>"#,
        arbitrary(&first.color),
        arbitrary(&last.color)
    ))
}

pub fn scss(spec: &GradientSpec, options: &CodeOptions) -> Result<String> {
    let gradient = axis_clause(spec, options, OutputFormat::Scss)?;
    let variable = options.variable_name_or("gradient");

    let code = formatdoc!(
        "
        ${variable}: {gradient};

        .{class} {{
          background: ${variable};
        }}",
        variable = variable,
        gradient = gradient,
        class = options.class_name_or("element"),
    );

    Ok(options.finish(code))
}

/// The indented Sass syntax. Indentation is significant, so `minified` is ignored.
pub fn sass(spec: &GradientSpec, options: &CodeOptions) -> Result<String> {
    let gradient = axis_clause(spec, options, OutputFormat::Sass)?;
    let variable = options.variable_name_or("gradient");

    Ok(formatdoc!(
        "
        ${variable}: {gradient}

        .{class}
          background: ${variable}",
        variable = variable,
        gradient = gradient,
        class = options.class_name_or("element"),
    ))
}

pub fn less(spec: &GradientSpec, options: &CodeOptions) -> Result<String> {
    let gradient = axis_clause(spec, options, OutputFormat::Less)?;
    let variable = options.variable_name_or("gradient");

    let code = formatdoc!(
        "
        @{variable}: {gradient};

        .{class} {{
          background: @{variable};
        }}",
        variable = variable,
        gradient = gradient,
        class = options.class_name_or("element"),
    );

    Ok(options.finish(code))
}

pub fn css_vars(spec: &GradientSpec, options: &CodeOptions) -> Result<String> {
    let gradient = axis_clause(spec, options, OutputFormat::CssVars)?;
    let variable = options.variable_name_or("gradient-primary");

    let code = formatdoc!(
        "
        :root {{
          --{variable}: {gradient};
        }}

        .{class} {{
          background: var(--{variable});
        }}",
        variable = variable,
        gradient = gradient,
        class = options.class_name_or("element"),
    );

    Ok(options.finish(code))
}
