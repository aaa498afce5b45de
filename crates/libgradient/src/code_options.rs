//! Knobs that shape generated code without changing the gradient itself.

use color_utils::{decompose, Rgba};

use crate::gradient::ColorStop;
use crate::output_format::OutputFormat;
use crate::{Error, Result};

/// How stop colors are written into stylesheet-like output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// Emit each stop color exactly as it was authored.
    #[default]
    Preserve,
    Hex,
    Rgb,
    Rgba,
    Hsl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeOptions {
    pub color_format: ColorFormat,
    pub minified: bool,
    pub include_fallback: bool,
    pub include_vendor_prefixes: bool,
    pub class_name: Option<String>,
    pub variable_name: Option<String>,
    /// Replace the selected format with a hue-rotating keyframe animation.
    pub rgb_mode: bool,
    /// Length of one full hue rotation in seconds.
    pub rgb_speed: f64,
}

impl Default for CodeOptions {
    fn default() -> Self {
        CodeOptions {
            color_format: ColorFormat::Preserve,
            minified: false,
            include_fallback: false,
            include_vendor_prefixes: false,
            class_name: None,
            variable_name: None,
            rgb_mode: false,
            rgb_speed: 3.,
        }
    }
}

impl CodeOptions {
    pub fn rgb(speed: f64) -> Self {
        CodeOptions {
            rgb_mode: true,
            rgb_speed: speed,
            ..CodeOptions::default()
        }
    }

    pub fn class_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.class_name.as_deref().unwrap_or(default)
    }

    pub fn variable_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.variable_name.as_deref().unwrap_or(default)
    }

    /// Writes a stop color in the configured notation.
    pub(crate) fn render_color(&self, stop: &ColorStop, format: OutputFormat) -> Result<String> {
        let render: fn(Rgba) -> String = match self.color_format {
            ColorFormat::Preserve => return Ok(stop.color.clone()),
            ColorFormat::Hex => Rgba::to_hex,
            ColorFormat::Rgb => Rgba::to_rgb_string,
            ColorFormat::Rgba => Rgba::to_rgba_string,
            ColorFormat::Hsl => Rgba::to_hsl_string,
        };

        let color = decompose(&stop.color).map_err(|_| Error::UnsupportedColor {
            color: stop.color.clone(),
            format,
        })?;

        Ok(render(color.fade(stop.opacity / 100.)))
    }

    /// Collapses multi-line output onto a single line when `minified` is set.
    pub(crate) fn finish(&self, code: String) -> String {
        if !self.minified {
            return code;
        }

        let joined = code
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<String>();

        collapse_separators(&joined)
            .replace(": ", ":")
            .replace(" {", "{")
    }
}

/// Drops the space after commas, except inside function calls other than gradients, so
/// stop separators shrink while color tokens such as `rgba(0, 0, 0, 0.5)` stay as authored.
fn collapse_separators(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    // One entry per open parenthesis: whether it belongs to a gradient function.
    let mut calls: Vec<bool> = vec![];
    let mut chars = code.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '(' => {
                let name_start = out
                    .rfind(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                    .map(|i| i + 1)
                    .unwrap_or(0);
                calls.push(out[name_start..].ends_with("gradient"));
            }
            ')' => {
                calls.pop();
            }
            ',' if calls.last().copied().unwrap_or(true) => {
                out.push(c);
                while chars.peek() == Some(&' ') {
                    chars.next();
                }
                continue;
            }
            _ => {}
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preserve_keeps_the_authored_token() {
        let options = CodeOptions::default();
        let stop = ColorStop::new("rebeccapurple", 0.);

        assert_eq!(
            options.render_color(&stop, OutputFormat::Css).unwrap(),
            "rebeccapurple"
        );
    }

    #[test]
    fn rgba_folds_in_stop_opacity() {
        let options = CodeOptions {
            color_format: ColorFormat::Rgba,
            ..CodeOptions::default()
        };
        let stop = ColorStop::new("#FF416C", 0.).with_opacity(50.);

        assert_eq!(
            options.render_color(&stop, OutputFormat::Css).unwrap(),
            "rgba(255, 65, 108, 0.5)"
        );
    }

    #[test]
    fn conversion_rejects_unknown_tokens() {
        let options = CodeOptions {
            color_format: ColorFormat::Hex,
            ..CodeOptions::default()
        };
        let stop = ColorStop::new("var(--brand)", 0.);

        assert_eq!(
            options.render_color(&stop, OutputFormat::Scss),
            Err(Error::UnsupportedColor {
                color: "var(--brand)".to_string(),
                format: OutputFormat::Scss,
            })
        );
    }

    #[test]
    fn minifying_collapses_whitespace() {
        let options = CodeOptions {
            minified: true,
            ..CodeOptions::default()
        };

        assert_eq!(
            options.finish(".element {\n  background: red;\n}".to_string()),
            ".element{background:red;}"
        );
    }

    #[test]
    fn minifying_keeps_color_functions_intact() {
        let options = CodeOptions {
            minified: true,
            ..CodeOptions::default()
        };

        assert_eq!(
            options.finish(
                "background: linear-gradient(315deg, #2193B0 0%, rgba(0, 0, 0, 0.5) 40%, \
                 hsl(120, 100%, 50%) 100%);"
                    .to_string()
            ),
            "background:linear-gradient(315deg,#2193B0 0%,rgba(0, 0, 0, 0.5) 40%,\
             hsl(120, 100%, 50%) 100%);"
        );
    }
}
