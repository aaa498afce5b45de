//! Inline-style snippets for component frameworks.

use crate::code_options::CodeOptions;
use crate::codegen::axis_clause;
use crate::gradient::GradientSpec;
use crate::output_format::OutputFormat;
use crate::Result;

pub fn react(spec: &GradientSpec, options: &CodeOptions) -> Result<String> {
    let gradient = axis_clause(spec, options, OutputFormat::React)?;

    Ok(formatdoc!(
        "
        const gradientStyle = {{
          background: '{gradient}'
        }};

        <div style={{gradientStyle}}>
          {{/* Your content */}}
        </div>",
        gradient = gradient,
    ))
}

pub fn vue(spec: &GradientSpec, options: &CodeOptions) -> Result<String> {
    let gradient = axis_clause(spec, options, OutputFormat::Vue)?;

    Ok(formatdoc!(
        "
        <template>
          <div :style=\"gradientStyle\">
            <!-- Your content -->
          </div>
        </template>

        <script setup>
        const gradientStyle = {{
          background: '{gradient}'
        }};
        </script>",
        gradient = gradient,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::generate;
    use crate::gradient::{ColorStop, GradientKind};
    use pretty_assertions::assert_eq;

    fn conic() -> GradientSpec {
        GradientSpec::new(
            GradientKind::Conic,
            30,
            vec![
                ColorStop::new("#2193b0", 0.),
                ColorStop::new("#6dd5ed", 100.),
            ],
        )
        .unwrap()
    }

    #[test]
    fn react_wraps_an_inline_style_object() {
        assert_eq!(
            generate(OutputFormat::React, &conic()).unwrap(),
            indoc! {"
                const gradientStyle = {
                  background: 'conic-gradient(from 30deg, #2193b0 0%, #6dd5ed 100%)'
                };

                <div style={gradientStyle}>
                  {/* Your content */}
                </div>"}
        );
    }

    #[test]
    fn vue_binds_the_style_in_a_template() {
        let output = generate(OutputFormat::Vue, &conic()).unwrap();

        assert!(output.starts_with("<template>\n  <div :style=\"gradientStyle\">"));
        assert!(output.contains(
            "  background: 'conic-gradient(from 30deg, #2193b0 0%, #6dd5ed 100%)'\n"
        ));
        assert!(output.ends_with("</script>"));
    }
}
