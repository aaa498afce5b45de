mod common;

use common::assorted_specs;
use libgradient::{generate, Error, GradientKind, GradientSpec, OutputFormat};

#[test]
/// Every format either produces code or refuses with a typed error, never panics.
fn every_format_handles_every_kind() {
    for spec in assorted_specs() {
        for format in OutputFormat::ALL {
            match generate(format, &spec) {
                Ok(code) => assert!(!code.trim().is_empty(), "{} produced nothing", format),
                Err(Error::UnsupportedKind { kind, format: f }) => {
                    assert_eq!(kind, GradientKind::Conic);
                    assert_eq!(f, OutputFormat::Svg);
                }
                Err(Error::UnsupportedColor { format: f, .. }) => {
                    assert!(
                        matches!(
                            f,
                            OutputFormat::Swift | OutputFormat::Kotlin | OutputFormat::Flutter
                        ),
                        "{} refused a color",
                        f
                    );
                }
                Err(other) => panic!("{} failed: {}", format, other),
            }
        }
    }
}

#[test]
fn json_output_reads_back_as_the_same_spec() {
    for spec in assorted_specs() {
        let json = generate(OutputFormat::Json, &spec).unwrap();
        let read: GradientSpec = libgradient::serde_json::from_str(&json).unwrap();

        assert_eq!(read, spec);
    }
}

#[test]
/// Stylesheet and component formats embed the same gradient function the css output uses.
fn css_family_formats_share_the_gradient_function() {
    for spec in assorted_specs() {
        let css = generate(OutputFormat::Css, &spec).unwrap();
        let function = css
            .strip_prefix("background: ")
            .and_then(|rest| rest.strip_suffix(';'))
            .unwrap();

        for format in [
            OutputFormat::Scss,
            OutputFormat::Sass,
            OutputFormat::Less,
            OutputFormat::CssVars,
            OutputFormat::React,
            OutputFormat::Vue,
        ] {
            let code = generate(format, &spec).unwrap();
            assert!(code.contains(function), "{} lost `{}`:\n{}", format, function, code);
        }
    }
}
