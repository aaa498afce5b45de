mod common;

use common::{assorted_specs, normalized_stops, spec, stops};
use libgradient::{
    check_contrast, generate, generate_with, parse, CodeOptions, GradientKind, GradientSpec,
    OutputFormat,
};
use pretty_assertions::assert_eq;

#[test]
/// The css output names exactly one gradient function and carries every stop.
fn css_names_its_kind_and_every_stop() {
    for spec in assorted_specs() {
        let css = generate(OutputFormat::Css, &spec).unwrap();

        for kind in GradientKind::ALL {
            let needle = format!("{}(", kind.css_function());
            let expected = usize::from(kind == spec.kind);
            assert_eq!(css.matches(&needle).count(), expected, "{}", css);
        }

        let percents_in_colors: usize = spec
            .stops
            .iter()
            .map(|stop| stop.color.matches('%').count())
            .sum();
        assert_eq!(
            css.matches('%').count(),
            spec.stops.len() + percents_in_colors,
            "{}",
            css
        );
    }
}

#[test]
fn css_parses_back_to_the_same_gradient() {
    for spec in assorted_specs() {
        let css = generate(OutputFormat::Css, &spec).unwrap();
        let parsed = parse(&css).unwrap_or_else(|| panic!("could not parse {}", css));

        assert_eq!(parsed.kind, spec.kind, "{}", css);
        assert_eq!(parsed.angle, spec.angle, "{}", css);
        assert_eq!(normalized_stops(&parsed), normalized_stops(&spec), "{}", css);
    }
}

#[test]
fn repeating_gradients_parse_back_as_repeating() {
    for spec in assorted_specs() {
        let spec = spec.with_repeating(true);
        let css = generate(OutputFormat::Css, &spec).unwrap();

        assert_eq!(parse(&css).map(|p| p.repeating), Some(true), "{}", css);
    }
}

#[test]
fn minified_css_still_parses() {
    let options = CodeOptions {
        minified: true,
        ..CodeOptions::default()
    };

    for spec in assorted_specs() {
        let css = generate_with(OutputFormat::Css, &spec, &options).unwrap();
        let parsed = parse(&css).unwrap_or_else(|| panic!("could not parse {}", css));

        assert_eq!(normalized_stops(&parsed), normalized_stops(&spec), "{}", css);
    }
}

#[test]
fn unrecognized_text_is_not_a_gradient() {
    assert_eq!(parse("not a gradient"), None);
    assert_eq!(parse(""), None);
}

#[test]
fn a_single_stop_is_not_a_gradient() {
    assert_eq!(parse("linear-gradient(90deg, #000000 0%)"), None);
}

#[test]
fn two_stop_sunset_css() {
    let spec = spec(
        GradientKind::Linear,
        90,
        &[("#FF416C", 0.), ("#FF4B2B", 100.)],
    );

    assert_eq!(
        generate(OutputFormat::Css, &spec).unwrap(),
        "background: linear-gradient(90deg, #FF416C 0%, #FF4B2B 100%);"
    );
}

#[test]
fn direction_keyword_parses_to_an_angle() {
    assert_eq!(
        parse("linear-gradient(to right, #000000 0%, #FFFFFF 100%)"),
        Some(GradientSpec {
            kind: GradientKind::Linear,
            angle: 90,
            stops: stops(&[("#000000", 0.), ("#FFFFFF", 100.)]),
            repeating: false,
        })
    );
}

#[test]
fn black_on_white_has_maximum_contrast() {
    let result = check_contrast("#000000", "#FFFFFF");

    assert!((result.ratio - 21.).abs() < 1e-9, "{}", result.ratio);
    assert!(result.meets_aa);
    assert!(result.meets_aaa);
    assert!(result.meets_aa_large);
    assert!(result.meets_aaa_large);
}

#[test]
fn neighbouring_greys_fail_every_level() {
    let result = check_contrast("#777777", "#888888");

    assert!(result.ratio < 1.5, "{}", result.ratio);
    assert!(!result.meets_aa);
    assert!(!result.meets_aaa);
    assert!(!result.meets_aa_large);
    assert!(!result.meets_aaa_large);
}

#[test]
/// Tailwind only has room for the first and last colors.
fn tailwind_drops_middle_stops() {
    let spec = spec(
        GradientKind::Linear,
        90,
        &[("#FF416C", 0.), ("#00FF00", 50.), ("#FF4B2B", 100.)],
    );

    let output = generate(OutputFormat::Tailwind, &spec).unwrap();

    assert!(output.contains("#FF416C"), "{}", output);
    assert!(output.contains("#FF4B2B"), "{}", output);
    assert!(!output.contains("#00FF00"), "{}", output);
}

#[test]
fn generating_twice_gives_identical_output() {
    for spec in assorted_specs() {
        for format in OutputFormat::ALL {
            assert_eq!(
                generate(format, &spec),
                generate(format, &spec),
                "{} {:?}",
                format,
                spec.kind
            );
        }
    }
}
