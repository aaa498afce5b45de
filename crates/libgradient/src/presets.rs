//! Named starting points.

use crate::gradient::{ColorStop, GradientKind, GradientSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub spec: GradientSpec,
}

fn two_stop(from: &str, to: &str) -> GradientSpec {
    GradientSpec {
        kind: GradientKind::Linear,
        angle: 90,
        stops: vec![ColorStop::new(from, 0.), ColorStop::new(to, 100.)],
        repeating: false,
    }
}

pub fn sunset() -> GradientSpec {
    two_stop("#FF416C", "#FF4B2B")
}

pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Sunset",
            spec: sunset(),
        },
        Preset {
            name: "Ocean",
            spec: two_stop("#2193b0", "#6dd5ed"),
        },
        Preset {
            name: "Purple Love",
            spec: two_stop("#cc2b5e", "#753a88"),
        },
        Preset {
            name: "Forest",
            spec: two_stop("#134E5E", "#71B280"),
        },
    ]
}

/// Looks a preset up by name, ignoring case and treating `-`/`_` as spaces.
pub fn preset(name: &str) -> Option<GradientSpec> {
    let wanted = name.trim().replace(['-', '_'], " ");

    presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(&wanted))
        .map(|preset| preset.spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_is_a_valid_gradient() {
        for preset in presets() {
            assert!(preset.spec.validate().is_ok(), "{}", preset.name);
        }
    }

    #[test]
    fn lookup_is_forgiving_about_spelling() {
        assert_eq!(preset("purple-love"), presets().get(2).map(|p| p.spec.clone()));
        assert_eq!(preset("OCEAN").map(|s| s.stops[0].color.clone()), Some("#2193b0".to_string()));
        assert_eq!(preset("aurora"), None);
    }

    #[test]
    fn sunset_is_the_default_gradient() {
        assert_eq!(GradientSpec::default(), sunset());
    }
}
