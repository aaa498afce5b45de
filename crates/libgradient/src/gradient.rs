//! The in-memory gradient model every generator and the parser work with.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// Colors change along a straight axis set by the angle.
    #[default]
    Linear,
    /// Colors radiate out from the center.
    Radial,
    /// Colors sweep around the center, starting at the angle.
    Conic,
}

impl GradientKind {
    pub const ALL: [GradientKind; 3] = [
        GradientKind::Linear,
        GradientKind::Radial,
        GradientKind::Conic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }

    /// The CSS function name, e.g. `linear-gradient`.
    pub fn css_function(&self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
            GradientKind::Conic => "conic-gradient",
        }
    }
}

impl Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GradientKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

fn full_opacity() -> f64 {
    100.
}

/// A color anchored at a percentage along the gradient axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Any CSS color token, kept as written.
    pub color: String,
    /// Percentage along the axis, nominally `[0, 100]`.
    pub position: f64,
    /// Stop alpha as a percentage, nominally `[0, 100]`.
    #[serde(default = "full_opacity")]
    pub opacity: f64,
}

impl ColorStop {
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        ColorStop {
            color: color.into(),
            position,
            opacity: full_opacity(),
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// A complete gradient description.
///
/// Out-of-range angles, positions and opacities are carried as-is; keeping them in range
/// is up to whoever builds the spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    #[serde(rename = "type", default)]
    pub kind: GradientKind,
    #[serde(default = "default_angle")]
    pub angle: i32,
    pub stops: Vec<ColorStop>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub repeating: bool,
}

fn default_angle() -> i32 {
    90
}

impl Default for GradientSpec {
    fn default() -> Self {
        crate::presets::sunset()
    }
}

impl GradientSpec {
    pub const MIN_STOPS: usize = 2;

    pub fn new(kind: GradientKind, angle: i32, stops: Vec<ColorStop>) -> Result<Self> {
        let spec = GradientSpec {
            kind,
            angle,
            stops,
            repeating: false,
        };
        spec.validate()?;

        Ok(spec)
    }

    pub fn linear(angle: i32, stops: Vec<ColorStop>) -> Result<Self> {
        Self::new(GradientKind::Linear, angle, stops)
    }

    pub fn radial(stops: Vec<ColorStop>) -> Result<Self> {
        Self::new(GradientKind::Radial, 90, stops)
    }

    pub fn conic(angle: i32, stops: Vec<ColorStop>) -> Result<Self> {
        Self::new(GradientKind::Conic, angle, stops)
    }

    pub fn with_repeating(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }

    /// Checks the one structural invariant: at least two stops.
    pub fn validate(&self) -> Result<()> {
        if self.stops.len() < Self::MIN_STOPS {
            return Err(Error::TooFewStops(self.stops.len()));
        }

        Ok(())
    }

    /// Sorts stops by position. Stops sharing a position keep their relative order.
    pub fn sort_stops(&mut self) {
        self.stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    pub fn first_stop(&self) -> Option<&ColorStop> {
        self.stops.first()
    }

    pub fn last_stop(&self) -> Option<&ColorStop> {
        self.stops.last()
    }
}
