//! Repeating and layered backgrounds built from gradient stops.
//!
//! Each function returns a single CSS background value, ready to go after `background:`.

use std::str::FromStr;

use itertools::Itertools;

use crate::gradient::ColorStop;
use crate::{Error, Result};

pub const DEFAULT_STRIPE_WIDTH: f64 = 20.;
pub const DEFAULT_CHECKERBOARD_SIZE: f64 = 20.;
pub const DEFAULT_DOT_SIZE: f64 = 10.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Stripes,
    Checkerboard,
    Dots,
    Waves,
    Mesh,
}

impl PatternKind {
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Stripes,
        PatternKind::Checkerboard,
        PatternKind::Dots,
        PatternKind::Waves,
        PatternKind::Mesh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Stripes => "stripes",
            PatternKind::Checkerboard => "checkerboard",
            PatternKind::Dots => "dots",
            PatternKind::Waves => "waves",
            PatternKind::Mesh => "mesh",
        }
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

/// One blob of a mesh gradient: a color fading out from `(x, y)` over `size` percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshLayer {
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Reads the `COLOR@X,Y,SIZE` shorthand, e.g. `#FF416C@20,30,50`.
impl FromStr for MeshLayer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMeshLayer(s.to_string());

        let (color, geometry) = s.rsplit_once('@').ok_or_else(invalid)?;
        let numbers = geometry
            .split(',')
            .map(|n| n.trim().trim_end_matches('%').parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        match numbers.as_slice() {
            [x, y, size] if !color.trim().is_empty() => Ok(MeshLayer {
                color: color.trim().to_string(),
                x: *x,
                y: *y,
                size: *size,
            }),
            _ => Err(invalid()),
        }
    }
}

/// Hard-edged stripes: every pair of neighbouring stops becomes a band of the first
/// color `width` percent wide, then the second color up to its own position.
pub fn stripes(stops: &[ColorStop], angle: i32, width: f64) -> String {
    let bands = stops
        .iter()
        .tuple_windows()
        .flat_map(|(stop, next)| {
            [
                format!("{} {}%", stop.color, stop.position),
                format!("{} {}%", stop.color, stop.position + width),
                format!("{} {}%", next.color, stop.position + width),
                format!("{} {}%", next.color, next.position),
            ]
        })
        .join(", ");

    format!("repeating-linear-gradient({}deg, {})", angle, bands)
}

/// Two offset repeating conic gradients whose overlay forms a `size`px checkerboard.
pub fn checkerboard(first: &str, second: &str, size: f64) -> String {
    let half = size / 2.;

    format!(
        "repeating-conic-gradient({a} 0% 25%, {b} 0% 50%) 0 0 / {s}px {s}px, \
         repeating-conic-gradient({b} 0% 25%, {a} 0% 50%) {h}px {h}px / {s}px {s}px",
        a = first,
        b = second,
        s = size,
        h = half,
    )
}

/// A single dot: `dot_color` up to `dot_size` percent, `background` beyond.
pub fn dots(dot_color: &str, background: &str, dot_size: f64) -> String {
    format!(
        "radial-gradient(circle at center, {} {}%, {} {}%)",
        dot_color, dot_size, background, dot_size
    )
}

/// A plain linear gradient over the stops.
pub fn waves(stops: &[ColorStop], angle: i32) -> String {
    let stops = stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color, stop.position))
        .join(", ");

    format!("linear-gradient({}deg, {})", angle, stops)
}

/// Layers composited as multiple backgrounds. Later layers paint on top.
pub fn mesh(layers: &[MeshLayer]) -> String {
    layers
        .iter()
        .map(|layer| {
            format!(
                "radial-gradient(circle at {}% {}%, {}, transparent {}%)",
                layer.x, layer.y, layer.color, layer.size
            )
        })
        .join(", ")
}
