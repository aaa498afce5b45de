//! Color token helpers shared by the gradient code generators.
//!
//! Gradient stops carry their color as free-form CSS text (`#FF416C`, `tomato`,
//! `rgb(255, 65, 108)`, ...). Most generators copy that text verbatim, but the mobile
//! targets and the color-format options need the actual channels, which is what this
//! crate provides. It also holds the WCAG contrast utility.

use palette::{FromColor, Hsl, Srgb};
use thiserror::Error;

pub mod contrast;

pub use contrast::{
    check_contrast, contrast_ratio, meets_wcag, relative_luminance, ContrastResult, TextSize,
    WcagLevel,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid color `{0}` found")]
    InvalidColor(String),
}

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An 8-bit sRGB color with a straight alpha channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// Parses a strict `#RRGGBB` hex triplet. The leading `#` is optional.
///
/// Shorthand (`#FFF`) and alpha (`#RRGGBBAA`) forms are rejected on purpose: this is the
/// parser the contrast checks rely on, and they treat anything else as unparseable.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();

    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Decomposes any CSS color token into its channels.
///
/// Accepts every notation `csscolorparser` understands: hex in all its lengths, named
/// colors, and the `rgb()`, `rgba()`, `hsl()`, `hsla()` functions.
pub fn decompose(token: &str) -> Result<Rgba> {
    let c = csscolorparser::parse(token.trim())
        .map_err(|_| Error::InvalidColor(token.to_string()))?;

    let to_u8 = |v: f64| (v.clamp(0., 1.) * 255.).round() as u8;

    Ok(Rgba {
        r: to_u8(c.r),
        g: to_u8(c.g),
        b: to_u8(c.b),
        a: c.a.clamp(0., 1.),
    })
}

impl Rgb {
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Rgba {
    pub fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Scales the alpha channel, e.g. by a stop opacity expressed as a fraction.
    pub fn fade(self, factor: f64) -> Rgba {
        Rgba {
            a: (self.a * factor).clamp(0., 1.),
            ..self
        }
    }

    pub fn is_opaque(self) -> bool {
        self.a >= 1.
    }

    /// Upper-case `#RRGGBB`, or `#RRGGBBAA` when the color is translucent.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            self.rgb().to_hex()
        } else {
            format!(
                "{}{:02X}",
                self.rgb().to_hex(),
                (self.a * 255.).round() as u8
            )
        }
    }

    /// The color as six hex digits without the leading `#`.
    pub fn hex_digits(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_rgba_string(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_decimal(self.a, 2)
        )
    }

    pub fn to_hsl_string(self) -> String {
        let hsl = Hsl::from_color(Srgb::new(
            self.r as f32 / 255.,
            self.g as f32 / 255.,
            self.b as f32 / 255.,
        ));

        let hue = hsl.hue.into_positive_degrees().round() as u32 % 360;
        let saturation = (hsl.saturation * 100.).round() as u32;
        let lightness = (hsl.lightness * 100.).round() as u32;

        if self.is_opaque() {
            format!("hsl({}, {}%, {}%)", hue, saturation, lightness)
        } else {
            format!(
                "hsla({}, {}%, {}%, {})",
                hue,
                saturation,
                lightness,
                format_decimal(self.a, 2)
            )
        }
    }

    /// Channels as fractions in `[0, 1]`.
    pub fn unit_channels(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.,
            self.g as f64 / 255.,
            self.b as f64 / 255.,
        )
    }
}

/// Formats `value` with at most `decimals` fractional digits, dropping trailing zeros.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let mut out = format!("{:.*}", decimals, value);

    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }

    if out == "-0" {
        out = "0".to_string();
    }

    out
}
