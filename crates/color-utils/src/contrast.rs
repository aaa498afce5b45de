//! WCAG 2.x contrast checks between two hex colors.

use serde::Serialize;

use crate::hex_to_rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagLevel {
    AA,
    AAA,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Normal,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    pub meets_aa_large: bool,
    pub meets_aaa_large: bool,
}

/// Relative luminance of an 8-bit sRGB color, per the WCAG definition.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = channel as f64 / 255.;

        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Contrast ratio between two `#RRGGBB` colors, in `[1, 21]`.
///
/// If either color is not a hex triplet the ratio is 1, i.e. "no contrast".
pub fn contrast_ratio(first: &str, second: &str) -> f64 {
    let (Some(a), Some(b)) = (hex_to_rgb(first), hex_to_rgb(second)) else {
        return 1.;
    };

    let l1 = relative_luminance(a.r, a.g, a.b);
    let l2 = relative_luminance(b.r, b.g, b.b);

    let lighter = l1.max(l2);
    let darker = l1.min(l2);

    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_wcag(ratio: f64, level: WcagLevel, size: TextSize) -> bool {
    let threshold = match (level, size) {
        (WcagLevel::AA, TextSize::Normal) => 4.5,
        (WcagLevel::AA, TextSize::Large) => 3.,
        (WcagLevel::AAA, TextSize::Normal) => 7.,
        (WcagLevel::AAA, TextSize::Large) => 4.5,
    };

    ratio >= threshold
}

pub fn check_contrast(foreground: &str, background: &str) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);

    ContrastResult {
        ratio,
        meets_aa: meets_wcag(ratio, WcagLevel::AA, TextSize::Normal),
        meets_aaa: meets_wcag(ratio, WcagLevel::AAA, TextSize::Normal),
        meets_aa_large: meets_wcag(ratio, WcagLevel::AA, TextSize::Large),
        meets_aaa_large: meets_wcag(ratio, WcagLevel::AAA, TextSize::Large),
    }
}
