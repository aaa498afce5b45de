use std::fmt::{self, Display};
use std::str::FromStr;

use crate::code_options::CodeOptions;
use crate::codegen::{components, data, mobile, stylesheet};
use crate::gradient::GradientSpec;
use crate::{Error, Result};

/// A pure code generator for a single output format.
pub type Generator = fn(&GradientSpec, &CodeOptions) -> Result<String>;

/// The target syntax a gradient is exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Css,
    Tailwind,
    Scss,
    Sass,
    Less,
    CssVars,
    React,
    Vue,
    Swift,
    Kotlin,
    Flutter,
    Svg,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 13] = [
        OutputFormat::Css,
        OutputFormat::Tailwind,
        OutputFormat::Scss,
        OutputFormat::Sass,
        OutputFormat::Less,
        OutputFormat::CssVars,
        OutputFormat::React,
        OutputFormat::Vue,
        OutputFormat::Swift,
        OutputFormat::Kotlin,
        OutputFormat::Flutter,
        OutputFormat::Svg,
        OutputFormat::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Css => "css",
            OutputFormat::Tailwind => "tailwind",
            OutputFormat::Scss => "scss",
            OutputFormat::Sass => "sass",
            OutputFormat::Less => "less",
            OutputFormat::CssVars => "css-vars",
            OutputFormat::React => "react",
            OutputFormat::Vue => "vue",
            OutputFormat::Swift => "swift",
            OutputFormat::Kotlin => "kotlin",
            OutputFormat::Flutter => "flutter",
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }

    /// File extension conventionally used for a snippet in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Css => "css",
            OutputFormat::Tailwind => "html",
            OutputFormat::Scss => "scss",
            OutputFormat::Sass => "sass",
            OutputFormat::Less => "less",
            OutputFormat::CssVars => "vars.css",
            OutputFormat::React => "jsx",
            OutputFormat::Vue => "vue",
            OutputFormat::Swift => "swift",
            OutputFormat::Kotlin => "kt",
            OutputFormat::Flutter => "dart",
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }

    /// Whether the format drops information from the spec by construction.
    pub fn is_lossy(&self) -> bool {
        matches!(
            self,
            OutputFormat::Tailwind
                | OutputFormat::Swift
                | OutputFormat::Kotlin
                | OutputFormat::Flutter
        )
    }

    pub fn generator(&self) -> Generator {
        match self {
            OutputFormat::Css => stylesheet::css,
            OutputFormat::Tailwind => stylesheet::tailwind,
            OutputFormat::Scss => stylesheet::scss,
            OutputFormat::Sass => stylesheet::sass,
            OutputFormat::Less => stylesheet::less,
            OutputFormat::CssVars => stylesheet::css_vars,
            OutputFormat::React => components::react,
            OutputFormat::Vue => components::vue,
            OutputFormat::Swift => mobile::swift,
            OutputFormat::Kotlin => mobile::kotlin,
            OutputFormat::Flutter => mobile::flutter,
            OutputFormat::Svg => data::svg,
            OutputFormat::Json => data::json,
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();

        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == needle)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}
