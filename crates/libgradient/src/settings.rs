//! The `gradient.yaml` project file.

use crate::code_options::CodeOptions;
use crate::gradient::GradientSpec;
use crate::output_format::OutputFormat;
use crate::{Error, Result};

pub const SETTINGS_FILE_NAME: &str = "gradient.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Format used by `generate` when none is given on the command line.
    pub format: OutputFormat,
    pub gradient: GradientSpec,
    pub options: CodeOptions,
}

impl Settings {
    pub fn parse(input: &str) -> Result<Settings> {
        let settings: Settings = serde_yaml::from_str(input).map_err(|e| {
            Error::InvalidSettings(format!(
                "There was an error parsing your {}:\n\n{}",
                SETTINGS_FILE_NAME, e
            ))
        })?;

        settings.gradient.validate().map_err(|e| {
            Error::InvalidSettings(format!("Invalid gradient in {}: {}", SETTINGS_FILE_NAME, e))
        })?;

        Ok(settings)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
