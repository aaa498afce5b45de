use crate::Result;
use libgradient::{Settings, SETTINGS_FILE_NAME};
use std::path::Path;

/// Reads `gradient.yaml` from the working directory. A missing file means default settings.
pub fn read_settings(working_dir: &Path) -> Result<Settings> {
    let path = working_dir.join(SETTINGS_FILE_NAME);

    if !path.exists() {
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path)?;

    Ok(Settings::parse(&contents)?)
}
