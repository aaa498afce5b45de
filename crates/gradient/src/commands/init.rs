use crate::Result;
use libgradient::{preset, Settings, SETTINGS_FILE_NAME};
use owo_colors::{OwoColorize as _, Stream};

use std::path::Path;

pub struct InitArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub preset: Option<&'a str>,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: InitArgs<W>) -> Result<()> {
    let settings_path = args.working_dir.join(SETTINGS_FILE_NAME);

    if settings_path.exists() {
        return Err(crate::Error::General(format!(
            "{} already exists in {}",
            SETTINGS_FILE_NAME,
            args.working_dir.display()
        )));
    }

    let gradient = match args.preset {
        Some(name) => preset(name)
            .ok_or_else(|| crate::Error::General(format!("Unknown preset `{}`", name)))?,
        None => Default::default(),
    };

    write!(args.stdout, "Creating {}...", SETTINGS_FILE_NAME)?;
    let settings = Settings {
        gradient,
        ..Settings::default()
    };
    let contents = format!("---\n{}", settings.to_yaml()?);
    writeln!(
        args.stdout,
        "{}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green())
    )?;

    std::fs::write(settings_path, contents)?;

    writeln!(
        args.stdout,
        "Done! Run `gradient generate` to print your gradient",
    )?;

    Ok(())
}
