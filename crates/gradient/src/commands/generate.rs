use crate::project::read_settings;
use crate::Result;
use libgradient::{generate_with, parse, preset, OutputFormat};

use std::path::Path;

pub struct GenerateArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub format: Option<OutputFormat>,
    /// Start from a named preset instead of the gradient in the settings file.
    pub preset: Option<&'a str>,
    /// Start from an existing CSS gradient instead of the settings file.
    pub css: Option<&'a str>,
    pub rgb: bool,
    pub speed: Option<f64>,
    pub minify: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: GenerateArgs<W>) -> Result<()> {
    let settings = read_settings(args.working_dir)?;

    let gradient = match (args.css, args.preset) {
        (Some(css), _) => parse(css).ok_or_else(|| {
            crate::Error::General(format!("Could not read a gradient from `{}`", css))
        })?,
        (None, Some(name)) => preset(name)
            .ok_or_else(|| crate::Error::General(format!("Unknown preset `{}`", name)))?,
        (None, None) => settings.gradient,
    };

    let mut options = settings.options;
    options.rgb_mode |= args.rgb;
    options.minified |= args.minify;
    if let Some(speed) = args.speed {
        options.rgb_speed = speed;
    }

    let format = args.format.unwrap_or(settings.format);
    let code = generate_with(format, &gradient, &options)?;

    writeln!(args.stdout, "{}", code)?;

    Ok(())
}
