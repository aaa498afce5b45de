use crate::Result;
use libgradient::{generate, presets, OutputFormat};
use owo_colors::{OwoColorize as _, Stream};

pub struct PresetsArgs<'a, W: std::io::Write> {
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: PresetsArgs<W>) -> Result<()> {
    for preset in presets() {
        let css = generate(OutputFormat::Css, &preset.spec)?;

        writeln!(
            args.stdout,
            "{}\n  {}",
            preset.name.if_supports_color(Stream::Stdout, |s| s.bold()),
            css
        )?;
    }

    Ok(())
}
