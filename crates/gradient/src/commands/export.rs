use crate::project::read_settings;
use crate::Result;
use libgradient::{generate_with, OutputFormat};
use owo_colors::{OwoColorize as _, Stream};
use rayon::prelude::*;

use std::path::{Path, PathBuf};

pub struct ExportArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub out_dir: PathBuf,
    pub stdout: &'a mut W,
}

/// Writes the configured gradient in every format to `out_dir/gradient.<ext>`.
///
/// A format that can't express the gradient is reported and skipped; the export only fails
/// when nothing could be written.
pub fn run<W: std::io::Write>(args: ExportArgs<W>) -> Result<()> {
    let settings = read_settings(args.working_dir)?;

    std::fs::create_dir_all(&args.out_dir)?;

    let start = std::time::Instant::now();

    let results: Vec<(OutputFormat, Result<PathBuf>)> = OutputFormat::ALL
        .par_iter()
        .map(|format| {
            let result = generate_with(*format, &settings.gradient, &settings.options)
                .map_err(crate::Error::from)
                .and_then(|code| {
                    let path = args
                        .out_dir
                        .join(format!("gradient.{}", format.extension()));
                    std::fs::write(&path, code + "\n")?;
                    Ok(path)
                });

            (*format, result)
        })
        .collect();

    let mut written = 0;
    for (format, result) in &results {
        match result {
            Ok(path) => {
                written += 1;
                writeln!(
                    args.stdout,
                    "{} {:<9} {}",
                    "✓".if_supports_color(Stream::Stdout, |s| s.green()),
                    format.as_str(),
                    path.display()
                )?;
            }
            Err(e) => {
                writeln!(
                    args.stdout,
                    "{} {:<9} {}",
                    "✗".if_supports_color(Stream::Stdout, |s| s.red()),
                    format.as_str(),
                    e
                )?;
            }
        }
    }

    if written == 0 {
        return Err(crate::Error::General(
            "None of the formats could be exported".to_string(),
        ));
    }

    writeln!(
        args.stdout,
        "Exported {} of {} formats to {} in {:?}",
        written,
        results.len(),
        args.out_dir.display(),
        start.elapsed()
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use libgradient::SETTINGS_FILE_NAME;
    use std::fs;
    use temp_dir::TempDir;

    #[test]
    fn writes_every_format() {
        let working_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();

        let result = run(ExportArgs {
            working_dir: working_dir.path(),
            out_dir: out_dir.path().to_path_buf(),
            stdout: &mut std::io::sink(),
        });

        if let Err(err) = result {
            panic!("{}", err);
        }

        for format in OutputFormat::ALL {
            let path = out_dir
                .path()
                .join(format!("gradient.{}", format.extension()));
            assert!(path.exists(), "{} not written", path.display());
        }

        assert_eq!(
            fs::read_to_string(out_dir.path().join("gradient.css")).unwrap(),
            "background: linear-gradient(90deg, #FF416C 0%, #FF4B2B 100%);\n"
        );
    }

    #[test]
    fn reports_formats_that_cannot_express_the_gradient() {
        let working_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        fs::write(
            working_dir.path().join(SETTINGS_FILE_NAME),
            indoc! {"
                gradient:
                  type: conic
                  stops:
                    - {color: red, position: 0}
                    - {color: blue, position: 100}
            "},
        )
        .unwrap();

        let result = run(ExportArgs {
            working_dir: working_dir.path(),
            out_dir: out_dir.path().to_path_buf(),
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok(), "{:?}", result);
        assert!(!out_dir.path().join("gradient.svg").exists());
        assert!(out_dir.path().join("gradient.dart").exists());

        let output = String::from_utf8(fake_stdout.into_inner()).unwrap();

        assert!(
            output.contains("svg output does not support conic gradients"),
            "{}",
            output
        );
        assert!(output.contains("Exported 12 of 13 formats"), "{}", output);
    }

    #[test]
    fn creates_the_output_directory() {
        let working_dir = TempDir::new().unwrap();
        let out_dir = working_dir.path().join("dist/gradients");

        run(ExportArgs {
            working_dir: working_dir.path(),
            out_dir: out_dir.clone(),
            stdout: &mut std::io::sink(),
        })
        .unwrap();

        assert!(out_dir.join("gradient.json").exists());
    }
}
