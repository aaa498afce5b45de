use crate::Result;
use color_utils::{check_contrast, hex_to_rgb};
use owo_colors::{OwoColorize as _, Stream};

pub struct ContrastArgs<'a, W: std::io::Write> {
    pub foreground: &'a str,
    pub background: &'a str,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ContrastArgs<W>) -> Result<()> {
    for color in [args.foreground, args.background] {
        if hex_to_rgb(color).is_none() {
            return Err(crate::Error::General(format!(
                "`{}` is not a #RRGGBB color",
                color
            )));
        }
    }

    let result = check_contrast(args.foreground, args.background);

    writeln!(args.stdout, "Contrast ratio: {:.2}:1", result.ratio)?;

    for (label, passes) in [
        ("AA", result.meets_aa),
        ("AAA", result.meets_aaa),
        ("AA large", result.meets_aa_large),
        ("AAA large", result.meets_aaa_large),
    ] {
        let verdict = if passes {
            format!("{}", "pass".if_supports_color(Stream::Stdout, |s| s.green()))
        } else {
            format!("{}", "fail".if_supports_color(Stream::Stdout, |s| s.red()))
        };

        writeln!(args.stdout, "  {:<10} {}", label, verdict)?;
    }

    Ok(())
}
