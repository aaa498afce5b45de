use crate::Result;
use libgradient::{parse, serde_json, Error as GradientError};

pub struct ParseArgs<'a, W: std::io::Write> {
    pub text: &'a str,
    /// Print YAML, ready to paste under `gradient:` in the settings file.
    pub yaml: bool,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ParseArgs<W>) -> Result<()> {
    let spec = parse(args.text).ok_or_else(|| {
        crate::Error::General(format!("Not a recognizable gradient: `{}`", args.text))
    })?;

    let output = if args.yaml {
        serde_yaml::to_string(&spec).map_err(|e| GradientError::Serialization(e.to_string()))?
    } else {
        serde_json::to_string_pretty(&spec)
            .map_err(|e| GradientError::Serialization(e.to_string()))?
    };

    writeln!(args.stdout, "{}", output.trim_end())?;

    Ok(())
}
