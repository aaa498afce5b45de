use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradient::commands::contrast::{run as contrast, ContrastArgs};
use gradient::commands::export::{run as export, ExportArgs};
use gradient::commands::generate::{run as generate, GenerateArgs};
use gradient::commands::init::{run as init, InitArgs};
use gradient::commands::parse::{run as parse, ParseArgs};
use gradient::commands::pattern::{run as pattern, PatternArgs};
use gradient::commands::presets::{run as presets, PresetsArgs};
use libgradient::{MeshLayer, OutputFormat, PatternKind};

#[derive(Parser, Debug, Clone)]
#[command(about = "Gradient, a CSS gradient code generator", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Create a gradient.yaml. Defaults to the current directory.
    Init {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
        /// Start from a named preset instead of Sunset
        #[arg(long)]
        preset: Option<String>,
    },
    /// Print code for the project's gradient
    Generate {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
        /// Output format, overriding gradient.yaml
        #[arg(long, short)]
        format: Option<OutputFormat>,
        /// Use a named preset instead of the project's gradient
        #[arg(long, conflicts_with = "css")]
        preset: Option<String>,
        /// Convert an existing CSS gradient instead of the project's gradient
        #[arg(long)]
        css: Option<String>,
        /// Emit the hue-rotating animation instead of the selected format
        #[arg(long)]
        rgb: bool,
        /// Seconds per hue rotation in RGB mode
        #[arg(long)]
        speed: Option<f64>,
        #[arg(long)]
        minify: bool,
    },
    /// Read a CSS gradient and print it as JSON
    Parse {
        text: String,
        #[arg(long)]
        yaml: bool,
    },
    /// Write the project's gradient in every format
    Export {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Check two #RRGGBB colors against the WCAG contrast levels
    Contrast { foreground: String, background: String },
    /// Print a patterned background value
    Pattern {
        kind: PatternKind,
        colors: Vec<String>,
        #[arg(long, allow_negative_numbers = true)]
        angle: Option<i32>,
        /// Stripe width, checkerboard cell size or dot size
        #[arg(long)]
        size: Option<f64>,
        /// Mesh layer as COLOR@X,Y,SIZE, repeatable
        #[arg(long = "layer")]
        layers: Vec<MeshLayer>,
    },
    /// List the built-in presets
    Presets,
}

fn print_usage<W: std::io::Write>(stdout: &mut W) -> gradient::Result<()> {
    Args::command().write_help(stdout)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Init {
            working_dir,
            preset,
        }) => init(InitArgs {
            working_dir: &working_dir,
            preset: preset.as_deref(),
            stdout: &mut stdout,
        }),
        Some(Commands::Generate {
            working_dir,
            format,
            preset,
            css,
            rgb,
            speed,
            minify,
        }) => generate(GenerateArgs {
            working_dir: &working_dir,
            format,
            preset: preset.as_deref(),
            css: css.as_deref(),
            rgb,
            speed,
            minify,
            stdout: &mut stdout,
        }),
        Some(Commands::Parse { text, yaml }) => parse(ParseArgs {
            text: &text,
            yaml,
            stdout: &mut stdout,
        }),
        Some(Commands::Export {
            working_dir,
            out_dir,
        }) => export(ExportArgs {
            out_dir: out_dir.unwrap_or_else(|| working_dir.join("_gradients")),
            working_dir: &working_dir,
            stdout: &mut stdout,
        }),
        Some(Commands::Contrast {
            foreground,
            background,
        }) => contrast(ContrastArgs {
            foreground: &foreground,
            background: &background,
            stdout: &mut stdout,
        }),
        Some(Commands::Pattern {
            kind,
            colors,
            angle,
            size,
            layers,
        }) => pattern(PatternArgs {
            kind,
            colors: &colors,
            angle,
            size,
            layers: &layers,
            stdout: &mut stdout,
        }),
        Some(Commands::Presets) => presets(PresetsArgs {
            stdout: &mut stdout,
        }),
        None => match print_usage(&mut stdout) {
            Ok(()) => std::process::exit(1),
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
