#[macro_use]
extern crate indoc;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde;

pub use serde_json;

mod code_options;
pub mod codegen;
mod gradient;
mod output_format;
pub mod parser;
pub mod patterns;
pub mod presets;
pub mod settings;

pub use code_options::{CodeOptions, ColorFormat};
pub use codegen::{generate, generate_with};
pub use gradient::{ColorStop, GradientKind, GradientSpec};
pub use output_format::{Generator, OutputFormat};
pub use parser::parse;
pub use patterns::{MeshLayer, PatternKind};
pub use presets::{preset, presets, Preset};
pub use settings::{Settings, SETTINGS_FILE_NAME};

pub use color_utils::{check_contrast, ContrastResult};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("A gradient needs at least 2 color stops, found {0}")]
    TooFewStops(usize),
    #[error("Color `{color}` cannot be expressed in {format} output")]
    UnsupportedColor { color: String, format: OutputFormat },
    #[error("{format} output does not support {kind} gradients")]
    UnsupportedKind {
        kind: GradientKind,
        format: OutputFormat,
    },
    #[error("Unknown output format `{0}`")]
    UnknownFormat(String),
    #[error("Unknown gradient type `{0}`")]
    UnknownKind(String),
    #[error("Unknown pattern `{0}`")]
    UnknownPattern(String),
    #[error("Invalid mesh layer `{0}`, expected COLOR@X,Y,SIZE")]
    InvalidMeshLayer(String),
    #[error("{0}")]
    InvalidSettings(String),
    #[error("Could not serialize gradient: {0}")]
    Serialization(String),
}
