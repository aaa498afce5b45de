use thiserror::Error;

pub mod commands {
    pub mod contrast;
    pub mod export;
    pub mod generate;
    pub mod init;
    pub mod parse;
    pub mod pattern;
    pub mod presets;
}

pub mod project;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Gradient(#[from] libgradient::Error),
    #[error("{0}")]
    General(String),
}
