use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Cell ({row}, {col}) is outside a {height}x{width} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Pattern parse error: {0}")]
    PatternParse(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
