//! Error types for Stitch

use thiserror::Error;

/// The main error type for Stitch operations
#[derive(Debug, Error)]
pub enum StitchError {
    #[error("Imported file not found: {0}")]
    ImportNotFound(String),

    #[error("Module directory not found: {0}")]
    ModuleDirNotFound(String),

    #[error("Shader not found: {0}")]
    ShaderNotFound(String),

    #[error("Shader directory not found: {0}")]
    ShaderDirNotFound(String),

    #[error("Invalid shader stage: {0} (expected vertex or fragment)")]
    InvalidStage(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Stitch operations
pub type Result<T> = std::result::Result<T, StitchError>;

impl From<toml::de::Error> for StitchError {
    fn from(err: toml::de::Error) -> Self {
        StitchError::TomlParseError(err.to_string())
    }
}
