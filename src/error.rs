use thiserror::Error;

/// Failures of the environment around a conversion. Item-level problems
/// (short rows, unsupported types, malformed values) are never reported
/// here; they are [`crate::model::Skip`] values.
#[derive(Debug, Error)]
pub enum MakerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("spreadsheet error: {0}")]
    Sheet(String),

    #[error("worksheet '{0}' not found")]
    MissingWorksheet(String),

    #[error("unsupported: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, MakerError>;
