// Error types shared by the library services.
// The scorer itself is total and never returns these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file_name} is not valid UTF-8 text: {source}")]
    Decode {
        file_name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("unsupported file type: {0} (only .txt is accepted)")]
    UnsupportedFile(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("analysis cancelled")]
    Cancelled,
}

pub type AppResult<T> = Result<T, AppError>;
