use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid base64 image data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NotebookError>;
