use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KrishiError>;

#[derive(Debug, Error)]
pub enum KrishiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("not an image file: {}", .0.display())]
    UnsupportedImage(PathBuf),

    #[error("no image selected")]
    NoImageSelected,

    #[error("analysis already in progress")]
    AnalysisInProgress,

    #[error("assistant is still replying")]
    ReplyPending,
}
