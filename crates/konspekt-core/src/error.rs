use std::path::PathBuf;
use thiserror::Error;

use crate::client::ModelError;

#[derive(Error, Debug)]
pub enum KonspektError {
    #[error("Transcript at {path} is empty")]
    EmptyTranscript { path: PathBuf },

    #[error("Model call failed: {0}")]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KonspektError>;
