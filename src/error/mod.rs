use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueConvertoError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Could not find any cue sheet in the specified path: {0}")]
    NoCueFileFound(PathBuf),

    #[error("{0} cue sheet(s) could not be parsed")]
    InvalidCueSheets(usize),
}

pub type CueConvertoResult<T> = result::Result<T, CueConvertoError>;
