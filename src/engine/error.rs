use std::io;
use thiserror::Error;

/// Contract violations on the entry list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("cannot remove the only remaining entry")]
    LastEntry,

    #[error("entry index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Clipboard error: {0}")]
pub struct ClipboardError(pub String);

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum CopilotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
