use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Usage: markdown2html README.md README.html")]
    Usage,

    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl ConvertError {
    /// Every error is terminal and reported with the same status.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage | Self::MissingInput(_) | Self::Io(_) => ExitCode::Failure,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
