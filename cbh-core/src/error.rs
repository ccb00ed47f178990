//! Error taxonomy for generating and writing `server.json`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used for every file-system failure.
pub const EXIT_WRITE_FAILURE: u8 = 3;

/// Exit code used for faults that should never happen in practice.
pub const EXIT_FAULT: u8 = 1;

#[derive(Debug, Error)]
pub enum CbhError {
    #[error("could not resolve destination '{}': {source}", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("specified directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("confirmation prompt failed: {0}")]
    PromptRead(#[source] io::Error),
}

impl CbhError {
    /// Faults are errors the user cannot act on (broken stdin, a JSON bug).
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Serialization(_) | Self::PromptRead(_))
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_fault() {
            EXIT_FAULT
        } else {
            EXIT_WRITE_FAILURE
        }
    }
}

pub type Result<T> = std::result::Result<T, CbhError>;
