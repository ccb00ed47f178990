//! Places the serialized config at `<destination>/server.json`.

use crate::error::{CbhError, Result};
use crate::prompt::Confirm;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Fixed name of the generated file.
pub const SERVER_JSON_FILE: &str = "server.json";

/// What happened to the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Absolute path of the file that was written.
    Written(PathBuf),
    /// The file already existed and the user chose to keep it.
    Cancelled,
}

/// Writes `server.json` into a destination directory.
#[derive(Debug, Clone)]
pub struct ConfigWriter {
    destination: PathBuf,
    overwrite: bool,
}

impl ConfigWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            overwrite: false,
        }
    }

    /// Replace an existing file without asking.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Write `contents`, asking `confirm` first if a file is already there
    /// and overwriting was not requested.
    pub fn write(&self, contents: &[u8], confirm: &mut dyn Confirm) -> Result<WriteOutcome> {
        let dir = self.resolve_destination()?;
        let target = dir.join(SERVER_JSON_FILE);

        match fs::metadata(&target) {
            Ok(_) if !self.overwrite => {
                let question = format!(
                    "A server.json file already exists at {}, do you want to overwrite it",
                    dir.display()
                );
                if !confirm.confirm(&question)? {
                    tracing::info!(path = %target.display(), "Keeping existing server.json");
                    return Ok(WriteOutcome::Cancelled);
                }
            }
            Ok(_) => {
                tracing::debug!(path = %target.display(), "Overwriting without confirmation");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(CbhError::Write {
                    path: target,
                    source,
                })
            }
        }

        write_file(&target, contents)?;
        tracing::info!(path = %target.display(), bytes = contents.len(), "Wrote server.json");

        Ok(WriteOutcome::Written(target))
    }

    /// Make the destination absolute and check it is an existing directory.
    ///
    /// An empty destination means the working directory.
    fn resolve_destination(&self) -> Result<PathBuf> {
        let requested = if self.destination.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.destination.as_path()
        };
        let dir = std::path::absolute(requested).map_err(|source| {
            CbhError::PathResolution {
                path: self.destination.clone(),
                source,
            }
        })?;
        tracing::debug!(
            requested = %requested.display(),
            resolved = %dir.display(),
            "Resolved destination"
        );

        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => Ok(dir),
            Ok(_) => Err(CbhError::DirectoryNotFound(dir)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CbhError::DirectoryNotFound(dir)),
            Err(source) => Err(CbhError::Write { path: dir, source }),
        }
    }
}

// The handle is dropped, and the file closed, on every return path.
fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let to_write_error = |source| CbhError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_write_error)?;
    file.write_all(contents).map_err(to_write_error)?;
    file.flush().map_err(to_write_error)?;
    Ok(())
}
