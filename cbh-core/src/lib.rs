//! Core library for `cbh`, the CommandBox `server.json` helper.
//!
//! [`config::ServerConfig`] turns the user's flags into the JSON document,
//! [`writer::ConfigWriter`] places it on disk, asking through a
//! [`prompt::Confirm`] before replacing an existing file.

pub mod config;
pub mod error;
pub mod prompt;
pub mod writer;

pub use config::{ConfigOptions, ServerConfig};
pub use error::{CbhError, Result};
pub use prompt::{Confirm, LinePrompt};
pub use writer::{ConfigWriter, WriteOutcome, SERVER_JSON_FILE};
