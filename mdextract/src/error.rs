use std::{io, path::PathBuf};

use thiserror::Error;

/// Top-level error type for the mdextract crate.
#[derive(Debug, Error)]
pub enum MdextractError {
  #[error("File {} could not be found.", .0.display())]
  NotFound(PathBuf),

  #[error("Failed to read {}: {source}", .path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),
}

impl From<std::num::ParseIntError> for MdextractError {
  fn from(e: std::num::ParseIntError) -> Self {
    Self::Config(e.to_string())
  }
}
