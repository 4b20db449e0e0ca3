//! Error type for `edl-manager`.

use std::{io, path::PathBuf};

use edl_core::Decision;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The draft is missing a required field; nothing was persisted.
  #[error("invalid decision: {0}")]
  Validation(#[from] edl_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("render error: {0}")]
  Render(#[from] edl_adr::Error),

  #[error("cannot create ADR directory {}: {source}", path.display())]
  DocumentDir {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  /// The decision was persisted but its document could not be written.
  #[error(
    "decision {} was saved, but its ADR document {} was not written: {source}",
    decision.id,
    path.display()
  )]
  DocumentNotWritten {
    decision: Box<Decision>,
    path:     PathBuf,
    #[source]
    source:   io::Error,
  },
}

impl Error {
  /// The decision that was durably saved despite this error, if any.
  pub fn saved_decision(&self) -> Option<&Decision> {
    match self {
      Self::DocumentNotWritten { decision, .. } => Some(decision),
      _ => None,
    }
  }

  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
