//! Error types for the ADR renderer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A value the template interpolates was not supplied.
  #[error("missing template field `{0}`")]
  MissingField(&'static str),

  /// The field mapping could not be read as an ADR document.
  #[error("invalid ADR fields: {0}")]
  Fields(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
