//! Error types for `edl-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// A field a decision cannot exist without was not supplied.
  #[error("missing required field `{0}`")]
  MissingField(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
