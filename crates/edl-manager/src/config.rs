//! Manager configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Where the manager keeps its store and writes its documents.
///
/// Deserialised by the CLI from layered config sources; every field has a
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
  /// SQLite file holding the decisions.
  pub store_path: PathBuf,
  /// Directory receiving one Markdown ADR per decision.
  pub adr_dir:    PathBuf,
}

impl Default for ManagerConfig {
  fn default() -> Self {
    Self {
      store_path: PathBuf::from("edl.db"),
      adr_dir:    PathBuf::from("docs/ADR"),
    }
  }
}
