//! Markdown ADR renderer for the decision logger.
//!
//! Turns a decision into an Architecture Decision Record document and derives
//! the document's filename. Pure and synchronous; no filesystem or database
//! dependencies, and no clock: a document without a date is an error, not
//! "today".
//!
//! # Quick start
//!
//! ```
//! use edl_adr::{AdrDocument, filename, render};
//!
//! let doc = AdrDocument::from_fields(serde_json::json!({
//!   "id": 7,
//!   "title": "Use Redis for Caching",
//!   "status": "Accepted",
//!   "date": "2024-03-01",
//!   "context": "Reads are slow.",
//!   "chosen_option": "Redis",
//!   "rationale": "it is fast",
//!   "consequences_good": "Lower latency",
//!   "consequences_bad": "Another service to run"
//! }))
//! .unwrap();
//!
//! assert!(render(&doc).unwrap().starts_with("# 7-Use Redis for Caching\n"));
//! assert_eq!(filename(doc.id, &doc.title), "0007-use-redis-for-caching.md");
//! ```

pub mod error;
mod render;
mod slug;

use edl_core::{Decision, ProsCons};
use serde::{Deserialize, Serialize};

pub use error::{Error, Result};
pub use render::render;
pub use slug::{filename, slugify};

/// Everything the ADR template interpolates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdrDocument {
  pub id:                i64,
  pub title:             String,
  pub status:            String,
  /// `YYYY-MM-DD`; must be filled (see [`AdrDocument::with_date`]) before
  /// rendering.
  #[serde(default)]
  pub date:              Option<String>,
  pub context:           String,
  #[serde(default)]
  pub drivers:           Vec<String>,
  #[serde(default)]
  pub options:           Vec<String>,
  pub chosen_option:     String,
  pub rationale:         String,
  pub consequences_good: String,
  pub consequences_bad:  String,
  #[serde(default)]
  pub pros_cons:         Vec<ProsCons>,
}

impl AdrDocument {
  /// Build a document from a loose field mapping.
  ///
  /// Fails with [`Error::Fields`] when a required scalar field is missing;
  /// list fields and `date` may be omitted.
  pub fn from_fields(fields: serde_json::Value) -> Result<Self> {
    Ok(serde_json::from_value(fields)?)
  }

  /// Build a document from a stored decision. Stored rows carry no
  /// pros/cons, so that section renders empty.
  pub fn from_decision(decision: &Decision) -> Self {
    Self {
      id:                decision.id,
      title:             decision.title.clone(),
      status:            decision.status.clone(),
      date:              Some(decision.date.clone()),
      context:           decision.context.clone(),
      drivers:           decision.drivers.clone(),
      options:           decision.options.clone(),
      chosen_option:     decision.chosen_option.clone(),
      rationale:         decision.rationale.clone(),
      consequences_good: decision.consequences_good.clone(),
      consequences_bad:  decision.consequences_bad.clone(),
      pros_cons:         Vec::new(),
    }
  }

  /// Fill in `date` if it is absent; an existing date is kept.
  pub fn with_date(mut self, date: impl Into<String>) -> Self {
    if self.date.is_none() {
      self.date = Some(date.into());
    }
    self
  }

  /// The filename this document is written under.
  pub fn filename(&self) -> String { filename(self.id, &self.title) }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn fields() -> serde_json::Value {
    json!({
      "id": 1,
      "title": "Test Decision",
      "status": "Accepted",
      "context": "Just a test",
      "chosen_option": "Option A",
      "rationale": "it works",
      "consequences_good": "",
      "consequences_bad": ""
    })
  }

  #[test]
  fn from_fields_defaults_lists_and_date() {
    let doc = AdrDocument::from_fields(fields()).unwrap();
    assert!(doc.drivers.is_empty());
    assert!(doc.options.is_empty());
    assert!(doc.pros_cons.is_empty());
    assert_eq!(doc.date, None);
  }

  #[test]
  fn from_fields_rejects_missing_scalar() {
    let mut f = fields();
    f.as_object_mut().unwrap().remove("rationale");
    let err = AdrDocument::from_fields(f).unwrap_err();
    assert!(matches!(err, Error::Fields(_)));
    assert!(err.to_string().contains("rationale"));
  }

  #[test]
  fn with_date_only_fills_absent_date() {
    let doc = AdrDocument::from_fields(fields())
      .unwrap()
      .with_date("2024-01-01");
    assert_eq!(doc.date.as_deref(), Some("2024-01-01"));

    let doc = doc.with_date("2030-12-31");
    assert_eq!(doc.date.as_deref(), Some("2024-01-01"));
  }

  #[test]
  fn from_decision_copies_stored_fields() {
    let decision = Decision {
      id:                12,
      title:             "Adopt Rust".into(),
      status:            "Accepted".into(),
      date:              "2024-06-01".into(),
      context:           "c".into(),
      drivers:           vec!["Safety".into()],
      options:           vec!["Rust".into(), "Go".into()],
      chosen_option:     "Rust".into(),
      rationale:         "r".into(),
      consequences_good: "g".into(),
      consequences_bad:  "b".into(),
      commit_hash:       None,
    };
    let doc = AdrDocument::from_decision(&decision);
    assert_eq!(doc.date.as_deref(), Some("2024-06-01"));
    assert_eq!(doc.options, decision.options);
    assert_eq!(doc.filename(), "0012-adopt-rust.md");
  }
}
