//! Decision types — the record the logger persists and the inputs that
//! create it.
//!
//! A decision is written once and never updated. Three shapes exist along the
//! creation path: a loose [`DecisionDraft`] as supplied by a caller, a
//! validated [`NewDecision`] handed to the store, and the persisted
//! [`Decision`] the store hands back.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Status the store records when the input carries none.
pub const STORE_DEFAULT_STATUS: &str = "Accepted";

/// Status a draft receives when validated without one.
pub const DRAFT_DEFAULT_STATUS: &str = "Proposed";

// ─── Persisted record ────────────────────────────────────────────────────────

/// An engineering decision as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
  /// Store-assigned; strictly increasing, never reused.
  pub id:                i64,
  pub title:             String,
  pub status:            String,
  /// Calendar date in `YYYY-MM-DD` form.
  pub date:              String,
  pub context:           String,
  pub drivers:           Vec<String>,
  pub options:           Vec<String>,
  pub chosen_option:     String,
  pub rationale:         String,
  pub consequences_good: String,
  pub consequences_bad:  String,
  /// The commit the decision was recorded against, if tracked.
  pub commit_hash:       Option<String>,
}

/// One entry of an ADR's "Pros and Cons of the Options" section.
///
/// Rendered into the document only; the store does not keep these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsCons {
  pub name: String,
  pub pros: String,
  pub cons: String,
}

// ─── Store input ─────────────────────────────────────────────────────────────

/// A validated decision ready to be inserted.
///
/// `status` and `date` stay optional so the store can apply its own defaults
/// ([`STORE_DEFAULT_STATUS`] and the current date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDecision {
  pub title:             String,
  pub status:            Option<String>,
  pub date:              Option<String>,
  pub context:           String,
  pub drivers:           Vec<String>,
  pub options:           Vec<String>,
  pub chosen_option:     String,
  pub rationale:         String,
  pub consequences_good: String,
  pub consequences_bad:  String,
  pub commit_hash:       Option<String>,
}

impl NewDecision {
  /// Build an input with the four required fields and everything else empty.
  pub fn new(
    title: impl Into<String>,
    context: impl Into<String>,
    chosen_option: impl Into<String>,
    rationale: impl Into<String>,
  ) -> Self {
    Self {
      title:             title.into(),
      status:            None,
      date:              None,
      context:           context.into(),
      drivers:           Vec::new(),
      options:           Vec::new(),
      chosen_option:     chosen_option.into(),
      rationale:         rationale.into(),
      consequences_good: String::new(),
      consequences_bad:  String::new(),
      commit_hash:       None,
    }
  }
}

// ─── Caller input ────────────────────────────────────────────────────────────

/// The loose creation mapping a caller hands to the decision manager.
///
/// Every field may be absent; [`DecisionDraft::validate`] decides which
/// absences are fatal. Deserialises from JSON with missing keys treated as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionDraft {
  pub title:             Option<String>,
  pub status:            Option<String>,
  pub date:              Option<String>,
  pub context:           Option<String>,
  pub drivers:           Vec<String>,
  pub options:           Vec<String>,
  pub chosen_option:     Option<String>,
  pub rationale:         Option<String>,
  pub consequences_good: Option<String>,
  pub consequences_bad:  Option<String>,
  pub commit_hash:       Option<String>,
  pub pros_cons:         Vec<ProsCons>,
}

impl DecisionDraft {
  /// A draft carrying only the four required fields.
  pub fn new(
    title: impl Into<String>,
    context: impl Into<String>,
    chosen_option: impl Into<String>,
    rationale: impl Into<String>,
  ) -> Self {
    Self {
      title: Some(title.into()),
      context: Some(context.into()),
      chosen_option: Some(chosen_option.into()),
      rationale: Some(rationale.into()),
      ..Self::default()
    }
  }

  /// Check required fields and apply creation defaults.
  ///
  /// Absent `title`, `context`, `chosen_option` or `rationale` fails with
  /// [`Error::MissingField`]; an empty string is accepted. `status` defaults
  /// to [`DRAFT_DEFAULT_STATUS`] and the consequences to `""`. `pros_cons`
  /// is not part of the result; take it out first if it is needed.
  pub fn validate(self) -> Result<NewDecision> {
    let title = self.title.ok_or(Error::MissingField("title"))?;
    let context = self.context.ok_or(Error::MissingField("context"))?;
    let chosen_option = self
      .chosen_option
      .ok_or(Error::MissingField("chosen_option"))?;
    let rationale = self.rationale.ok_or(Error::MissingField("rationale"))?;

    Ok(NewDecision {
      title,
      status: Some(
        self
          .status
          .unwrap_or_else(|| DRAFT_DEFAULT_STATUS.to_owned()),
      ),
      date: self.date,
      context,
      drivers: self.drivers,
      options: self.options,
      chosen_option,
      rationale,
      consequences_good: self.consequences_good.unwrap_or_default(),
      consequences_bad: self.consequences_bad.unwrap_or_default(),
      commit_hash: self.commit_hash,
    })
  }
}
