//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! List fields (`drivers`, `options`) are stored as compact JSON arrays so
//! items containing commas survive a round trip. Rows written by the older
//! comma-joined encoding are still readable: anything that does not parse as
//! a JSON string array is split on `,`.

use chrono::Local;
use edl_core::Decision;

use crate::Result;

// ─── Lists ───────────────────────────────────────────────────────────────────

pub fn encode_list(items: &[String]) -> Result<String> {
  Ok(serde_json::to_string(items)?)
}

pub fn decode_list(s: &str) -> Vec<String> {
  if let Ok(items) = serde_json::from_str::<Vec<String>>(s) {
    return items;
  }
  if s.is_empty() {
    return Vec::new();
  }
  s.split(',').map(str::to_owned).collect()
}

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Today's local calendar date as `YYYY-MM-DD`.
pub fn today() -> String { Local::now().format("%Y-%m-%d").to_string() }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw column values read directly from a `decision` row.
pub struct RawDecision {
  pub id:                i64,
  pub title:             String,
  pub status:            String,
  pub date:              String,
  pub context:           String,
  pub drivers:           String,
  pub options:           String,
  pub chosen_option:     String,
  pub rationale:         String,
  pub consequences_good: String,
  pub consequences_bad:  String,
  pub commit_hash:       Option<String>,
}

impl RawDecision {
  /// Read a row selected with [`crate::schema::DECISION_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                row.get(0)?,
      title:             row.get(1)?,
      status:            row.get(2)?,
      date:              row.get(3)?,
      context:           row.get(4)?,
      drivers:           row.get(5)?,
      options:           row.get(6)?,
      chosen_option:     row.get(7)?,
      rationale:         row.get(8)?,
      consequences_good: row.get(9)?,
      consequences_bad:  row.get(10)?,
      commit_hash:       row.get(11)?,
    })
  }

  pub fn into_decision(self) -> Decision {
    Decision {
      id:                self.id,
      title:             self.title,
      status:            self.status,
      date:              self.date,
      context:           self.context,
      drivers:           decode_list(&self.drivers),
      options:           decode_list(&self.options),
      chosen_option:     self.chosen_option,
      rationale:         self.rationale,
      consequences_good: self.consequences_good,
      consequences_bad:  self.consequences_bad,
      commit_hash:       self.commit_hash,
    }
  }
}
