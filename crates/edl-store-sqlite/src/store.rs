//! [`SqliteStore`] — the SQLite implementation of [`DecisionStore`].

use std::{path::Path, time::Duration};

use rusqlite::{OptionalExtension as _, TransactionBehavior};
use tracing::debug;

use edl_core::{
  Decision, NewDecision, decision::STORE_DEFAULT_STATUS, store::DecisionStore,
};

use crate::{
  Error, Result,
  encode::{RawDecision, encode_list, today},
  schema::{DECISION_COLUMNS, SCHEMA},
};

/// How long a writer waits on another process's lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

// ─── Store ───────────────────────────────────────────────────────────────────

/// A decision store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// Existing rows are never touched.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    debug!(path = %path.as_ref().display(), "opening decision store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a `SELECT` over [`DECISION_COLUMNS`] and decode every row.
  async fn query_decisions(
    &self,
    sql: String,
    param: Option<String>,
  ) -> Result<Vec<Decision>> {
    let raws: Vec<RawDecision> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = match param {
          Some(p) => stmt
            .query_map(rusqlite::params![p], RawDecision::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
          None => stmt
            .query_map([], RawDecision::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
        };
        Ok(rows)
      })
      .await?;

    Ok(raws.into_iter().map(RawDecision::into_decision).collect())
  }
}

// ─── DecisionStore impl ──────────────────────────────────────────────────────

impl DecisionStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewDecision) -> Result<Decision> {
    let mut decision = Decision {
      id:                0,
      title:             input.title,
      status:            input
        .status
        .unwrap_or_else(|| STORE_DEFAULT_STATUS.to_owned()),
      date:              input.date.unwrap_or_else(today),
      context:           input.context,
      drivers:           input.drivers,
      options:           input.options,
      chosen_option:     input.chosen_option,
      rationale:         input.rationale,
      consequences_good: input.consequences_good,
      consequences_bad:  input.consequences_bad,
      commit_hash:       input.commit_hash,
    };

    let drivers_str = encode_list(&decision.drivers)?;
    let options_str = encode_list(&decision.options)?;
    let row = decision.clone();

    // The id read and the insert share one IMMEDIATE transaction: the write
    // lock is taken before MAX(id) is read, so concurrent writers queue
    // instead of assigning the same id.
    let id: i64 = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id: i64 = tx.query_row(
          "SELECT COALESCE(MAX(id), 0) + 1 FROM decision",
          [],
          |r| r.get(0),
        )?;
        tx.execute(
          "INSERT INTO decision (
             id, title, status, date, context, drivers, options,
             chosen_option, rationale, consequences_good, consequences_bad,
             commit_hash
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
          rusqlite::params![
            id,
            row.title,
            row.status,
            row.date,
            row.context,
            drivers_str,
            options_str,
            row.chosen_option,
            row.rationale,
            row.consequences_good,
            row.consequences_bad,
            row.commit_hash,
          ],
        )?;
        tx.commit()?;
        Ok(id)
      })
      .await?;

    debug!(id, "inserted decision");
    decision.id = id;
    Ok(decision)
  }

  async fn list_all(&self) -> Result<Vec<Decision>> {
    self
      .query_decisions(
        format!("SELECT {DECISION_COLUMNS} FROM decision ORDER BY id"),
        None,
      )
      .await
  }

  async fn get_by_id(&self, id: i64) -> Result<Option<Decision>> {
    let raw: Option<RawDecision> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {DECISION_COLUMNS} FROM decision WHERE id = ?1"),
              rusqlite::params![id],
              RawDecision::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(raw.map(RawDecision::into_decision))
  }

  async fn search(&self, query: &str) -> Result<Vec<Decision>> {
    // instr() is a plain case-sensitive substring test; unlike LIKE it gives
    // `%` and `_` no special meaning.
    self
      .query_decisions(
        format!(
          "SELECT {DECISION_COLUMNS} FROM decision
           WHERE instr(title, ?1) > 0
              OR instr(context, ?1) > 0
              OR instr(rationale, ?1) > 0
              OR instr(chosen_option, ?1) > 0
           ORDER BY id"
        ),
        Some(query.to_owned()),
      )
      .await
  }
}
