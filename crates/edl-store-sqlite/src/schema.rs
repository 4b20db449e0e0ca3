//! SQL schema for the decision store.
//!
//! Executed on every open. The table name and column layout match stores
//! written by earlier releases of the tool, so existing `edl.db` files open
//! unchanged.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Append-only. No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS decision (
    id                INTEGER PRIMARY KEY,
    title             TEXT NOT NULL,
    status            TEXT NOT NULL DEFAULT 'Accepted',
    date              TEXT NOT NULL,   -- YYYY-MM-DD
    context           TEXT NOT NULL,
    drivers           TEXT NOT NULL,   -- JSON array; legacy rows are comma-joined
    options           TEXT NOT NULL,   -- JSON array; legacy rows are comma-joined
    chosen_option     TEXT NOT NULL,
    rationale         TEXT NOT NULL,
    consequences_good TEXT NOT NULL,
    consequences_bad  TEXT NOT NULL,
    commit_hash       TEXT
);
";

/// Column list shared by every `SELECT` so rows decode positionally.
pub const DECISION_COLUMNS: &str = "id, title, status, date, context, drivers, options, \
  chosen_option, rationale, consequences_good, consequences_bad, commit_hash";
