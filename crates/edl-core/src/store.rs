//! The `DecisionStore` trait.
//!
//! Implemented by storage backends (e.g. `edl-store-sqlite`). The decision
//! manager depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::decision::{Decision, NewDecision};

/// Abstraction over a decision store backend.
///
/// Writes are append-only: there is no update or delete. Identifiers are
/// assigned by the store and must be unique and strictly increasing even when
/// several processes share the backing file.
pub trait DecisionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new decision, assigning its id (max existing id + 1) and
  /// resolving its default status and date.
  fn insert(
    &self,
    input: NewDecision,
  ) -> impl Future<Output = Result<Decision, Self::Error>> + Send + '_;

  /// All decisions in ascending id order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Decision>, Self::Error>> + Send + '_;

  /// Retrieve a decision by id. Returns `None` if not found.
  fn get_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Decision>, Self::Error>> + Send + '_;

  /// Decisions whose title, context, rationale or chosen option contains
  /// `query` as a case-sensitive substring, in ascending id order.
  fn search<'a>(
    &'a self,
    query: &'a str,
  ) -> impl Future<Output = Result<Vec<Decision>, Self::Error>> + Send + 'a;
}
