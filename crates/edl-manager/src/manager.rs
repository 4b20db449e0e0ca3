//! [`DecisionManager`] — store plus renderer plus document directory.

use std::path::{Path, PathBuf};

use edl_adr::AdrDocument;
use edl_core::{Decision, DecisionDraft, store::DecisionStore};
use edl_store_sqlite::SqliteStore;
use tracing::{debug, info, warn};

use crate::{Error, ManagerConfig, Result};

// ─── Manager ─────────────────────────────────────────────────────────────────

/// Records decisions and writes their ADR documents.
///
/// Holds no state beyond its store handle and document directory, so tests
/// can run any number of independent managers against temporary paths.
pub struct DecisionManager<S> {
  store:   S,
  adr_dir: PathBuf,
}

impl DecisionManager<SqliteStore> {
  /// Open (or create) the SQLite store and the document directory named by
  /// `config`. Safe to call on every start; existing data is untouched.
  pub async fn initialize(config: &ManagerConfig) -> Result<Self> {
    let store = SqliteStore::open(&config.store_path)
      .await
      .map_err(Error::store)?;
    Self::with_store(store, &config.adr_dir).await
  }
}

impl<S: DecisionStore> DecisionManager<S> {
  /// Wrap an already-open store, creating `adr_dir` (and its parents) if
  /// needed.
  pub async fn with_store(store: S, adr_dir: impl Into<PathBuf>) -> Result<Self> {
    let adr_dir = adr_dir.into();
    tokio::fs::create_dir_all(&adr_dir)
      .await
      .map_err(|source| Error::DocumentDir { path: adr_dir.clone(), source })?;
    debug!(adr_dir = %adr_dir.display(), "decision manager ready");
    Ok(Self { store, adr_dir })
  }

  pub fn adr_dir(&self) -> &Path { &self.adr_dir }

  /// Validate, persist and document a new decision.
  ///
  /// The document is rendered from the draft itself (including its
  /// `pros_cons`, which the store does not keep), with `id` and `date` taken
  /// from the persisted row. An existing file of the same name is
  /// overwritten.
  ///
  /// If the insert succeeds and the write fails, the result is
  /// [`Error::DocumentNotWritten`] carrying the saved decision.
  pub async fn add_decision(&self, mut draft: DecisionDraft) -> Result<Decision> {
    let pros_cons = std::mem::take(&mut draft.pros_cons);
    let input = draft.validate()?;

    let mut doc = AdrDocument {
      id: 0,
      title: input.title.clone(),
      status: input.status.clone().unwrap_or_default(),
      date: input.date.clone(),
      context: input.context.clone(),
      drivers: input.drivers.clone(),
      options: input.options.clone(),
      chosen_option: input.chosen_option.clone(),
      rationale: input.rationale.clone(),
      consequences_good: input.consequences_good.clone(),
      consequences_bad: input.consequences_bad.clone(),
      pros_cons,
    };

    let decision = self.store.insert(input).await.map_err(Error::store)?;

    doc.id = decision.id;
    let doc = doc.with_date(decision.date.clone());

    let (path, written) = self.write_document(&doc).await?;
    if let Err(source) = written {
      warn!(
        id = decision.id,
        path = %path.display(),
        error = %source,
        "decision saved but ADR document not written"
      );
      return Err(Error::DocumentNotWritten {
        decision: Box::new(decision),
        path,
        source,
      });
    }

    info!(id = decision.id, path = %path.display(), "recorded decision");
    Ok(decision)
  }

  /// All decisions in ascending id order.
  pub async fn list_decisions(&self) -> Result<Vec<Decision>> {
    self.store.list_all().await.map_err(Error::store)
  }

  /// A single decision, or `None` if `id` was never assigned.
  pub async fn get_decision(&self, id: i64) -> Result<Option<Decision>> {
    self.store.get_by_id(id).await.map_err(Error::store)
  }

  /// Decisions whose title, context, rationale or chosen option contains
  /// `query` (case-sensitive).
  pub async fn search_decisions(&self, query: &str) -> Result<Vec<Decision>> {
    self.store.search(query).await.map_err(Error::store)
  }

  /// Rewrite the document for a stored decision, e.g. after a
  /// [`Error::DocumentNotWritten`]. The stored row has no pros/cons, so the
  /// regenerated document has none either.
  ///
  /// Returns `None` if no decision has this id.
  pub async fn regenerate_document(&self, id: i64) -> Result<Option<PathBuf>> {
    let Some(decision) = self.get_decision(id).await? else {
      return Ok(None);
    };

    let (path, written) = self
      .write_document(&AdrDocument::from_decision(&decision))
      .await?;
    if let Err(source) = written {
      return Err(Error::DocumentNotWritten {
        decision: Box::new(decision),
        path,
        source,
      });
    }

    info!(id, path = %path.display(), "regenerated ADR document");
    Ok(Some(path))
  }

  /// Render `doc` and write it under the document directory.
  ///
  /// Rendering errors are returned directly; the write outcome is handed
  /// back alongside the target path so callers can attach the decision.
  async fn write_document(
    &self,
    doc: &AdrDocument,
  ) -> Result<(PathBuf, std::io::Result<()>)> {
    let content = edl_adr::render(doc)?;
    let path = self.adr_dir.join(doc.filename());
    let written = tokio::fs::write(&path, content).await;
    Ok((path, written))
  }
}
