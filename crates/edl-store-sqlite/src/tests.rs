//! Integration tests for `SqliteStore` against in-memory and on-disk
//! databases.

use edl_core::{NewDecision, decision::STORE_DEFAULT_STATUS, store::DecisionStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn input(title: &str, context: &str, chosen: &str, rationale: &str) -> NewDecision {
  NewDecision::new(title, context, chosen, rationale)
}

// ─── Ids ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ids_are_sequential_from_one() {
  let s = store().await;

  for expected in 1..=5 {
    let d = s
      .insert(input(&format!("Decision {expected}"), "c", "o", "r"))
      .await
      .unwrap();
    assert_eq!(d.id, expected);
  }
}

#[tokio::test]
async fn insert_resolves_store_defaults() {
  let s = store().await;
  let d = s.insert(input("t", "c", "o", "r")).await.unwrap();

  assert_eq!(d.status, STORE_DEFAULT_STATUS);
  assert_eq!(d.date.len(), 10);
  assert_eq!(d.commit_hash, None);
}

#[tokio::test]
async fn insert_keeps_supplied_status_and_date() {
  let s = store().await;
  let mut i = input("t", "c", "o", "r");
  i.status = Some("Deprecated".into());
  i.date = Some("2024-01-31".into());
  i.commit_hash = Some("0123abcd".into());

  let d = s.insert(i).await.unwrap();
  let fetched = s.get_by_id(d.id).await.unwrap().unwrap();
  assert_eq!(fetched.status, "Deprecated");
  assert_eq!(fetched.date, "2024-01-31");
  assert_eq!(fetched.commit_hash.as_deref(), Some("0123abcd"));
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_returns_what_insert_returned() {
  let s = store().await;
  let mut i = input("Cache layer", "Slow reads", "Redis", "Fast");
  i.drivers = vec!["Latency".into()];
  i.options = vec!["Redis".into(), "Memcached".into()];
  i.consequences_good = "Quick".into();
  i.consequences_bad = "One more service".into();

  let inserted = s.insert(i).await.unwrap();
  let fetched = s.get_by_id(inserted.id).await.unwrap();
  assert_eq!(fetched, Some(inserted));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get_by_id(1).await.unwrap().is_none());

  s.insert(input("t", "c", "o", "r")).await.unwrap();
  assert!(s.get_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn list_all_is_in_insertion_order() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());

  s.insert(input("D1", "C1", "O1", "R1")).await.unwrap();
  s.insert(input("D2", "C2", "O2", "R2")).await.unwrap();
  s.insert(input("D3", "C3", "O3", "R3")).await.unwrap();

  let all = s.list_all().await.unwrap();
  let titles: Vec<_> = all.iter().map(|d| d.title.as_str()).collect();
  assert_eq!(titles, ["D1", "D2", "D3"]);
  let ids: Vec<_> = all.iter().map(|d| d.id).collect();
  assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn list_items_containing_commas_round_trip() {
  let s = store().await;
  let mut i = input("t", "c", "o", "r");
  i.drivers = vec!["fast, cheap".into(), "safe".into()];
  i.options = vec!["A, with caveats".into()];

  let d = s.insert(i).await.unwrap();
  let fetched = s.get_by_id(d.id).await.unwrap().unwrap();
  assert_eq!(fetched.drivers, vec!["fast, cheap", "safe"]);
  assert_eq!(fetched.options, vec!["A, with caveats"]);
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_matches_each_searchable_column() {
  let s = store().await;
  s.insert(input("Database Choice", "Need storage", "SQLite", "Simple"))
    .await
    .unwrap();
  s.insert(input("UI Framework", "Need frontend", "React", "Popular"))
    .await
    .unwrap();

  let by_option = s.search("SQLite").await.unwrap();
  assert_eq!(by_option.len(), 1);
  assert_eq!(by_option[0].title, "Database Choice");

  let by_context = s.search("frontend").await.unwrap();
  assert_eq!(by_context.len(), 1);
  assert_eq!(by_context[0].title, "UI Framework");

  let by_rationale = s.search("Popular").await.unwrap();
  assert_eq!(by_rationale.len(), 1);
  assert_eq!(by_rationale[0].id, 2);

  let by_title = s.search("Framework").await.unwrap();
  assert_eq!(by_title.len(), 1);

  let both = s.search("Need").await.unwrap();
  let ids: Vec<_> = both.iter().map(|d| d.id).collect();
  assert_eq!(ids, [1, 2]);
}

#[tokio::test]
async fn search_ignores_unsearched_columns() {
  let s = store().await;
  let mut i = input("t", "c", "o", "r");
  i.consequences_good = "needle".into();
  i.drivers = vec!["needle".into()];
  s.insert(i).await.unwrap();

  assert!(s.search("needle").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_is_case_sensitive() {
  let s = store().await;
  s.insert(input("Use SQLite", "c", "o", "r")).await.unwrap();

  assert_eq!(s.search("SQLite").await.unwrap().len(), 1);
  assert!(s.search("sqlite").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
  let s = store().await;
  s.insert(input("Raise limit to 100%", "c", "o", "r"))
    .await
    .unwrap();
  s.insert(input("Plain title", "c", "o", "r")).await.unwrap();

  let hits = s.search("%").await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].id, 1);
  assert!(s.search("_").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_with_no_matches_is_empty() {
  let s = store().await;
  s.insert(input("t", "c", "o", "r")).await.unwrap();
  assert!(s.search("absent").await.unwrap().is_empty());
}

// ─── On-disk behaviour ───────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_preserves_rows_and_continues_ids() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("edl.db");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(input("D1", "c", "o", "r")).await.unwrap();
    s.insert(input("D2", "c", "o", "r")).await.unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.list_all().await.unwrap().len(), 2);
  let d = s.insert(input("D3", "c", "o", "r")).await.unwrap();
  assert_eq!(d.id, 3);
}

#[tokio::test]
async fn open_fails_for_unwritable_path() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing-parent").join("edl.db");
  assert!(SqliteStore::open(&path).await.is_err());
}

#[tokio::test]
async fn legacy_comma_joined_rows_are_readable() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("edl.db");
  let s = SqliteStore::open(&path).await.unwrap();

  {
    let raw = rusqlite::Connection::open(&path).unwrap();
    raw
      .execute(
        "INSERT INTO decision (
           id, title, status, date, context, drivers, options,
           chosen_option, rationale, consequences_good, consequences_bad,
           commit_hash
         ) VALUES (1, 'Old', 'Accepted', '2023-05-01', 'c', 'Speed,Cost', '',
                   'o', 'r', '', '', NULL)",
        [],
      )
      .unwrap();
  }

  let d = s.get_by_id(1).await.unwrap().unwrap();
  assert_eq!(d.drivers, vec!["Speed", "Cost"]);
  assert!(d.options.is_empty());

  let next = s.insert(input("New", "c", "o", "r")).await.unwrap();
  assert_eq!(next.id, 2);
}

#[tokio::test]
async fn opens_tables_written_by_earlier_releases() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("edl.db");

  // VARCHAR columns, a table-level primary key and no column defaults.
  {
    let raw = rusqlite::Connection::open(&path).unwrap();
    raw
      .execute_batch(
        "CREATE TABLE decision (
           id INTEGER NOT NULL,
           title VARCHAR NOT NULL,
           status VARCHAR NOT NULL,
           date VARCHAR NOT NULL,
           context VARCHAR NOT NULL,
           drivers VARCHAR NOT NULL,
           options VARCHAR NOT NULL,
           chosen_option VARCHAR NOT NULL,
           rationale VARCHAR NOT NULL,
           consequences_good VARCHAR NOT NULL,
           consequences_bad VARCHAR NOT NULL,
           commit_hash VARCHAR,
           PRIMARY KEY (id)
         );
         INSERT INTO decision VALUES (
           1, 'Database Choice', 'Accepted', '2023-05-01', 'Need storage',
           'Speed,Cost', 'SQLite,Postgres', 'SQLite', 'Simple', 'fast', '',
           'abc1234'
         );",
      )
      .unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();

  let old = s.get_by_id(1).await.unwrap().unwrap();
  assert_eq!(old.title, "Database Choice");
  assert_eq!(old.drivers, vec!["Speed", "Cost"]);
  assert_eq!(old.options, vec!["SQLite", "Postgres"]);
  assert_eq!(old.commit_hash.as_deref(), Some("abc1234"));

  let found = s.search("Postgres").await.unwrap();
  assert!(found.is_empty());
  let found = s.search("SQLite").await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].id, 1);

  let next = s.insert(input("New", "c", "o", "r")).await.unwrap();
  assert_eq!(next.id, 2);
  assert_eq!(next.status, STORE_DEFAULT_STATUS);
  assert_eq!(s.list_all().await.unwrap().len(), 2);

  let raw = rusqlite::Connection::open(&path).unwrap();
  let mode: String = raw
    .query_row("PRAGMA journal_mode", [], |r| r.get(0))
    .unwrap();
  assert_eq!(mode, "wal");
}

#[tokio::test]
async fn concurrent_writers_get_distinct_ids() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("edl.db");
  let a = SqliteStore::open(&path).await.unwrap();
  let b = SqliteStore::open(&path).await.unwrap();

  let mut handles = Vec::new();
  for n in 0..10 {
    let s = if n % 2 == 0 { a.clone() } else { b.clone() };
    handles.push(tokio::spawn(async move {
      s.insert(input(&format!("D{n}"), "c", "o", "r")).await.unwrap().id
    }));
  }

  let mut ids = Vec::new();
  for h in handles {
    ids.push(h.await.unwrap());
  }
  ids.sort();
  assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
}
