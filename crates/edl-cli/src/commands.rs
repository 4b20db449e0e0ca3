//! Command handlers. Each takes the manager built in `main` and prints its
//! own output.

use std::io::{self, BufRead, Write};

use anyhow::{Context as _, bail};
use clap::Args;
use edl_core::{DecisionDraft, ProsCons, decision::DRAFT_DEFAULT_STATUS};
use edl_manager::DecisionManager;
use edl_store_sqlite::SqliteStore;

use crate::{git, output};

type Manager = DecisionManager<SqliteStore>;

// ─── log ──────────────────────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct LogArgs {
  /// Title of the decision (prompted if omitted).
  #[arg(long)]
  title: Option<String>,

  /// Context and problem statement (prompted if omitted).
  #[arg(long)]
  context: Option<String>,

  /// The option that was chosen (prompted if omitted).
  #[arg(long)]
  chosen_option: Option<String>,

  /// Rationale for the decision (prompted if omitted).
  #[arg(long)]
  rationale: Option<String>,

  /// Proposed, Accepted, Deprecated or Superseded (prompted if omitted;
  /// an empty answer means Proposed).
  #[arg(long)]
  status: Option<String>,

  /// Comma-separated decision drivers.
  #[arg(long, default_value = "")]
  drivers: String,

  /// Comma-separated considered options.
  #[arg(long, default_value = "")]
  options: String,

  /// Good consequences.
  #[arg(long, default_value = "")]
  good: String,

  /// Bad consequences.
  #[arg(long, default_value = "")]
  bad: String,

  /// Pros and cons of one option, as "NAME|PROS|CONS" (repeatable).
  #[arg(long, value_name = "NAME|PROS|CONS")]
  pros_cons: Vec<String>,

  /// Do not associate the decision with the current git commit.
  #[arg(long)]
  no_git: bool,
}

pub async fn log(manager: &Manager, args: LogArgs, json: bool) -> anyhow::Result<()> {
  let title = value_or_prompt(args.title, "Title of the decision")?;
  let context = value_or_prompt(args.context, "Context and problem statement")?;
  let chosen_option = value_or_prompt(args.chosen_option, "Chosen option")?;
  let rationale = value_or_prompt(args.rationale, "Rationale for the decision")?;
  let status = value_or_prompt_default(
    args.status,
    "Status (Proposed/Accepted/Deprecated/Superseded)",
    DRAFT_DEFAULT_STATUS,
  )?;

  let commit_hash = if args.no_git {
    None
  } else {
    let head = git::current_commit();
    if !matches!(head, git::CommitRef::Commit(_)) {
      tracing::warn!(state = ?head, "no commit to associate with this decision");
    }
    head.hash()
  };

  let pros_cons = args
    .pros_cons
    .iter()
    .map(String::as_str)
    .map(parse_pros_cons)
    .collect::<anyhow::Result<Vec<_>>>()?;

  let draft = DecisionDraft {
    title: Some(title),
    status: Some(status),
    date: None,
    context: Some(context),
    drivers: split_list(&args.drivers),
    options: split_list(&args.options),
    chosen_option: Some(chosen_option),
    rationale: Some(rationale),
    consequences_good: Some(args.good),
    consequences_bad: Some(args.bad),
    commit_hash,
    pros_cons,
  };

  let decision = match manager.add_decision(draft).await {
    Ok(decision) => decision,
    Err(e) => {
      if let Some(saved) = e.saved_decision() {
        eprintln!(
          "Decision saved as #{id}, but the ADR document was not written.\n\
           Run `edl render {id}` once the problem is fixed.",
          id = saved.id
        );
      }
      return Err(e).context("failed to log decision");
    }
  };

  if json {
    return output::json(&decision);
  }

  println!("Decision logged successfully with ID: {}", decision.id);
  if let Some(hash) = &decision.commit_hash {
    println!("Associated with commit: {}", &hash[..hash.len().min(7)]);
  }
  println!(
    "ADR file created at {}",
    manager
      .adr_dir()
      .join(edl_adr::filename(decision.id, &decision.title))
      .display()
  );
  Ok(())
}

/// Use `value` if given, otherwise ask on stdin.
fn value_or_prompt(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
  if let Some(v) = value {
    return Ok(v);
  }
  eprint!("{prompt}: ");
  match read_answer()? {
    Some(answer) => Ok(answer),
    None => bail!("no value given for \"{prompt}\""),
  }
}

/// Like [`value_or_prompt`], but a blank answer or closed stdin yields
/// `default`.
fn value_or_prompt_default(
  value: Option<String>,
  prompt: &str,
  default: &str,
) -> anyhow::Result<String> {
  if let Some(v) = value {
    return Ok(v);
  }
  eprint!("{prompt} [{default}]: ");
  Ok(
    read_answer()?
      .filter(|answer| !answer.trim().is_empty())
      .unwrap_or_else(|| default.to_owned()),
  )
}

/// One line from stdin without its line ending; `None` at end of input.
/// Prompts go to stderr so `--json` output on stdout stays parseable.
fn read_answer() -> anyhow::Result<Option<String>> {
  io::stderr().flush().ok();
  let mut line = String::new();
  if io::stdin().lock().read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Split comma-separated input into trimmed items; empty input is no items.
fn split_list(raw: &str) -> Vec<String> {
  if raw.is_empty() {
    return Vec::new();
  }
  raw.split(',').map(|s| s.trim().to_owned()).collect()
}

fn parse_pros_cons(raw: &str) -> anyhow::Result<ProsCons> {
  let parts: Vec<&str> = raw.splitn(3, '|').collect();
  let [name, pros, cons] = parts.as_slice() else {
    bail!("invalid --pros-cons value {raw:?}: expected 'NAME|PROS|CONS'");
  };
  Ok(ProsCons {
    name: name.trim().to_owned(),
    pros: pros.trim().to_owned(),
    cons: cons.trim().to_owned(),
  })
}

// ─── list / search / show ────────────────────────────────────────────────────

pub async fn list(manager: &Manager, json: bool) -> anyhow::Result<()> {
  let decisions = manager.list_decisions().await?;
  if json {
    return output::json(&decisions);
  }
  if decisions.is_empty() {
    println!("No decisions found.");
    return Ok(());
  }

  let rows: Vec<Vec<String>> = decisions
    .iter()
    .map(|d| vec![d.id.to_string(), d.title.clone(), d.status.clone(), d.date.clone()])
    .collect();
  output::table("Engineering Decisions", &["ID", "Title", "Status", "Date"], &rows);
  Ok(())
}

pub async fn search(manager: &Manager, query: &str, json: bool) -> anyhow::Result<()> {
  let decisions = manager.search_decisions(query).await?;
  if json {
    return output::json(&decisions);
  }
  if decisions.is_empty() {
    println!("No decisions found matching '{query}'.");
    return Ok(());
  }

  let rows: Vec<Vec<String>> = decisions
    .iter()
    .map(|d| vec![d.id.to_string(), d.title.clone(), d.status.clone()])
    .collect();
  output::table(
    &format!("Search Results for '{query}'"),
    &["ID", "Title", "Status"],
    &rows,
  );
  Ok(())
}

pub async fn show(manager: &Manager, id: i64, json: bool) -> anyhow::Result<()> {
  match manager.get_decision(id).await? {
    Some(d) if json => output::json(&d),
    Some(d) => {
      output::detail(&d);
      Ok(())
    }
    None => {
      println!("Decision with ID {id} not found.");
      Ok(())
    }
  }
}

// ─── render ───────────────────────────────────────────────────────────────────

pub async fn render(manager: &Manager, id: i64) -> anyhow::Result<()> {
  match manager.regenerate_document(id).await? {
    Some(path) => println!("ADR file written to {}", path.display()),
    None => println!("Decision with ID {id} not found."),
  }
  Ok(())
}

// ─── install-hooks ────────────────────────────────────────────────────────────

pub fn install_hooks() -> anyhow::Result<()> {
  let path = git::install_hook("pre-commit")?;
  println!("Hook pre-commit installed at {}", path.display());
  Ok(())
}
