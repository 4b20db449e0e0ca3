//! `edl` — command-line front end for the engineering decision logger.
//!
//! # Usage
//!
//! ```text
//! edl log --title "Use SQLite" --context "Need storage" \
//!         --chosen-option SQLite --rationale "it is embedded"
//! edl list
//! edl search SQLite
//! edl show 1
//! edl install-hooks
//! ```

mod commands;
mod git;
mod output;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use edl_manager::DecisionManager;
use edl_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use commands::LogArgs;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "edl", author, version, about = "Engineering Decision Logger")]
struct Cli {
  /// Path to a TOML configuration file (store_path, adr_dir).
  #[arg(short, long, global = true, default_value = "edl.toml", value_name = "FILE")]
  config: PathBuf,

  /// SQLite file holding the decisions (overrides config and EDL_STORE_PATH).
  #[arg(long, global = true, value_name = "FILE")]
  db: Option<PathBuf>,

  /// Directory for generated ADR documents (overrides config and EDL_ADR_DIR).
  #[arg(long, global = true, value_name = "DIR")]
  adr_dir: Option<PathBuf>,

  /// Print decisions as JSON instead of tables.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Log a new engineering decision and write its ADR document.
  Log(LogArgs),

  /// List all decisions.
  #[command(alias = "list-decisions")]
  List,

  /// Search decisions by title, context, chosen option or rationale.
  Search {
    /// Case-sensitive text to look for.
    query: String,
  },

  /// Show the details of one decision.
  Show {
    /// Decision id.
    id: i64,
  },

  /// Rewrite the ADR document of a stored decision.
  Render {
    /// Decision id.
    id: i64,
  },

  /// Install the git pre-commit hook in the current repository.
  InstallHooks,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout carries command output.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let json = cli.json;

  match cli.command {
    Command::Log(args) => {
      let manager = open_manager(&cli.config, cli.db, cli.adr_dir).await?;
      commands::log(&manager, args, json).await
    }
    Command::List => {
      let manager = open_manager(&cli.config, cli.db, cli.adr_dir).await?;
      commands::list(&manager, json).await
    }
    Command::Search { query } => {
      let manager = open_manager(&cli.config, cli.db, cli.adr_dir).await?;
      commands::search(&manager, &query, json).await
    }
    Command::Show { id } => {
      let manager = open_manager(&cli.config, cli.db, cli.adr_dir).await?;
      commands::show(&manager, id, json).await
    }
    Command::Render { id } => {
      let manager = open_manager(&cli.config, cli.db, cli.adr_dir).await?;
      commands::render(&manager, id).await
    }
    // Needs no store; don't create one as a side effect.
    Command::InstallHooks => commands::install_hooks(),
  }
}

/// Resolve layered configuration and open the store and ADR directory.
async fn open_manager(
  config_file: &Path,
  db: Option<PathBuf>,
  adr_dir: Option<PathBuf>,
) -> anyhow::Result<DecisionManager<SqliteStore>> {
  let config = settings::load(config_file, db, adr_dir)?;
  DecisionManager::initialize(&config).await.with_context(|| {
    format!(
      "failed to initialise store {} with ADR directory {}",
      config.store_path.display(),
      config.adr_dir.display()
    )
  })
}
