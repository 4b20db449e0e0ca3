//! Layered configuration: defaults, then the TOML file, then `EDL_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use edl_manager::ManagerConfig;

pub fn load(
  config_file: &Path,
  db: Option<PathBuf>,
  adr_dir: Option<PathBuf>,
) -> anyhow::Result<ManagerConfig> {
  let settings = config::Config::builder()
    .add_source(config::File::from(config_file.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("EDL"))
    .build()
    .with_context(|| format!("failed to read config file {}", config_file.display()))?;

  let mut cfg: ManagerConfig = settings
    .try_deserialize()
    .context("failed to deserialise configuration")?;

  if let Some(db) = db {
    cfg.store_path = db;
  }
  if let Some(dir) = adr_dir {
    cfg.adr_dir = dir;
  }

  cfg.store_path = expand_tilde(&cfg.store_path);
  cfg.adr_dir = expand_tilde(&cfg.adr_dir);
  Ok(cfg)
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
