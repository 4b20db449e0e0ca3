//! Git integration: the current commit for new decisions, and hook install.
//!
//! Shells out to the `git` binary; a missing binary is treated the same as
//! not being inside a repository.

use std::{
  fs,
  path::{Path, PathBuf},
  process::Command,
};

use anyhow::{Context as _, bail};
use tracing::debug;

const HOOK_SCRIPT: &str = "#!/bin/sh
# EDL Git Hook
echo \"Checking for new Engineering Decisions...\"
# Add checks here to require an ADR for significant changes.
";

/// What `HEAD` resolves to in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRef {
  Commit(String),
  /// Inside a repository that has no commits yet.
  NoCommits,
  NotARepository,
}

impl CommitRef {
  /// The full hash, if there is one.
  pub fn hash(self) -> Option<String> {
    match self {
      Self::Commit(hash) => Some(hash),
      Self::NoCommits | Self::NotARepository => None,
    }
  }
}

/// Run `git` with `args` and return trimmed stdout on success.
fn git(args: &[&str]) -> Option<String> {
  let output = Command::new("git").args(args).output().ok()?;
  if !output.status.success() {
    return None;
  }
  String::from_utf8(output.stdout)
    .ok()
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
}

/// Resolve `HEAD` in the current directory.
pub fn current_commit() -> CommitRef {
  if git(&["rev-parse", "--git-dir"]).is_none() {
    debug!("not inside a git repository");
    return CommitRef::NotARepository;
  }
  match git(&["rev-parse", "--verify", "--quiet", "HEAD"]) {
    Some(hash) => CommitRef::Commit(hash),
    None => CommitRef::NoCommits,
  }
}

/// Write the `hook_name` hook into the repository's hooks directory,
/// replacing any existing hook of that name.
pub fn install_hook(hook_name: &str) -> anyhow::Result<PathBuf> {
  let Some(hooks_dir) = git(&["rev-parse", "--git-path", "hooks"]) else {
    bail!("not a git repository");
  };
  let hooks_dir = Path::new(&hooks_dir);
  fs::create_dir_all(hooks_dir)
    .with_context(|| format!("creating {}", hooks_dir.display()))?;

  let hook_path = hooks_dir.join(hook_name);
  fs::write(&hook_path, HOOK_SCRIPT)
    .with_context(|| format!("writing {}", hook_path.display()))?;
  make_executable(&hook_path)?;

  Ok(hook_path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> anyhow::Result<()> {
  use std::os::unix::fs::PermissionsExt as _;
  fs::set_permissions(path, fs::Permissions::from_mode(0o755))
    .with_context(|| format!("making {} executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> anyhow::Result<()> { Ok(()) }
