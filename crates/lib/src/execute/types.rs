//! Error type for external tool invocations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from running an external tool.
#[derive(Debug, Error)]
pub enum ProcessError {
  /// No program was given.
  #[error("empty command")]
  EmptyCommand,

  /// The program is not on `PATH` (or the given path isn't executable).
  #[error("failed to launch {program}: {source}")]
  NotFound { program: String, source: which::Error },

  /// The program could not be started (not found, not executable, bad cwd).
  #[error("failed to launch {program} in {}: {source}", cwd.display())]
  Spawn {
    program: String,
    cwd: PathBuf,
    source: std::io::Error,
  },

  /// The program ran and exited unsuccessfully.
  ///
  /// `code` is `None` when the process was terminated by a signal.
  #[error("command failed with exit code {code:?}: {}", argv.join(" "))]
  Failed { argv: Vec<String>, code: Option<i32> },
}
