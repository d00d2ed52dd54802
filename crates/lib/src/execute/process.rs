//! Running external tools.
//!
//! Tools are started directly, never through a shell, with the caller's
//! standard streams so prompts and build logs pass straight through.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use super::ToolRunner;
use super::types::ProcessError;

/// Runs tools as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
  async fn run(&self, cwd: &Path, argv: &[String]) -> Result<(), ProcessError> {
    run_tool(cwd, argv).await
  }
}

/// Locate `program` on `path_var` the way a shell would.
///
/// Honours `PATHEXT` on Windows, so depot_tools' `.bat` wrappers are found by
/// bare name. Relative program paths are resolved against `cwd`.
pub fn resolve_program(program: &str, path_var: Option<OsString>, cwd: &Path) -> Result<PathBuf, ProcessError> {
  which::which_in(program, path_var, cwd).map_err(|e| ProcessError::NotFound {
    program: program.to_string(),
    source: e,
  })
}

/// Run `argv` in `cwd` and wait for it to exit.
///
/// No timeout is applied: a tool that never exits blocks the caller forever.
pub async fn run_tool(cwd: &Path, argv: &[String]) -> Result<(), ProcessError> {
  let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;

  info!(argv = ?argv, cwd = %cwd.display(), "sh");

  let resolved = resolve_program(program, std::env::var_os("PATH"), cwd)?;
  debug!(program = %program, resolved = %resolved.display(), "resolved program");

  let status = Command::new(&resolved)
    .args(args)
    .current_dir(cwd)
    .stdin(Stdio::inherit())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit())
    .status()
    .await
    .map_err(|e| ProcessError::Spawn {
      program: program.clone(),
      cwd: cwd.to_path_buf(),
      source: e,
    })?;

  debug!(program = %program, status = %status, "process exited");

  if !status.success() {
    return Err(ProcessError::Failed {
      argv: argv.to_vec(),
      code: status.code(),
    });
  }

  Ok(())
}
