//! External tool execution.
//!
//! The orchestrator talks to tools only through [`ToolRunner`], which keeps
//! the working directory an explicit argument instead of process-global state.

pub mod process;
pub mod types;

use std::path::Path;

pub use process::{ProcessRunner, run_tool};
pub use types::ProcessError;

/// Something that can run an external tool to completion.
#[allow(async_fn_in_trait)]
pub trait ToolRunner {
  /// Run `argv` with `cwd` as its working directory.
  ///
  /// Returns `Ok` only if the tool launched and exited successfully.
  async fn run(&self, cwd: &Path, argv: &[String]) -> Result<(), ProcessError>;
}
