//! Request, report and error types for an orchestration run.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::execute::ProcessError;
use crate::mode::BuildMode;
use crate::platform::Arch;
use crate::util::fs::FsError;

/// Errors that abort a run.
///
/// Every variant is fatal: the run stops at the first one, leaving whatever
/// directories and artifacts earlier steps produced.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The request itself can't be built (e.g. no architectures).
  #[error("invalid build request: {0}")]
  InvalidRequest(String),

  /// The checkout directory is missing after the fetch step.
  #[error("source root {} is not a directory", path.display())]
  MissingSourceRoot { path: PathBuf },

  /// An external tool failed to launch or exited unsuccessfully.
  #[error(transparent)]
  Process(#[from] ProcessError),

  /// A filesystem side effect failed.
  #[error(transparent)]
  Fs(#[from] FsError),
}

/// What to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
  version: Option<String>,
  arches: Vec<String>,
  mode: BuildMode,
}

impl BuildRequest {
  /// Validate and build a request.
  ///
  /// `arches` must be non-empty and contain no blank entries. Architectures
  /// without a known `gn` mapping are accepted with a warning; their build
  /// directories get an unpinned `args.gn`.
  pub fn new(version: Option<String>, arches: Vec<String>, mode: BuildMode) -> Result<Self, BuildError> {
    if arches.is_empty() {
      return Err(BuildError::InvalidRequest("no architectures requested".to_string()));
    }
    if arches.iter().any(|a| a.trim().is_empty()) {
      return Err(BuildError::InvalidRequest("empty architecture in list".to_string()));
    }
    for arch in &arches {
      if Arch::parse(arch).is_none() {
        warn!(arch = %arch, "unrecognized architecture, target_cpu will not be set");
      }
    }
    let version = version.filter(|v| !v.is_empty());
    Ok(Self { version, arches, mode })
  }

  pub fn version(&self) -> Option<&str> {
    self.version.as_deref()
  }

  pub fn arches(&self) -> &[String] {
    &self.arches
  }

  pub fn mode(&self) -> BuildMode {
    self.mode
  }
}

/// Split a comma-delimited architecture list, trimming whitespace around entries.
pub fn parse_arch_list(list: &str) -> Vec<String> {
  list.split(',').map(|s| s.trim().to_string()).collect()
}

/// Result of building one architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchOutput {
  pub arch: String,
  pub build_dir: PathBuf,
  pub output_dir: PathBuf,
  /// Files written into `output_dir`, in copy order.
  pub artifacts: Vec<PathBuf>,
}

/// Result of a complete run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
  pub mode: BuildMode,
  pub version: Option<String>,
  pub outputs: Vec<ArchOutput>,
}

impl BuildReport {
  pub fn artifact_count(&self) -> usize {
    self.outputs.iter().map(|o| o.artifacts.len()).sum()
  }
}
