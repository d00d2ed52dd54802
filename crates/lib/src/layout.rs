//! Directory layout for a run.
//!
//! All paths are derived from the directory the run started in, captured once
//! up front, so nothing depends on the process working directory.

use std::path::{Path, PathBuf};

use crate::consts::{BUILD_OUT_DIR, GN_ARGS_FILE, SOURCE_PROJECT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
  start_dir: PathBuf,
  source_root: PathBuf,
}

impl BuildLayout {
  /// Layout rooted at `start_dir`, with the checkout at `<start_dir>/v8`.
  pub fn new(start_dir: impl Into<PathBuf>) -> Self {
    let start_dir = start_dir.into();
    let source_root = start_dir.join(SOURCE_PROJECT);
    Self { start_dir, source_root }
  }

  pub fn start_dir(&self) -> &Path {
    &self.start_dir
  }

  pub fn source_root(&self) -> &Path {
    &self.source_root
  }

  /// Build directory for `arch` relative to the source root, as handed to `gn`
  /// and `ninja` (e.g. `out/release.arm64`).
  pub fn build_dir_rel(&self, arch: &str) -> PathBuf {
    Path::new(BUILD_OUT_DIR).join(format!("release.{}", arch))
  }

  /// Absolute build directory for `arch`.
  pub fn build_dir(&self, arch: &str) -> PathBuf {
    self.source_root.join(self.build_dir_rel(arch))
  }

  /// `args.gn` path inside the build directory for `arch`.
  pub fn args_file(&self, arch: &str) -> PathBuf {
    self.build_dir(arch).join(GN_ARGS_FILE)
  }

  /// Output directory for `arch`, named `<platform>_<arch>` under the start directory.
  pub fn output_dir(&self, platform: &str, arch: &str) -> PathBuf {
    self.start_dir.join(format!("{}_{}", platform, arch))
  }
}
