//! The build sequence.
//!
//! A run fetches the checkout if needed, pins and syncs it, then builds each
//! requested architecture in order:
//!
//! 1. create the output directory `<start>/<platform>_<arch>`
//! 2. create the build directory `v8/out/release.<arch>`
//! 3. write `args.gn`
//! 4. `gn gen out/release.<arch>`
//! 5. `ninja -C out/release.<arch> <targets>`
//! 6. collect artifacts into the output directory
//!
//! The first failure ends the run. Nothing is rolled back.

pub mod types;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::consts::SOURCE_PROJECT;
use crate::execute::ToolRunner;
use crate::gn;
use crate::layout::BuildLayout;
use crate::mode::BuildMode;
use crate::platform::Os;
use crate::util::fs;

pub use types::{ArchOutput, BuildError, BuildReport, BuildRequest, parse_arch_list};

/// Drives the external toolchain for a [`BuildRequest`].
pub struct Orchestrator<R> {
  runner: R,
  layout: BuildLayout,
  os: Option<Os>,
}

impl<R: ToolRunner> Orchestrator<R> {
  /// Orchestrator rooted at `start_dir` for the host OS.
  ///
  /// `start_dir` should be absolute; output paths are derived from it.
  pub fn new(runner: R, start_dir: impl Into<PathBuf>) -> Self {
    Self {
      runner,
      layout: BuildLayout::new(start_dir),
      os: Os::current(),
    }
  }

  /// Override the OS used for output directory names and library suffixes.
  pub fn with_os(mut self, os: Option<Os>) -> Self {
    self.os = os;
    self
  }

  pub fn layout(&self) -> &BuildLayout {
    &self.layout
  }

  /// Platform part of output directory names.
  ///
  /// Unsupported hosts fall back to the compile-time OS name.
  pub fn platform_name(&self) -> &'static str {
    self.os.map(|os| os.as_str()).unwrap_or(std::env::consts::OS)
  }

  /// Run the whole sequence for `request`.
  pub async fn run(&self, request: &BuildRequest) -> Result<BuildReport, BuildError> {
    info!(
      mode = %request.mode(),
      arches = ?request.arches(),
      start_dir = %self.layout.start_dir().display(),
      "starting build"
    );

    let source_root = self.prepare_source(request.version()).await?;

    let mut outputs = Vec::with_capacity(request.arches().len());
    for arch in request.arches() {
      let output = self.build_arch(&source_root, request.mode(), arch).await?;
      outputs.push(output);
    }

    Ok(BuildReport {
      mode: request.mode(),
      version: request.version().map(str::to_string),
      outputs,
    })
  }

  /// Fetch, pin and sync the checkout. Returns the source root.
  async fn prepare_source(&self, version: Option<&str>) -> Result<PathBuf, BuildError> {
    let source_root = self.layout.source_root().to_path_buf();

    if fs::is_dir(&source_root) {
      debug!(path = %source_root.display(), "source root exists, skipping fetch");
    } else {
      self.tool(self.layout.start_dir(), &["fetch", SOURCE_PROJECT]).await?;
    }

    if !fs::is_dir(&source_root) {
      return Err(BuildError::MissingSourceRoot { path: source_root });
    }
    info!(path = %source_root.display(), "using source root");

    if let Some(version) = version {
      self.tool(&source_root, &["git", "checkout", version]).await?;
    }
    self.tool(&source_root, &["gclient", "sync"]).await?;

    Ok(source_root)
  }

  async fn build_arch(&self, source_root: &Path, mode: BuildMode, arch: &str) -> Result<ArchOutput, BuildError> {
    info!(arch = %arch, "building architecture");

    let output_dir = self.layout.output_dir(self.platform_name(), arch);
    fs::create_dir_all(&output_dir)?;

    let build_dir = self.layout.build_dir(arch);
    fs::create_dir_all(&build_dir)?;

    fs::write_file(&self.layout.args_file(arch), &gn::generate(mode, arch))?;

    let build_dir_rel = self.layout.build_dir_rel(arch).to_string_lossy().into_owned();
    self.tool(source_root, &["gn", "gen", &build_dir_rel]).await?;

    let mut ninja = vec!["ninja", "-C", build_dir_rel.as_str()];
    ninja.extend_from_slice(mode.ninja_targets());
    self.tool(source_root, &ninja).await?;

    let artifacts = mode.collect(&build_dir, &output_dir, self.os)?;

    Ok(ArchOutput {
      arch: arch.to_string(),
      build_dir,
      output_dir,
      artifacts,
    })
  }

  async fn tool(&self, cwd: &Path, argv: &[&str]) -> Result<(), BuildError> {
    let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
    self.runner.run(cwd, &argv).await?;
    Ok(())
  }
}
