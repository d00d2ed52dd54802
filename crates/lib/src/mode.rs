//! Build modes.
//!
//! A mode fixes three things: the base `args.gn` block, the `ninja` targets,
//! and how artifacts are pulled out of a finished build directory.
//!
//! The two collection rules disagree on what "nothing to collect" means.
//! A shared build that yields no matching libraries succeeds with an empty
//! artifact list; a monolithic build whose archive is missing fails. Callers
//! that care about an empty shared build must check the returned list.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, warn};

use crate::gn::{GnArgs, MONOLITHIC_STATIC_ARGS, SHARED_COMPONENT_ARGS};
use crate::platform::Os;
use crate::util::fs::{self, FsError};

/// Version reference checked out by default for component builds.
pub const DEFAULT_SHARED_VERSION: &str = "remotes/branch-heads/9.4";

/// Archive produced by the `v8_monolith` target, relative to the build directory.
pub const MONOLITH_ARCHIVE: &str = "obj/libv8_monolith.a";

/// Name the monolithic archive is given in the output directory.
pub const MONOLITH_OUTPUT_NAME: &str = "libv8.a";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
  /// `is_component_build=true`; collects every shared library.
  #[default]
  SharedComponent,
  /// `v8_monolithic=true`; collects the single static archive.
  MonolithicStatic,
}

impl BuildMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      BuildMode::SharedComponent => "shared",
      BuildMode::MonolithicStatic => "monolithic",
    }
  }

  pub fn base_args(&self) -> &'static GnArgs {
    match self {
      BuildMode::SharedComponent => &SHARED_COMPONENT_ARGS,
      BuildMode::MonolithicStatic => &MONOLITHIC_STATIC_ARGS,
    }
  }

  /// Targets passed to `ninja` after the build directory.
  pub fn ninja_targets(&self) -> &'static [&'static str] {
    match self {
      BuildMode::SharedComponent => &["v8", "v8_headers"],
      BuildMode::MonolithicStatic => &["v8_monolith"],
    }
  }

  /// Version reference to check out when the caller gives none.
  ///
  /// Monolithic builds have no default and build whatever is checked out.
  pub fn default_version(&self) -> Option<&'static str> {
    match self {
      BuildMode::SharedComponent => Some(DEFAULT_SHARED_VERSION),
      BuildMode::MonolithicStatic => None,
    }
  }

  /// Copy this mode's artifacts from `build_dir` into `output_dir`.
  ///
  /// Returns the paths written in `output_dir`. `os` selects the shared
  /// library suffix; `None` means an unsupported host where nothing matches.
  pub fn collect(&self, build_dir: &Path, output_dir: &Path, os: Option<Os>) -> Result<Vec<PathBuf>, FsError> {
    match self {
      BuildMode::SharedComponent => {
        let suffix = os.map(|os| os.shared_lib_suffix()).unwrap_or("");
        let libs = fs::files_with_extension(build_dir, suffix)?;
        if libs.is_empty() {
          warn!(build_dir = %build_dir.display(), suffix, "no shared libraries to collect");
        }
        let copied = fs::copy_all(&libs, output_dir)?;
        info!(count = copied.len(), output_dir = %output_dir.display(), "collected shared libraries");
        Ok(copied)
      }
      BuildMode::MonolithicStatic => {
        let src = build_dir.join(MONOLITH_ARCHIVE);
        let dest = output_dir.join(MONOLITH_OUTPUT_NAME);
        fs::copy_file(&src, &dest)?;
        Ok(vec![dest])
      }
    }
  }
}

impl fmt::Display for BuildMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Error returned when a mode name isn't recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown build mode: {0} (expected shared or monolithic)")]
pub struct ParseModeError(pub String);

impl FromStr for BuildMode {
  type Err = ParseModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "shared" => Ok(BuildMode::SharedComponent),
      "monolithic" => Ok(BuildMode::MonolithicStatic),
      other => Err(ParseModeError(other.to_string())),
    }
  }
}
