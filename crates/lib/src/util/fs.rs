//! Filesystem helpers used by the orchestrator.
//!
//! Every mutation is logged and every failure carries the path involved.
//! Nothing here retries.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Errors from filesystem side effects.
#[derive(Debug, Error)]
pub enum FsError {
  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },

  #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
  Copy {
    from: PathBuf,
    to: PathBuf,
    source: std::io::Error,
  },

  #[error("failed to read directory {}: {message}", path.display())]
  ReadDir { path: PathBuf, message: String },
}

/// Whether `path` exists and is itself a directory.
///
/// Symlinks are not followed.
pub fn is_dir(path: &Path) -> bool {
  fs::symlink_metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Create `path` and any missing parents. Existing directories are reused.
pub fn create_dir_all(path: &Path) -> Result<(), FsError> {
  fs::create_dir_all(path).map_err(|e| FsError::CreateDir {
    path: path.to_path_buf(),
    source: e,
  })?;
  info!(path = %path.display(), "mkdir");
  Ok(())
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_file(path: &Path, contents: &str) -> Result<(), FsError> {
  fs::write(path, contents).map_err(|e| FsError::WriteFile {
    path: path.to_path_buf(),
    source: e,
  })?;
  info!(path = %path.display(), "write");
  Ok(())
}

/// Copy the file at `from` to `to`, overwriting `to` if it exists.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64, FsError> {
  let bytes = fs::copy(from, to).map_err(|e| FsError::Copy {
    from: from.to_path_buf(),
    to: to.to_path_buf(),
    source: e,
  })?;
  info!(from = %from.display(), to = %to.display(), bytes, "cp");
  Ok(bytes)
}

/// Copy each of `sources` into `dest_dir`, keeping file names.
///
/// Returns the destination paths in the order of `sources`.
pub fn copy_all(sources: &[PathBuf], dest_dir: &Path) -> Result<Vec<PathBuf>, FsError> {
  let mut copied = Vec::with_capacity(sources.len());
  for src in sources {
    let Some(name) = src.file_name() else {
      continue;
    };
    let dest = dest_dir.join(name);
    copy_file(src, &dest)?;
    copied.push(dest);
  }
  Ok(copied)
}

/// List regular files directly inside `dir` whose extension is `extension`.
///
/// Subdirectories are not searched. Symlinks are kept when their target is a
/// regular file. An empty `extension` matches nothing.
/// Results are sorted by file name.
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FsError> {
  if extension.is_empty() {
    debug!(dir = %dir.display(), "no extension to match, skipping scan");
    return Ok(Vec::new());
  }

  let mut matches = Vec::new();
  let walker = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();

  for entry in walker {
    let entry = entry.map_err(|e| FsError::ReadDir {
      path: dir.to_path_buf(),
      message: e.to_string(),
    })?;

    // Symlinked libraries (libv8.so -> libv8.so.1) count when they resolve to a file.
    if !entry.path().is_file() {
      continue;
    }

    let matched = entry.path().extension().and_then(|e| e.to_str()) == Some(extension);
    if matched {
      matches.push(entry.into_path());
    }
  }

  debug!(dir = %dir.display(), extension, count = matches.len(), "matched files");
  Ok(matches)
}
