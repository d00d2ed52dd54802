//! Shared test helpers for CLI integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;
use v8build_lib::platform::Os;

/// Appends `<cwd>|<tool> <args>` to `$TOOL_LOG` for every invocation.
const LOG_PREAMBLE: &str = r#"#!/bin/sh
echo "$(pwd -P)|$(basename "$0") $*" >> "$TOOL_LOG"
"#;

const FETCH: &str = r#"mkdir -p "$1"
"#;

/// Produces one library per platform suffix, a non-library file, and the
/// monolithic archive. `NINJA_FAIL_ON` names a build directory to fail in;
/// `NINJA_NO_LIBS` skips writing shared libraries.
const NINJA: &str = r#"dir="$2"
if [ -n "$NINJA_FAIL_ON" ] && [ "$dir" = "$NINJA_FAIL_ON" ]; then
  echo "ninja: build stopped: subcommand failed." >&2
  exit 1
fi
if [ -n "$NINJA_NO_LIBS" ]; then
  exit 0
fi
printf 'so' > "$dir/libv8.so"
printf 'dylib' > "$dir/libv8.dylib"
printf 'dll' > "$dir/libv8.dll"
printf '' > "$dir/build.ninja"
mkdir -p "$dir/obj"
printf 'monolith' > "$dir/obj/libv8_monolith.a"
"#;

fn host_os() -> Os {
  Os::current().expect("tests run on a supported host")
}

/// Output directory prefix for the host, matching what v8build uses.
pub fn platform() -> &'static str {
  host_os().as_str()
}

/// Shared library suffix for the host.
pub fn shared_lib_suffix() -> &'static str {
  host_os().shared_lib_suffix()
}

/// Isolated working directory plus a bin directory of fake tools.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let env = Self {
      temp: TempDir::new().unwrap(),
    };
    fs::create_dir_all(env.work_dir()).unwrap();
    fs::create_dir_all(env.bin_dir()).unwrap();
    env.install_tool("fetch", FETCH);
    env.install_tool("git", "");
    env.install_tool("gclient", "");
    env.install_tool("gn", "");
    env.install_tool("ninja", NINJA);
    env
  }

  fn install_tool(&self, name: &str, body: &str) {
    let path = self.bin_dir().join(name);
    fs::write(&path, format!("{}{}", LOG_PREAMBLE, body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
  }

  /// Remove a fake tool so invoking it fails to launch.
  pub fn remove_tool(&self, name: &str) {
    fs::remove_file(self.bin_dir().join(name)).unwrap();
  }

  /// Directory v8build runs in (canonicalized so it matches `pwd -P`).
  pub fn work_dir(&self) -> PathBuf {
    let p = self.temp.path().join("work");
    fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  pub fn bin_dir(&self) -> PathBuf {
    self.temp.path().join("bin")
  }

  pub fn log_path(&self) -> PathBuf {
    self.temp.path().join("tools.log")
  }

  pub fn output_dir(&self, arch: &str) -> PathBuf {
    self.work_dir().join(format!("{}_{}", platform(), arch))
  }

  pub fn source_root(&self) -> PathBuf {
    self.work_dir().join("v8")
  }

  /// Logged invocations as `(cwd, "tool args...")`.
  pub fn tool_calls(&self) -> Vec<(PathBuf, String)> {
    let Ok(log) = fs::read_to_string(self.log_path()) else {
      return Vec::new();
    };
    log
      .lines()
      .map(|line| {
        let (cwd, cmd) = line.split_once('|').unwrap();
        (PathBuf::from(cwd), cmd.to_string())
      })
      .collect()
  }

  /// Logged invocations without their working directories.
  pub fn tool_commands(&self) -> Vec<String> {
    self.tool_calls().into_iter().map(|(_, cmd)| cmd).collect()
  }

  /// Get a pre-configured Command for the v8build binary.
  ///
  /// Runs in the work directory with only the fake tools and the system
  /// directories on `PATH`.
  pub fn v8build_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("v8build");
    cmd.current_dir(self.work_dir());
    cmd.env("PATH", format!("{}:/usr/bin:/bin", self.bin_dir().display()));
    cmd.env("TOOL_LOG", self.log_path());
    cmd.env_remove("V8BUILD_V8_VERSION");
    cmd.env_remove("V8BUILD_ARCHES");
    cmd.env_remove("V8BUILD_MODE");
    cmd.env_remove("NINJA_FAIL_ON");
    cmd.env_remove("NINJA_NO_LIBS");
    cmd
  }
}

/// Sorted file names directly inside `dir`.
pub fn listing(dir: &Path) -> Vec<String> {
  let mut names: Vec<String> = fs::read_dir(dir)
    .unwrap()
    .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  names.sort();
  names
}
