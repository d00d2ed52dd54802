//! Full build runs against the fake toolchain.

use predicates::prelude::*;

use super::common::{TestEnv, listing, platform, shared_lib_suffix};

#[test]
fn shared_build_runs_full_sequence() {
  let env = TestEnv::new();

  env
    .v8build_cmd()
    .args(["--arches", "amd64"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Built 1 architecture(s)"));

  assert_eq!(
    env.tool_commands(),
    vec![
      "fetch v8",
      "git checkout remotes/branch-heads/9.4",
      "gclient sync",
      "gn gen out/release.amd64",
      "ninja -C out/release.amd64 v8 v8_headers",
    ]
  );
}

#[test]
fn tools_run_in_the_right_directories() {
  let env = TestEnv::new();

  env.v8build_cmd().args(["--arches", "amd64"]).assert().success();

  let calls = env.tool_calls();
  assert_eq!(calls[0].0, env.work_dir());
  for (cwd, cmd) in &calls[1..] {
    assert_eq!(cwd, &env.source_root(), "{}", cmd);
  }
}

#[test]
fn shared_build_collects_host_libraries() {
  let env = TestEnv::new();

  env.v8build_cmd().args(["--arches", "amd64"]).assert().success();

  let lib = format!("libv8.{}", shared_lib_suffix());
  assert_eq!(listing(&env.output_dir("amd64")), vec![lib]);
}

#[test]
fn args_gn_is_written_per_arch() {
  let env = TestEnv::new();

  env
    .v8build_cmd()
    .args(["--arches", "amd64,arm64"])
    .assert()
    .success();

  let out = env.source_root().join("out");
  let amd64 = std::fs::read_to_string(out.join("release.amd64").join("args.gn")).unwrap();
  let arm64 = std::fs::read_to_string(out.join("release.arm64").join("args.gn")).unwrap();
  assert!(amd64.contains("target_cpu=\"x64\"\n"));
  assert!(arm64.contains("target_cpu=\"arm64\"\n"));
}

#[test]
fn multi_arch_build_creates_one_output_dir_per_arch() {
  let env = TestEnv::new();

  env
    .v8build_cmd()
    .args(["--arches", "amd64,arm64"])
    .assert()
    .success();

  let dirs: Vec<String> = listing(&env.work_dir())
    .into_iter()
    .filter(|n| n.starts_with(&format!("{}_", platform())))
    .collect();
  assert_eq!(
    dirs,
    vec![format!("{}_amd64", platform()), format!("{}_arm64", platform())]
  );
}

#[test]
fn monolithic_build_collects_renamed_archive() {
  let env = TestEnv::new();

  env
    .v8build_cmd()
    .args(["--mode", "monolithic", "--arches", "amd64,arm64"])
    .assert()
    .success();

  for arch in ["amd64", "arm64"] {
    let out = env.output_dir(arch);
    assert_eq!(listing(&out), vec!["libv8.a"]);
    assert_eq!(std::fs::read_to_string(out.join("libv8.a")).unwrap(), "monolith");
  }

  let commands = env.tool_commands();
  assert!(commands.iter().all(|c| !c.starts_with("git")));
  assert!(commands.contains(&"ninja -C out/release.arm64 v8_monolith".to_string()));
}

#[test]
fn explicit_version_is_checked_out() {
  let env = TestEnv::new();

  env
    .v8build_cmd()
    .args(["--mode", "monolithic", "--v8-version", "11.1.277.13", "--arches", "amd64"])
    .assert()
    .success();

  assert!(env.tool_commands().contains(&"git checkout 11.1.277.13".to_string()));
}

#[test]
fn existing_checkout_skips_fetch() {
  let env = TestEnv::new();
  std::fs::create_dir_all(env.source_root()).unwrap();

  env.v8build_cmd().args(["--arches", "amd64"]).assert().success();

  assert!(env.tool_commands().iter().all(|c| !c.starts_with("fetch")));
}

#[test]
fn ninja_failure_stops_the_run() {
  let env = TestEnv::new();

  env
    .v8build_cmd()
    .args(["--arches", "amd64,arm64"])
    .env("NINJA_FAIL_ON", "out/release.amd64")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Build failed"))
    .stderr(predicate::str::contains("ninja -C out/release.amd64"));

  assert!(env.output_dir("amd64").is_dir());
  assert!(!env.output_dir("arm64").exists());
  assert!(env.tool_commands().iter().all(|c| !c.contains("release.arm64")));
}

#[test]
fn missing_tool_fails_to_launch() {
  let env = TestEnv::new();
  env.remove_tool("gclient");

  env
    .v8build_cmd()
    .args(["--arches", "amd64"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to launch gclient"));

  assert!(!env.output_dir("amd64").exists());
}

#[test]
fn rerun_overwrites_collected_artifacts() {
  let env = TestEnv::new();
  let archive = env.output_dir("amd64").join("libv8.a");

  env
    .v8build_cmd()
    .args(["--mode", "monolithic", "--arches", "amd64"])
    .assert()
    .success();
  std::fs::write(&archive, "stale").unwrap();

  env
    .v8build_cmd()
    .args(["--mode", "monolithic", "--arches", "amd64"])
    .assert()
    .success();

  assert_eq!(std::fs::read_to_string(&archive).unwrap(), "monolith");
  assert_eq!(listing(&env.output_dir("amd64")), vec!["libv8.a"]);
}

#[test]
fn json_output_describes_the_run() {
  let env = TestEnv::new();

  let assert = env
    .v8build_cmd()
    .args(["--mode", "monolithic", "--arches", "arm64", "--output", "json"])
    .assert()
    .success();

  let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
  assert_eq!(report["mode"], "monolithic_static");
  assert!(report["version"].is_null());
  assert_eq!(report["outputs"][0]["arch"], "arm64");
  assert_eq!(
    report["outputs"][0]["artifacts"][0],
    env.output_dir("arm64").join("libv8.a").display().to_string()
  );
}

#[test]
fn empty_shared_build_warns_once_and_succeeds() {
  let env = TestEnv::new();

  let assert = env
    .v8build_cmd()
    .args(["--arches", "amd64"])
    .env("NINJA_NO_LIBS", "1")
    .assert()
    .success();

  let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
  assert_eq!(stderr.matches("no shared libraries to collect").count(), 1, "{}", stderr);
  assert!(listing(&env.output_dir("amd64")).is_empty());
}
