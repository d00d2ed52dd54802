//! Implementation of the build run.
//!
//! Resolves mode-dependent defaults, then either previews the generated
//! `args.gn` files or drives the full fetch, sync, generate, build and
//! collect sequence from the current directory.

use std::time::Instant;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use v8build_lib::gn;
use v8build_lib::orchestrate::{BuildReport, BuildRequest, Orchestrator, parse_arch_list};
use v8build_lib::platform::{Os, default_arches};
use v8build_lib::{BuildMode, ProcessRunner};

use crate::output::{OutputFormat, format_duration, print_info, print_json, print_stat, print_success, symbols};

/// Options collected from the command line.
pub struct BuildOptions {
  pub version: Option<String>,
  pub arches: Option<String>,
  pub mode: BuildMode,
  pub print_args: bool,
  pub format: OutputFormat,
}

/// Comma-delimited architectures built when `--arches` is not given.
fn default_arch_list() -> String {
  default_arches(Os::current())
    .iter()
    .map(|a| a.as_str())
    .collect::<Vec<_>>()
    .join(",")
}

pub fn cmd_build(options: BuildOptions) -> Result<()> {
  let mode = options.mode;
  let version = options
    .version
    .or_else(|| mode.default_version().map(str::to_string));
  let arch_list = options.arches.unwrap_or_else(default_arch_list);
  debug!(mode = %mode, version = ?version, arches = %arch_list, "resolved build options");

  let request = BuildRequest::new(version, parse_arch_list(&arch_list), mode).context("Invalid build request")?;

  if options.print_args {
    print_generated_args(&request);
    return Ok(());
  }

  let start_dir = std::env::current_dir().context("Failed to determine current directory")?;
  let orchestrator = Orchestrator::new(ProcessRunner, start_dir);

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let started = Instant::now();
  let report = rt.block_on(orchestrator.run(&request)).context("Build failed")?;
  let elapsed = started.elapsed();

  if options.format.is_json() {
    print_json(&report)?;
  } else {
    print_summary(&report, &format_duration(elapsed));
  }

  Ok(())
}

fn print_generated_args(request: &BuildRequest) {
  for arch in request.arches() {
    println!("# {}", arch);
    print!("{}", gn::generate(request.mode(), arch));
  }
}

fn print_summary(report: &BuildReport, elapsed: &str) {
  println!();
  print_success(&format!(
    "Built {} architecture(s) in {}",
    report.outputs.len(),
    elapsed
  ));
  print_stat("Mode", report.mode.as_str());
  print_stat("Version", report.version.as_deref().unwrap_or("(current checkout)"));
  print_stat("Artifacts", &report.artifact_count().to_string());

  for output in &report.outputs {
    print_info(&format!("{} {}", output.arch, output.output_dir.display()));
    for artifact in &output.artifacts {
      println!(
        "    {} {}",
        symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.dimmed()),
        artifact.display()
      );
    }
  }
}
