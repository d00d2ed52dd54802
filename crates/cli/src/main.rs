use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use v8build_lib::BuildMode;

mod cmd;
mod output;

use output::OutputFormat;

/// Build V8 shared or static libraries with depot_tools
///
/// Fetches and syncs the V8 checkout in ./v8, then builds each requested
/// architecture and copies the results into ./<platform>_<arch>.
#[derive(Parser)]
#[command(name = "v8build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// V8 git reference to check out [default: remotes/branch-heads/9.4 for shared builds, none for monolithic]
  #[arg(long = "v8-version", env = "V8BUILD_V8_VERSION")]
  v8_version: Option<String>,

  /// Comma-delimited list of architectures to build for [default: arm64,amd64 on macOS, amd64 elsewhere]
  #[arg(long, env = "V8BUILD_ARCHES")]
  arches: Option<String>,

  /// Kind of library to build: shared (component build) or monolithic (static archive)
  #[arg(long, default_value = "shared", env = "V8BUILD_MODE")]
  mode: BuildMode,

  /// Print the generated args.gn for each architecture and exit
  #[arg(long)]
  print_args: bool,

  /// Format of the final summary
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  cmd::cmd_build(cmd::BuildOptions {
    version: cli.v8_version,
    arches: cli.arches,
    mode: cli.mode,
    print_args: cli.print_args,
    format: cli.output,
  })
}
