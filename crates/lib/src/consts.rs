//! Names and paths shared by the orchestrator and the CLI.

/// Project name passed to `fetch`, which also names the checkout directory.
pub const SOURCE_PROJECT: &str = "v8";

/// Parent of every per-architecture build directory, relative to the source root.
pub const BUILD_OUT_DIR: &str = "out";

/// File `gn` reads its arguments from inside a build directory.
pub const GN_ARGS_FILE: &str = "args.gn";
