//! v8build-lib: orchestration core for building V8 with depot_tools
//!
//! This crate provides:
//! - `gn`: `args.gn` generation from a mode's base block and a target architecture
//! - `mode`: the shared-component and monolithic-static build strategies
//! - `execute`: running external tools with inherited standard streams
//! - `orchestrate`: the fetch, sync, generate, build and collect sequence

pub mod consts;
pub mod execute;
pub mod gn;
pub mod layout;
pub mod mode;
pub mod orchestrate;
pub mod platform;
pub mod util;

pub use execute::{ProcessError, ProcessRunner, ToolRunner};
pub use mode::BuildMode;
pub use orchestrate::{ArchOutput, BuildError, BuildReport, BuildRequest, Orchestrator};
