//! `args.gn` generation.
//!
//! A build directory's configuration is the active mode's base block followed
//! by the cpu pinning for the target architecture. Architectures without a
//! known mapping get the base block alone; `gn` is left to reject or accept
//! the result.

pub mod args;

pub use args::{GnArgs, GnValue, MONOLITHIC_STATIC_ARGS, SHARED_COMPONENT_ARGS};

use crate::mode::BuildMode;
use crate::platform::Arch;

/// Generate the `args.gn` text for `arch` under `mode`.
pub fn generate(mode: BuildMode, arch: &str) -> String {
  render(mode.base_args(), arch)
}

/// Render `base` plus the cpu pinning lines for `arch`.
pub fn render(base: &GnArgs, arch: &str) -> String {
  let mut out = base.render();
  if let Some(arch) = Arch::parse(arch) {
    let cpu = GnValue::Str(arch.gn_cpu());
    out.push_str(&format!("target_cpu={}\n", cpu));
    out.push_str(&format!("v8_target_cpu={}\n", cpu));
  }
  out
}
