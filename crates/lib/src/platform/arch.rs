use super::os::Os;

/// Target CPU architectures with a known `gn` mapping.
///
/// Architectures are named the way callers pass them on the command line
/// (`amd64`, `arm64`), not the way `gn` spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
  Amd64,
  Arm64,
}

impl Arch {
  /// Look up a known architecture by its command-line identifier.
  ///
  /// Returns `None` for anything else; callers decide whether that matters.
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "amd64" => Some(Self::Amd64),
      "arm64" => Some(Self::Arm64),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Amd64 => "amd64",
      Self::Arm64 => "arm64",
    }
  }

  /// Value for `target_cpu` and `v8_target_cpu` in `args.gn`
  pub fn gn_cpu(&self) -> &'static str {
    match self {
      Self::Amd64 => "x64",
      Self::Arm64 => "arm64",
    }
  }
}

/// Architectures built when the caller doesn't name any.
///
/// macOS hosts build both slices; everything else builds amd64 only.
pub fn default_arches(os: Option<Os>) -> Vec<Arch> {
  match os {
    Some(Os::MacOs) => vec![Arch::Arm64, Arch::Amd64],
    _ => vec![Arch::Amd64],
  }
}
