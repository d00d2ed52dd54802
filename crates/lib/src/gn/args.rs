//! Typed `args.gn` entries and the base blocks for each build mode.

use std::fmt;

/// A single `gn` argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GnValue {
  Bool(bool),
  Int(i64),
  Str(&'static str),
}

impl fmt::Display for GnValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GnValue::Bool(b) => write!(f, "{}", b),
      GnValue::Int(n) => write!(f, "{}", n),
      GnValue::Str(s) => write!(f, "\"{}\"", s),
    }
  }
}

/// An ordered, immutable block of `gn` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GnArgs {
  entries: &'static [(&'static str, GnValue)],
}

impl GnArgs {
  pub const fn new(entries: &'static [(&'static str, GnValue)]) -> Self {
    Self { entries }
  }

  pub fn entries(&self) -> &'static [(&'static str, GnValue)] {
    self.entries
  }

  /// Look up the value of `key`, if the block sets it.
  pub fn get(&self, key: &str) -> Option<GnValue> {
    self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
  }

  /// Render as `key=value` lines, each terminated by a newline.
  pub fn render(&self) -> String {
    let mut out = String::new();
    for (key, value) in self.entries {
      out.push_str(&format!("{}={}\n", key, value));
    }
    out
  }
}

/// Component build: many small shared libraries, fast to iterate on.
pub const SHARED_COMPONENT_ARGS: GnArgs = GnArgs::new(&[
  ("is_debug", GnValue::Bool(false)),
  ("is_clang", GnValue::Bool(true)),
  ("symbol_level", GnValue::Int(0)),
  ("strip_debug_info", GnValue::Int(0)),
  ("clang_use_chrome_plugins", GnValue::Bool(false)),
  ("use_custom_libcxx", GnValue::Bool(false)),
  ("use_sysroot", GnValue::Bool(false)),
  ("is_component_build", GnValue::Bool(true)),
  ("v8_monolithic", GnValue::Bool(false)),
  ("v8_use_external_startup_data", GnValue::Bool(false)),
  ("treat_warnings_as_errors", GnValue::Bool(false)),
  ("v8_embedder_string", GnValue::Str("-v8go")),
  ("v8_enable_gdbjit", GnValue::Bool(false)),
  ("v8_enable_test_features", GnValue::Bool(false)),
  ("exclude_unwind_tables", GnValue::Bool(true)),
]);

/// Monolithic build: one self-contained static archive.
pub const MONOLITHIC_STATIC_ARGS: GnArgs = GnArgs::new(&[
  ("is_debug", GnValue::Bool(false)),
  ("is_clang", GnValue::Bool(true)),
  ("symbol_level", GnValue::Int(1)),
  ("strip_debug_info", GnValue::Bool(true)),
  ("clang_use_chrome_plugins", GnValue::Bool(false)),
  ("use_custom_libcxx", GnValue::Bool(false)),
  ("use_sysroot", GnValue::Bool(false)),
  ("is_component_build", GnValue::Bool(false)),
  ("v8_monolithic", GnValue::Bool(true)),
  ("v8_use_external_startup_data", GnValue::Bool(false)),
  ("treat_warnings_as_errors", GnValue::Bool(false)),
  ("v8_embedder_string", GnValue::Str("-v8go")),
  ("v8_enable_gdbjit", GnValue::Bool(false)),
  ("v8_enable_i18n_support", GnValue::Bool(true)),
  ("icu_use_data_file", GnValue::Bool(false)),
  ("v8_enable_test_features", GnValue::Bool(false)),
  ("exclude_unwind_tables", GnValue::Bool(true)),
]);
