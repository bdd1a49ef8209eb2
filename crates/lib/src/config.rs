//! Sequence configuration.
//!
//! Values are layered: built-in defaults, then `TMPBUILD_*` environment
//! variables, then whatever the caller (usually the CLI) overrides.

use std::ffi::OsString;
use std::path::PathBuf;

use serde::Serialize;

use crate::consts::{
  DEFAULT_BUILD_ID, DEFAULT_COMPILER, DEFAULT_EXTENSION, DEFAULT_TEMP_PREFIX, ENV_BUILD_ID, ENV_COMPILER,
  ENV_TMPDIR, MARKER_VALUE, MARKER_VAR,
};

/// Environment variable telling a child process it is a nested run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
  pub name: String,
  pub value: String,
}

impl Default for Marker {
  fn default() -> Self {
    Self {
      name: MARKER_VAR.to_string(),
      value: MARKER_VALUE.to_string(),
    }
  }
}

impl Marker {
  /// Returns true if the current process was started with the marker set.
  pub fn is_active(&self) -> bool {
    std::env::var_os(&self.name).is_some_and(|v| v == self.value.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
  /// Compiler name (searched on PATH) or path.
  pub compiler: String,
  /// Source file extension, without the dot.
  pub extension: String,
  pub build_id: String,
  pub temp_prefix: String,
  /// Directory for the reserved artifact; the platform temp dir when unset.
  pub temp_dir: Option<PathBuf>,
  /// PATH-style list used to find the compiler; the process PATH when unset.
  #[serde(skip)]
  pub search_path: Option<OsString>,
  pub marker: Marker,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      compiler: DEFAULT_COMPILER.to_string(),
      extension: DEFAULT_EXTENSION.to_string(),
      build_id: DEFAULT_BUILD_ID.to_string(),
      temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
      temp_dir: None,
      search_path: None,
      marker: Marker::default(),
    }
  }
}

impl Config {
  /// Defaults overlaid with `TMPBUILD_COMPILER`, `TMPBUILD_BUILD_ID` and `TMPBUILD_TMPDIR`.
  pub fn from_env() -> Self {
    let mut config = Self::default();
    if let Some(compiler) = env_override(ENV_COMPILER) {
      config.compiler = compiler;
    }
    if let Some(build_id) = env_override(ENV_BUILD_ID) {
      config.build_id = build_id;
    }
    if let Some(dir) = env_override(ENV_TMPDIR) {
      config.temp_dir = Some(PathBuf::from(dir));
    }
    config
  }
}

// Empty values count as unset.
fn env_override(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|v| !v.is_empty())
}
