//! Compiler lookup.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::BuildError;

/// A compiler resolved to an executable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
  name: String,
  path: PathBuf,
}

impl Toolchain {
  /// Resolve `name` the way a shell would.
  ///
  /// A name containing a path separator is checked directly (relative to
  /// `cwd`). Otherwise it is searched in `search_path`, or in the process
  /// `PATH` when that is `None`.
  pub fn locate(name: &str, search_path: Option<&OsStr>, cwd: &Path) -> Result<Self, BuildError> {
    let resolved = match search_path {
      Some(paths) => which::which_in(name, Some(paths), cwd),
      None => which::which_in(name, std::env::var_os("PATH"), cwd),
    };

    let path = resolved.map_err(|source| BuildError::CompilerNotFound {
      name: name.to_string(),
      source,
    })?;
    debug!(compiler = %name, path = %path.display(), "located compiler");

    Ok(Self {
      name: name.to_string(),
      path,
    })
  }

  /// The name the compiler was looked up by.
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}
