//! Artifact inspection.
//!
//! Purely observational: a run inspects the artifact path once before and
//! once after cleanup, and the second lookup is expected to fail.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Inspection {
  Present {
    path: PathBuf,
    size: u64,
  },
  Missing {
    path: PathBuf,
    error: String,
    not_found: bool,
  },
}

impl Inspection {
  pub fn path(&self) -> &Path {
    match self {
      Inspection::Present { path, .. } | Inspection::Missing { path, .. } => path,
    }
  }

  pub fn size(&self) -> Option<u64> {
    match self {
      Inspection::Present { size, .. } => Some(*size),
      Inspection::Missing { .. } => None,
    }
  }

  pub fn is_missing(&self) -> bool {
    matches!(self, Inspection::Missing { .. })
  }

  /// True only when the lookup failed because nothing exists at the path.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Inspection::Missing { not_found: true, .. })
  }
}

/// Look up existence and size of `path`.
pub fn inspect(path: &Path) -> Inspection {
  match std::fs::metadata(path) {
    Ok(meta) => Inspection::Present {
      path: path.to_path_buf(),
      size: meta.len(),
    },
    Err(err) => Inspection::Missing {
      path: path.to_path_buf(),
      not_found: err.kind() == io::ErrorKind::NotFound,
      error: err.to_string(),
    },
  }
}
