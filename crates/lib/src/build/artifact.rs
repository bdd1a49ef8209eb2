//! Reserved temp path for the compiled program.
//!
//! The path is reserved by creating (and immediately closing) a uniquely
//! named empty file; the compiler then overwrites it. An [`Artifact`] owns
//! that path: it is deleted by [`Artifact::remove`], or on drop if the
//! sequence never got that far.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempPath;
use tracing::{debug, warn};

use super::BuildError;

#[derive(Debug)]
pub struct Artifact {
  path: PathBuf,
  guard: Option<TempPath>,
}

impl Artifact {
  /// Reserve `<prefix>.<build_id>.<random>` in `temp_dir` (or the platform temp dir).
  pub fn reserve(build_id: &str, prefix: &str, temp_dir: Option<&Path>) -> Result<Self, BuildError> {
    let name_prefix = format!("{}.{}.", prefix, build_id);
    let mut builder = tempfile::Builder::new();
    builder.prefix(&name_prefix);

    let file = match temp_dir {
      Some(dir) => builder.tempfile_in(dir),
      None => builder.tempfile(),
    }
    .map_err(BuildError::Reserve)?;

    // Closes the handle; only the name stays reserved.
    let guard = file.into_temp_path();
    let path = guard.to_path_buf();
    debug!(path = %path.display(), "reserved artifact path");

    Ok(Self {
      path,
      guard: Some(guard),
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Delete the artifact, reporting any failure.
  pub fn remove(mut self) -> io::Result<()> {
    match self.guard.take() {
      Some(guard) => guard.close(),
      None => Ok(()),
    }
  }

  /// Persist the artifact past the end of the sequence and return its path.
  pub fn keep(mut self) -> Result<PathBuf, BuildError> {
    match self.guard.take() {
      Some(guard) => guard.keep().map_err(|e| BuildError::Keep(e.error)),
      None => Ok(self.path.clone()),
    }
  }
}

impl Drop for Artifact {
  fn drop(&mut self) {
    let Some(guard) = self.guard.take() else {
      return;
    };
    if let Err(err) = guard.close() {
      if err.kind() != io::ErrorKind::NotFound {
        warn!(path = %self.path.display(), error = %err, "failed to clean up artifact");
      }
    }
  }
}
