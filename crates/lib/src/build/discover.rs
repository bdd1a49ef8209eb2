//! Source file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::BuildError;

/// Human-readable pattern for the sources of `dir`, e.g. `/src/app/*.go`.
pub fn source_pattern(dir: &Path, extension: &str) -> String {
  dir.join(format!("*.{}", extension)).display().to_string()
}

/// List the files directly inside `dir` with the given extension, sorted by name.
///
/// Subdirectories are not searched. An unreadable directory is treated the
/// same as an empty one.
pub fn discover_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BuildError> {
  let sources: Vec<PathBuf> = WalkDir::new(dir)
    .min_depth(1)
    .max_depth(1)
    .sort_by_file_name()
    .into_iter()
    .filter_map(Result::ok)
    .filter(|entry| entry.path().is_file())
    .filter(|entry| entry.path().extension().is_some_and(|ext| ext == extension))
    .map(|entry| entry.into_path())
    .collect();

  if sources.is_empty() {
    return Err(BuildError::NoSources {
      pattern: source_pattern(dir, extension),
    });
  }

  Ok(sources)
}
