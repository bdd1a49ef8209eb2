//! Error type for the build half of a sequence.

use std::io;

use thiserror::Error;

/// Errors that can occur while producing an artifact.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The current directory could not be resolved.
  #[error("unable to get current working directory: {0}")]
  WorkingDir(#[source] io::Error),

  /// No file in the source directory matched the pattern.
  #[error("failed to find source files for build matching {pattern}")]
  NoSources { pattern: String },

  /// The temp file backing the artifact could not be created.
  #[error("unable to create program temp file: {0}")]
  Reserve(#[source] io::Error),

  #[error("unable to find '{name}' executable: {source}")]
  CompilerNotFound {
    name: String,
    #[source]
    source: which::Error,
  },

  /// The compiler process could not be started.
  #[error("unable to run `{compiler} build`: {source}")]
  Spawn {
    compiler: String,
    #[source]
    source: io::Error,
  },

  /// The compiler ran and exited non-zero (`None` when killed by a signal).
  #[error("`{compiler} build` failed: {}", describe_exit(.code))]
  CompilerFailed { compiler: String, code: Option<i32> },

  #[error("unable to keep artifact: {0}")]
  Keep(#[source] io::Error),
}

impl BuildError {
  /// True for the not-found class: missing sources or missing compiler.
  pub fn is_not_found(&self) -> bool {
    matches!(self, BuildError::NoSources { .. } | BuildError::CompilerNotFound { .. })
  }

  /// True if the compiler was found and started but the build itself failed.
  pub fn is_compile_failure(&self) -> bool {
    matches!(self, BuildError::Spawn { .. } | BuildError::CompilerFailed { .. })
  }
}

fn describe_exit(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("exit code {}", code),
    None => "terminated by a signal".to_string(),
  }
}
