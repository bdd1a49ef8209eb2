//! Types for artifact execution.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running the artifact.
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// The program ran and exited with a non-zero code. This is the common
  /// user-facing failure, not a fault in the sequence itself.
  #[error("program exited with non-zero exit code: {code}")]
  Exited { code: i32 },

  #[error("command errored unexpectedly: failed to start {}: {source}", program.display())]
  Spawn {
    program: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The program ended without an exit code (e.g. killed by a signal).
  #[error("program exited unexpectedly: {detail}")]
  Unexpected { detail: String },
}

impl ExecuteError {
  /// True if the program itself reported the failure through its exit code.
  pub fn is_reported(&self) -> bool {
    matches!(self, ExecuteError::Exited { .. })
  }

  pub fn exit_code(&self) -> Option<i32> {
    match self {
      ExecuteError::Exited { code } => Some(*code),
      _ => None,
    }
  }
}

/// Serializable summary of one execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionReport {
  Succeeded,
  Exited { code: i32, message: String },
  Unexpected { message: String },
}

impl ExecutionReport {
  pub fn succeeded(&self) -> bool {
    matches!(self, ExecutionReport::Succeeded)
  }
}

impl From<&Result<(), ExecuteError>> for ExecutionReport {
  fn from(result: &Result<(), ExecuteError>) -> Self {
    match result {
      Ok(()) => ExecutionReport::Succeeded,
      Err(err) => match err.exit_code() {
        Some(code) => ExecutionReport::Exited {
          code,
          message: err.to_string(),
        },
        None => ExecutionReport::Unexpected {
          message: err.to_string(),
        },
      },
    }
  }
}
