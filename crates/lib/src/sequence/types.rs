//! Sequence options and the report it produces.

use std::path::PathBuf;

use serde::Serialize;

use crate::build::BuildError;
use crate::execute::ExecutionReport;
use crate::inspect::Inspection;
use crate::util::display::serialize_opt_display;

/// Which optional steps a sequence runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceOptions {
  /// Run the artifact with the marker set after building it.
  pub execute: bool,
  /// Keep the artifact instead of deleting it.
  pub keep: bool,
}

/// Outcome of each step of one sequence. Steps that never ran are `None`.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
  /// Reserved artifact path, once the build succeeded.
  pub artifact: Option<PathBuf>,
  #[serde(serialize_with = "serialize_opt_display")]
  pub build_error: Option<BuildError>,
  pub execution: Option<ExecutionReport>,
  /// Inspection before cleanup.
  pub before: Option<Inspection>,
  pub removal_error: Option<String>,
  /// Where the artifact was kept, if it was.
  pub kept: Option<PathBuf>,
  /// Inspection after cleanup.
  pub after: Option<Inspection>,
}

impl RunReport {
  /// True when the build succeeded, the program (if run) exited zero and
  /// the artifact was removed or kept as asked.
  pub fn succeeded(&self) -> bool {
    self.build_error.is_none()
      && self.artifact.is_some()
      && self.execution.as_ref().is_none_or(ExecutionReport::succeeded)
      && self.removal_error.is_none()
  }
}
