//! The composed build-run-cleanup flow.
//!
//! ```text
//! Start -> SourcesDiscovered -> Built -> [Executed] -> Inspected -> Cleaned -> Inspected(final) -> Done
//! ```
//!
//! Failures up to `Built` end the sequence. Everything after that is
//! best-effort: a failed execution or removal is recorded in the
//! [`RunReport`] and the remaining steps still run.

mod types;

use std::path::Path;

use tracing::{error, info, warn};

use crate::build::{BuildError, build_in};
use crate::config::Config;
use crate::execute::{ExecutionReport, child_env, execute};
use crate::inspect::inspect;

pub use types::{RunReport, SequenceOptions};

/// Run the sequence against the sources in `dir`.
pub async fn run_sequence(dir: &Path, config: &Config, options: &SequenceOptions) -> RunReport {
  let mut report = RunReport::default();

  let artifact = match build_in(dir, config).await {
    Ok(artifact) => artifact,
    Err(err) => {
      error!(error = %err, "build failed");
      report.build_error = Some(err);
      return report;
    }
  };
  report.artifact = Some(artifact.path().to_path_buf());
  info!(path = %artifact.path().display(), "build complete");

  if options.execute {
    let env = child_env(&config.marker);
    let result = execute(artifact.path(), &env).await;
    if let Err(ref err) = result {
      warn!(error = %err, "program failed");
    }
    report.execution = Some(ExecutionReport::from(&result));
  }

  let path = artifact.path().to_path_buf();
  report.before = Some(inspect(&path));

  if options.keep {
    match artifact.keep() {
      Ok(kept) => report.kept = Some(kept),
      Err(err) => report.removal_error = Some(err.to_string()),
    }
  } else if let Err(err) = artifact.remove() {
    warn!(path = %path.display(), error = %err, "failed to remove artifact");
    report.removal_error = Some(err.to_string());
  }

  report.after = Some(inspect(&path));
  report
}

/// [`run_sequence`] for the current working directory.
pub async fn run_sequence_cwd(config: &Config, options: &SequenceOptions) -> RunReport {
  match std::env::current_dir() {
    Ok(dir) => run_sequence(&dir, config, options).await,
    Err(err) => RunReport {
      build_error: Some(BuildError::WorkingDir(err)),
      ..RunReport::default()
    },
  }
}
