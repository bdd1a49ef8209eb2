//! Implementation of the `tmpbuild run` and `tmpbuild build` commands.
//!
//! Both drive the same sequence; `run` additionally executes the artifact
//! with the marker variable set before it is cleaned up.

use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use tmpbuild_lib::config::Config;
use tmpbuild_lib::execute::ExecutionReport;
use tmpbuild_lib::inspect::Inspection;
use tmpbuild_lib::sequence::{RunReport, SequenceOptions, run_sequence, run_sequence_cwd};

use super::SequenceArgs;
use crate::output::{
  format_bytes, format_duration, print_failure, print_json, print_stat, print_success, print_warning,
};

#[derive(Serialize)]
struct JsonReport<'a> {
  succeeded: bool,
  #[serde(flatten)]
  report: &'a RunReport,
}

pub fn cmd_run(args: &SequenceArgs, config: Config) -> Result<()> {
  run_and_report(args, config, true)
}

pub fn cmd_build(args: &SequenceArgs, config: Config) -> Result<()> {
  run_and_report(args, config, false)
}

fn run_and_report(args: &SequenceArgs, mut config: Config, execute: bool) -> Result<()> {
  let start = Instant::now();
  args.apply_to(&mut config);

  let options = SequenceOptions {
    execute,
    keep: args.keep,
  };
  debug!(?config, ?options, "starting sequence");

  // One step at a time; nothing here runs concurrently.
  let rt = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;

  let report = rt.block_on(async {
    match &args.dir {
      Some(dir) => run_sequence(dir, &config, &options).await,
      None => run_sequence_cwd(&config, &options).await,
    }
  });

  if args.output.is_json() {
    print_json(&JsonReport {
      succeeded: report.succeeded(),
      report: &report,
    })?;
  } else {
    print_report(&report);
    print_stat("Duration", &format_duration(start.elapsed()));
  }

  if !report.succeeded() {
    std::process::exit(1);
  }

  Ok(())
}

fn print_report(report: &RunReport) {
  if let Some(err) = &report.build_error {
    print_failure(&format!("Build failed: {}", err));
    return;
  }

  if let Some(path) = &report.artifact {
    print_success("Build complete");
    print_stat("Artifact", &path.display().to_string());
  }

  match &report.execution {
    Some(ExecutionReport::Succeeded) => print_success("Program exited successfully"),
    Some(ExecutionReport::Exited { message, .. }) | Some(ExecutionReport::Unexpected { message }) => {
      print_failure(message)
    }
    None => {}
  }

  if let Some(before) = &report.before {
    print_inspection("Before cleanup", before);
  }

  match (&report.kept, &report.removal_error) {
    (Some(path), _) => print_warning(&format!("Artifact kept at {}", path.display())),
    (None, Some(err)) => print_failure(&format!("Failed to remove artifact: {}", err)),
    (None, None) => print_success("Artifact removed"),
  }

  if let Some(after) = &report.after {
    print_inspection("After cleanup", after);
  }
}

fn print_inspection(label: &str, inspection: &Inspection) {
  match inspection {
    Inspection::Present { size, .. } => print_stat(label, &format!("{} ({} bytes)", format_bytes(*size), size)),
    Inspection::Missing { error, .. } => print_stat(label, error),
  }
}
