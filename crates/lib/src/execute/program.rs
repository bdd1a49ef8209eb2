//! Artifact execution with an explicit environment.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info};

use super::ExecuteError;
use crate::config::Marker;

/// The current environment plus the marker variable.
///
/// An existing variable with the marker's name is replaced rather than
/// duplicated.
pub fn child_env(marker: &Marker) -> Vec<(OsString, OsString)> {
  let name = OsStr::new(&marker.name);
  let mut env: Vec<(OsString, OsString)> = std::env::vars_os().filter(|(key, _)| key.as_os_str() != name).collect();
  env.push((OsString::from(&marker.name), OsString::from(&marker.value)));
  env
}

/// Run `program` with exactly `env`, inheriting stdout/stderr.
pub async fn execute(program: &Path, env: &[(OsString, OsString)]) -> Result<(), ExecuteError> {
  info!(program = %program.display(), "running program");
  debug!(vars = env.len(), "child environment");

  let status = Command::new(program)
    .env_clear()
    .envs(env.iter().map(|(k, v)| (k, v)))
    .stdin(Stdio::null())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit())
    .status()
    .await
    .map_err(|source| ExecuteError::Spawn {
      program: program.to_path_buf(),
      source,
    })?;

  classify(status)
}

fn classify(status: ExitStatus) -> Result<(), ExecuteError> {
  if status.success() {
    return Ok(());
  }

  match status.code() {
    Some(code) => Err(ExecuteError::Exited { code }),
    None => Err(ExecuteError::Unexpected {
      detail: describe_abnormal(status),
    }),
  }
}

#[cfg(unix)]
fn describe_abnormal(status: ExitStatus) -> String {
  use std::os::unix::process::ExitStatusExt;

  match status.signal() {
    Some(signal) => format!("terminated by signal {}", signal),
    None => status.to_string(),
  }
}

#[cfg(not(unix))]
fn describe_abnormal(status: ExitStatus) -> String {
  status.to_string()
}
