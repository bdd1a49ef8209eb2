//! Compiler invocation.
//!
//! The compiler inherits stdout/stderr, so its diagnostics stream straight
//! to the user. Nothing is captured or parsed and nothing is retried.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use super::{Artifact, BuildError, Toolchain, discover_sources};
use crate::config::Config;

/// Run `<compiler> build -o <artifact> <source_dir>`.
pub async fn compile(toolchain: &Toolchain, source_dir: &Path, artifact: &Artifact) -> Result<(), BuildError> {
  info!(
    compiler = %toolchain.path().display(),
    out = %artifact.path().display(),
    "running compiler"
  );

  let status = Command::new(toolchain.path())
    .arg("build")
    .arg("-o")
    .arg(artifact.path())
    .arg(source_dir)
    .stdin(Stdio::null())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit())
    .status()
    .await
    .map_err(|source| BuildError::Spawn {
      compiler: toolchain.name().to_string(),
      source,
    })?;

  if !status.success() {
    return Err(BuildError::CompilerFailed {
      compiler: toolchain.name().to_string(),
      code: status.code(),
    });
  }

  Ok(())
}

/// Build the sources in `dir` into a freshly reserved artifact.
///
/// Relative source and temp directories, and a relative compiler path, are
/// resolved against the process working directory; the compiler always
/// receives absolute paths.
///
/// Sources are checked before anything is reserved, so a directory without
/// sources leaves nothing behind. If locating the compiler or compiling
/// fails, the reserved artifact is dropped, which deletes it.
pub async fn build_in(dir: &Path, config: &Config) -> Result<Artifact, BuildError> {
  let cwd = std::env::current_dir().map_err(BuildError::WorkingDir)?;
  let dir = std::path::absolute(dir).map_err(BuildError::WorkingDir)?;

  let sources = discover_sources(&dir, &config.extension)?;
  debug!(dir = %dir.display(), count = sources.len(), "discovered sources");

  let temp_dir = match &config.temp_dir {
    Some(temp_dir) => Some(std::path::absolute(temp_dir).map_err(BuildError::Reserve)?),
    None => None,
  };
  let artifact = Artifact::reserve(&config.build_id, &config.temp_prefix, temp_dir.as_deref())?;
  let toolchain = Toolchain::locate(&config.compiler, config.search_path.as_deref(), &cwd)?;

  compile(&toolchain, &dir, &artifact).await?;

  Ok(artifact)
}

/// [`build_in`] for the current working directory.
pub async fn build_cwd(config: &Config) -> Result<Artifact, BuildError> {
  let cwd = std::env::current_dir().map_err(BuildError::WorkingDir)?;
  build_in(&cwd, config).await
}
