//! Implementation of the `tmpbuild info` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use tmpbuild_lib::build::{Toolchain, source_pattern};
use tmpbuild_lib::config::Config;

use crate::output::{OutputFormat, print_info, print_json, print_stat};

#[derive(Serialize)]
struct InfoReport<'a> {
  version: &'static str,
  config: &'a Config,
  sources: String,
  temp_dir: PathBuf,
  compiler_path: Option<PathBuf>,
  compiler_error: Option<String>,
}

pub fn cmd_info(config: &Config, output: OutputFormat) -> Result<()> {
  let cwd = std::env::current_dir().context("Failed to get current directory")?;

  let (compiler_path, compiler_error) = match Toolchain::locate(&config.compiler, config.search_path.as_deref(), &cwd) {
    Ok(toolchain) => (Some(toolchain.path().to_path_buf()), None),
    Err(err) => (None, Some(err.to_string())),
  };

  let info = InfoReport {
    version: env!("CARGO_PKG_VERSION"),
    config,
    sources: source_pattern(&cwd, &config.extension),
    temp_dir: config.temp_dir.clone().unwrap_or_else(std::env::temp_dir),
    compiler_path,
    compiler_error,
  };

  if output.is_json() {
    return print_json(&info);
  }

  print_info(&format!("tmpbuild v{}", info.version));
  print_stat("Compiler", &config.compiler);
  match (&info.compiler_path, &info.compiler_error) {
    (Some(path), _) => print_stat("Compiler path", &path.display().to_string()),
    (None, Some(err)) => print_stat("Compiler path", &format!("not found ({})", err)),
    (None, None) => {}
  }
  print_stat("Sources", &info.sources);
  print_stat("Build ID", &config.build_id);
  print_stat("Temp dir", &info.temp_dir.display().to_string());
  print_stat("Marker", &format!("{}={}", config.marker.name, config.marker.value));

  Ok(())
}
