mod info;
mod sequence;

use std::path::PathBuf;

use clap::Args;

use tmpbuild_lib::config::Config;

use crate::output::OutputFormat;

pub use info::cmd_info;
pub use sequence::{cmd_build, cmd_run};

/// Arguments shared by `run` and `build`.
#[derive(Debug, Args)]
pub struct SequenceArgs {
  /// Directory containing the sources (default: current directory)
  pub dir: Option<PathBuf>,

  /// Label embedded in the temp file name
  #[arg(long)]
  pub build_id: Option<String>,

  /// Compiler name or path (default: go)
  #[arg(long)]
  pub compiler: Option<String>,

  /// Source file extension (default: go)
  #[arg(long)]
  pub ext: Option<String>,

  /// Directory for the temp artifact (default: system temp dir)
  #[arg(long)]
  pub tmpdir: Option<PathBuf>,

  /// Keep the artifact instead of deleting it
  #[arg(long)]
  pub keep: bool,

  /// Output format
  #[arg(short, long, value_enum, default_value_t)]
  pub output: OutputFormat,
}

impl SequenceArgs {
  /// Layer the command-line flags over `config`.
  pub fn apply_to(&self, config: &mut Config) {
    if let Some(build_id) = &self.build_id {
      config.build_id = build_id.clone();
    }
    if let Some(compiler) = &self.compiler {
      config.compiler = compiler.clone();
    }
    if let Some(ext) = &self.ext {
      config.extension = ext.trim_start_matches('.').to_string();
    }
    if let Some(tmpdir) = &self.tmpdir {
      config.temp_dir = Some(tmpdir.clone());
    }
  }
}
