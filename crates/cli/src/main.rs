mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tmpbuild_lib::config::Config;
use tmpbuild_lib::consts::MARKER_BANNER;

use cmd::SequenceArgs;
use output::OutputFormat;

/// tmpbuild - build, run and clean up a throwaway executable
#[derive(Parser)]
#[command(name = "tmpbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the sources, run the result as a nested run, then delete it
  Run(SequenceArgs),

  /// Build the sources and delete the result without running it
  Build(SequenceArgs),

  /// Show the resolved configuration and compiler
  Info {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },
}

fn main() -> Result<()> {
  let config = Config::from_env();

  // A nested run must not build and run itself again.
  if config.marker.is_active() {
    println!("{}", MARKER_BANNER);
    return Ok(());
  }

  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match cli.command {
    Commands::Run(args) => cmd::cmd_run(&args, config),
    Commands::Build(args) => cmd::cmd_build(&args, config),
    Commands::Info { output } => cmd::cmd_info(&config, output),
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
