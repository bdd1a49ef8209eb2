//! Compiling sources into a throwaway executable.
//!
//! A build discovers the sources in a directory, reserves a unique temp
//! path tagged with the build id, locates the compiler and runs
//! `<compiler> build -o <path> <dir>`. The result is an [`Artifact`] that
//! removes itself when dropped.
//!
//! # Submodules
//!
//! - [`discover`] - Source file discovery
//! - [`artifact`] - Reserved temp path ownership
//! - [`toolchain`] - Compiler lookup on PATH
//! - [`execute`] - Compiler invocation and the composed build

pub mod artifact;
pub mod discover;
pub mod execute;
pub mod toolchain;
mod types;

pub use artifact::Artifact;
pub use discover::{discover_sources, source_pattern};
pub use execute::{build_cwd, build_in, compile};
pub use toolchain::Toolchain;
pub use types::*;
