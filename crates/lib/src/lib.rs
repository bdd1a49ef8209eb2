//! tmpbuild-lib: build, run and clean up a throwaway executable
//!
//! This crate provides the pieces of one build-run-cleanup sequence:
//! - `build`: source discovery, temp path reservation, compiler lookup and invocation
//! - `execute`: running the built artifact with the nested-run marker set
//! - `inspect`: size/existence checks on the artifact path
//! - `sequence`: the composed flow and its `RunReport`

pub mod build;
pub mod config;
pub mod consts;
pub mod execute;
pub mod inspect;
pub mod sequence;
pub mod util;
