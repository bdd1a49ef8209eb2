//! Running the built artifact.
//!
//! The artifact is normally a copy of a program that would itself build and
//! run its sources, so it is started with a marker variable that tells it to
//! short-circuit instead of recursing.
//!
//! Three outcomes are distinguished:
//! - clean exit: `Ok(())`
//! - the program ran and exited non-zero: [`ExecuteError::Exited`]
//! - it could not be started or its status cannot be read: [`ExecuteError::Spawn`] /
//!   [`ExecuteError::Unexpected`]

pub mod program;
pub mod types;

pub use program::{child_env, execute};
pub use types::{ExecuteError, ExecutionReport};
