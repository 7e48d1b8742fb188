//! Shared building blocks for the employee directory binaries:
//! logging setup, runtime bootstrapping and small response types.

pub mod types;
pub mod utils;
pub mod env;
pub mod runtime;
