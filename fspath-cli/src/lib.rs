//! Library exports for fspath-cli.
//!
//! Exposes the CLI structure for the benches and for tooling that renders
//! documentation from it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
