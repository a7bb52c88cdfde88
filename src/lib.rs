//! Loader, validator and dry-run planner for `.pre-commit-config.yaml` files.
//!
//! [`config::Config`] parses and validates the file; [`plan::plan`] computes
//! which hooks would receive which files. Nothing here fetches repositories
//! or runs hooks.

pub mod config;
pub mod domain;
pub mod plan;

pub(crate) mod cli;

pub use cli::Commands;

/// Run a CLI subcommand, writing results to stdout.
///
/// This is the binary entry point. It exists to bridge the binary crate (`main.rs`)
/// to the library without exposing `cli` internals. Library callers should use
/// [`config::Config`] and [`plan::plan`] directly.
pub fn run(command: Commands) -> miette::Result<()> {
    cli::run(command)
}
