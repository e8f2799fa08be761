//! Core library entry for the `devtrack` CLI.
//!
//! devtrack turns a project specification (systems, integration flows,
//! AI agents, service entries) into a development plan: generated
//! tasks, a symmetric dependency graph, sprint assignments, and a
//! progress rollup, all persisted in a single YAML snapshot.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod ports;
pub mod spec;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
