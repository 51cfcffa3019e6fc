//! Post-authentication route gating.
//!
//! Given cached organization and server-configuration snapshots, decide
//! which screen an authenticated user should land on: onboarding, billing,
//! or home. The decision itself ([`routing::resolve_route`]) is pure; side
//! effects live behind port traits in [`ports`] with implementations in
//! [`adapters`], and the [`navigator::Navigator`] is the only component
//! that performs the actual transition.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod navigator;
pub mod org;
pub mod plan;
pub mod ports;
pub mod routing;
pub mod trace;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
