//! Command dispatch and handlers.

pub mod navigate;
pub mod plan;
pub mod replay;
pub mod resolve;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Resolve { org, config, record } => {
            resolve::run(org.as_deref(), config.as_deref(), record.as_deref())
        }
        Command::Navigate { org, config } => navigate::run(org.as_deref(), config.as_deref()),
        Command::Plan { file } => plan::run(file),
        Command::Replay { file } => replay::run(file),
    }
}

/// Builds the current-thread runtime the async handlers block on.
fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))
}
