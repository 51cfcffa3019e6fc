//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `landing`.
#[derive(Debug, Parser)]
#[command(name = "landing", version, about = "Decide where an authenticated user lands")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the landing destination and print its path.
    Resolve {
        /// YAML organization snapshot; omit for "no organization".
        #[arg(long)]
        org: Option<PathBuf>,
        /// YAML server-config snapshot; omit for "config absent".
        #[arg(long)]
        config: Option<PathBuf>,
        /// Record the decision as a trace file at this path.
        #[arg(long)]
        record: Option<PathBuf>,
    },
    /// Resolve the landing destination and perform the transition.
    Navigate {
        /// YAML organization snapshot; omit for "no organization".
        #[arg(long)]
        org: Option<PathBuf>,
        /// YAML server-config snapshot; omit for "config absent".
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Evaluate a plan descriptor file as active or inactive for use.
    Plan {
        /// YAML plan descriptor file.
        file: PathBuf,
    },
    /// Replay a recorded decision trace and verify it reproduces.
    Replay {
        /// Trace file produced by `resolve --record`.
        file: PathBuf,
    },
}
