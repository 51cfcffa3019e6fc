//! Adapter implementations of the port traits.
//!
//! `live` adapters touch the real world (system clock, HTTP API, stdout).
//! `fixture` adapters serve canned snapshots from files or memory and are
//! what the CLI and tests substitute in for deterministic decisions.

pub mod fixture;
pub mod live;
