//! Fixture adapters that serve canned snapshots.
//!
//! These are the substitute implementations the CLI and tests use in place
//! of the live HTTP adapters: snapshot sources backed by YAML files or
//! in-memory values, a fixed clock, a counting ID generator, and a
//! navigation sink that records transitions instead of performing them.

pub mod clock;
pub mod id_gen;
pub mod navigation;
pub mod organization;
pub mod server_config;

pub use clock::FixedClock;
pub use id_gen::SequentialIdGenerator;
pub use navigation::CollectingNavigationSink;
pub use organization::{FileOrganizationSource, StaticOrganizationSource};
pub use server_config::{FileServerConfigSource, StaticServerConfigSource};
