//! Service context bundling all port trait objects.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::adapters::fixture::{
    CollectingNavigationSink, FileOrganizationSource, FileServerConfigSource, FixedClock,
    SequentialIdGenerator, StaticOrganizationSource, StaticServerConfigSource,
};
use crate::adapters::live::{
    LiveClock, LiveIdGenerator, LiveNavigationSink, LiveOrganizationSource,
    LiveServerConfigSource,
};
use crate::org::{OrganizationState, ServerConfigState};
use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;
use crate::ports::navigation::NavigationSink;
use crate::ports::organization::OrganizationSource;
use crate::ports::server_config::ServerConfigSource;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire
/// up different adapter families (live HTTP, file-backed, in-memory).
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// ID generator for transition and trace ids.
    pub id_gen: Box<dyn IdGenerator>,
    /// Organization cache lookup.
    pub organization: Box<dyn OrganizationSource>,
    /// Server-configuration cache lookup.
    pub server_config: Box<dyn ServerConfigSource>,
    /// Navigation side effect.
    pub navigation: Box<dyn NavigationSink>,
}

impl ServiceContext {
    /// Creates a live context: HTTP snapshot sources against
    /// `LANDING_API_BASE`, system clock, random ids, stdout navigation.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            id_gen: Box::new(LiveIdGenerator::new()),
            organization: Box::new(LiveOrganizationSource::new()),
            server_config: Box::new(LiveServerConfigSource::new()),
            navigation: Box::new(LiveNavigationSink),
        }
    }

    /// Creates a context serving snapshots from YAML files.
    ///
    /// An omitted path wires a static source holding `None`, which is how
    /// the CLI expresses "snapshot absent". Clock, ids, and navigation stay
    /// live.
    #[must_use]
    pub fn from_files(org: Option<&Path>, config: Option<&Path>) -> Self {
        let organization: Box<dyn OrganizationSource> = match org {
            Some(path) => Box::new(FileOrganizationSource::new(path)),
            None => Box::new(StaticOrganizationSource::new(None)),
        };
        let server_config: Box<dyn ServerConfigSource> = match config {
            Some(path) => Box::new(FileServerConfigSource::new(path)),
            None => Box::new(StaticServerConfigSource::new(None)),
        };
        Self {
            clock: Box::new(LiveClock),
            id_gen: Box::new(LiveIdGenerator::new()),
            organization,
            server_config,
            navigation: Box::new(LiveNavigationSink),
        }
    }

    /// Creates a fully in-memory context for deterministic tests: fixed
    /// clock, sequential ids, static snapshots, collecting sink.
    #[must_use]
    pub fn fixed(
        now: DateTime<Utc>,
        org: Option<OrganizationState>,
        config: Option<ServerConfigState>,
    ) -> Self {
        Self {
            clock: Box::new(FixedClock::new(now)),
            id_gen: Box::new(SequentialIdGenerator::new("nav")),
            organization: Box::new(StaticOrganizationSource::new(org)),
            server_config: Box::new(StaticServerConfigSource::new(config)),
            navigation: Box::new(CollectingNavigationSink::new()),
        }
    }
}
