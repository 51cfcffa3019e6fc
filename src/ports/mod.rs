//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the routing core and an
//! external system (time, IDs, the organization cache, the server-config
//! cache, the host router). Implementations live in `src/adapters/`.

pub mod clock;
pub mod id_gen;
pub mod navigation;
pub mod organization;
pub mod server_config;

pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use navigation::{NavigationFuture, NavigationSink};
pub use organization::{OrganizationFuture, OrganizationSource};
pub use server_config::{ServerConfigFuture, ServerConfigSource};

/// Error type shared by fallible port methods.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
