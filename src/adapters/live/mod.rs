//! Live adapters for real external interactions.

pub mod clock;
pub mod id_gen;
pub mod navigation;
pub mod organization;
pub mod server_config;

pub use clock::LiveClock;
pub use id_gen::LiveIdGenerator;
pub use navigation::LiveNavigationSink;
pub use organization::LiveOrganizationSource;
pub use server_config::LiveServerConfigSource;
