//! Server-configuration cache port.

use std::future::Future;
use std::pin::Pin;

use crate::org::ServerConfigState;
use crate::ports::PortError;

/// Boxed future type alias used by [`ServerConfigSource`] to keep the trait
/// dyn-compatible.
pub type ServerConfigFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<ServerConfigState>, PortError>> + Send + 'a>>;

/// Looks up the server-level configuration snapshot.
///
/// `None` means the configuration has not been fetched; routing treats an
/// absent config as `billing_enabled = false`.
pub trait ServerConfigSource: Send + Sync {
    /// Returns the current server configuration snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying lookup fails (network, parse).
    fn current(&self) -> ServerConfigFuture<'_>;
}
