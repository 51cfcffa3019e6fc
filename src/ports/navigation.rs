//! Navigation port — the route-transition side effect.

use std::future::Future;
use std::pin::Pin;

use crate::ports::PortError;
use crate::routing::RouteDecision;

/// Boxed future type alias used by [`NavigationSink`] to keep the trait
/// dyn-compatible.
pub type NavigationFuture<'a> = Pin<Box<dyn Future<Output = Result<(), PortError>> + Send + 'a>>;

/// Performs the actual route transition in the host shell.
///
/// This is the only side-effecting boundary of the routing core. A failed
/// transition is surfaced to the caller; implementations must not retry or
/// swallow failures internally.
pub trait NavigationSink: Send + Sync {
    /// Navigates to the given destination as a single forward transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the host router rejects or aborts the transition.
    fn navigate(&self, destination: RouteDecision) -> NavigationFuture<'_>;
}
