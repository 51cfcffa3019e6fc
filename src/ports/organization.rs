//! Organization cache port.

use std::future::Future;
use std::pin::Pin;

use crate::org::OrganizationState;
use crate::ports::PortError;

/// Boxed future type alias used by [`OrganizationSource`] to keep the trait
/// dyn-compatible.
pub type OrganizationFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<OrganizationState>, PortError>> + Send + 'a>>;

/// Looks up the current user's organization snapshot.
///
/// Implementations must return the most recently fetched snapshot. `None`
/// means the snapshot has not been loaded yet or the user belongs to no
/// organization; callers treat both the same way.
pub trait OrganizationSource: Send + Sync {
    /// Returns the current organization snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying lookup fails (network, parse).
    /// Absence of an organization is `Ok(None)`, never an error.
    fn current(&self) -> OrganizationFuture<'_>;
}
