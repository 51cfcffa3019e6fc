//! Live adapter for the `NavigationSink` port.
//!
//! Inside the CLI harness there is no host router to hand the transition
//! to, so the live sink announces the target path on stdout. Embedders
//! wire their own sink through `ServiceContext`.

use crate::ports::navigation::{NavigationFuture, NavigationSink};
use crate::routing::RouteDecision;

/// Live navigation sink that announces the transition on stdout.
pub struct LiveNavigationSink;

impl NavigationSink for LiveNavigationSink {
    fn navigate(&self, destination: RouteDecision) -> NavigationFuture<'_> {
        Box::pin(async move {
            println!("Navigating to {}", destination.path());
            Ok(())
        })
    }
}
