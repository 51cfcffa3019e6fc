//! Fixture adapters for the `NavigationSink` port.

use std::sync::Mutex;

use crate::ports::navigation::{NavigationFuture, NavigationSink};
use crate::ports::PortError;
use crate::routing::RouteDecision;

/// Navigation sink that records transitions instead of performing them.
///
/// Optionally fails every transition with a fixed message, for exercising
/// the Navigator's error propagation.
pub struct CollectingNavigationSink {
    performed: Mutex<Vec<RouteDecision>>,
    failure: Option<String>,
}

impl CollectingNavigationSink {
    /// Creates a sink that accepts every transition.
    #[must_use]
    pub fn new() -> Self {
        Self { performed: Mutex::new(Vec::new()), failure: None }
    }

    /// Creates a sink that rejects every transition with `message`.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self { performed: Mutex::new(Vec::new()), failure: Some(message.to_string()) }
    }

    /// Returns the transitions performed so far, in order.
    #[must_use]
    pub fn performed(&self) -> Vec<RouteDecision> {
        self.performed.lock().expect("sink lock poisoned").clone()
    }
}

impl Default for CollectingNavigationSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationSink for CollectingNavigationSink {
    fn navigate(&self, destination: RouteDecision) -> NavigationFuture<'_> {
        Box::pin(async move {
            if let Some(message) = &self.failure {
                return Err(PortError::from(message.clone()));
            }
            self.performed.lock().expect("sink lock poisoned").push(destination);
            Ok(())
        })
    }
}
