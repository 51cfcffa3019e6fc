//! Navigator — resolves the landing route and performs the transition.

use crate::context::ServiceContext;
use crate::routing::{resolve_route, RouteDecision};

/// The result of one completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// Unique id for this transition, for log correlation.
    pub transition_id: String,
    /// Where the user was sent.
    pub destination: RouteDecision,
    /// The external path of that destination.
    pub path: &'static str,
}

/// Thin wrapper around the route resolver that owns the side effect.
///
/// The Navigator is the only place allowed to call the navigation port.
/// Each invocation reads both snapshots exactly once, up front, and uses
/// those values throughout — the external cache may move on underneath,
/// but one decision sees one consistent point-in-time view.
pub struct Navigator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> Navigator<'a> {
    /// Creates a navigator over the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolves the destination without navigating.
    ///
    /// # Errors
    ///
    /// Returns an error if either snapshot lookup fails. The resolution
    /// itself cannot fail.
    pub async fn resolve(&self) -> Result<RouteDecision, String> {
        let organization = self
            .ctx
            .organization
            .current()
            .await
            .map_err(|e| format!("Failed to load organization snapshot: {e}"))?;
        let server_config = self
            .ctx
            .server_config
            .current()
            .await
            .map_err(|e| format!("Failed to load server-config snapshot: {e}"))?;
        Ok(resolve_route(organization.as_ref(), server_config.as_ref()))
    }

    /// Resolves the destination and performs the transition.
    ///
    /// A single forward transition; a failed navigation is surfaced here,
    /// never retried.
    ///
    /// # Errors
    ///
    /// Returns an error if a snapshot lookup or the navigation itself fails.
    pub async fn go(&self) -> Result<NavigationOutcome, String> {
        let destination = self.resolve().await?;
        self.ctx
            .navigation
            .navigate(destination)
            .await
            .map_err(|e| format!("Navigation to {} failed: {e}", destination.path()))?;
        Ok(NavigationOutcome {
            transition_id: self.ctx.id_gen.generate_id(),
            destination,
            path: destination.path(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixture::CollectingNavigationSink;
    use crate::org::{OnboardingMilestone, OrganizationState, ServerConfigState};
    use crate::plan::{PlanDescriptor, PlanStatus, PlanType};
    use chrono::{DateTime, Utc};

    fn now() -> DateTime<Utc> {
        "2025-03-01T09:00:00Z".parse().expect("timestamp parses")
    }

    fn onboarded_org(plan: PlanDescriptor) -> OrganizationState {
        OrganizationState {
            onboarding_flags: [OnboardingMilestone::WelcomeModalAcknowledged]
                .into_iter()
                .collect(),
            billing_plan: plan,
        }
    }

    #[tokio::test]
    async fn go_performs_exactly_one_transition() {
        let org = onboarded_org(PlanDescriptor {
            plan_type: PlanType::Paid,
            status: Some(PlanStatus::Canceled),
        });
        let mut ctx =
            ServiceContext::fixed(now(), Some(org), Some(ServerConfigState { billing_enabled: true }));
        let sink = std::sync::Arc::new(CollectingNavigationSink::new());
        ctx.navigation = Box::new(SharedSink(sink.clone()));

        let outcome = Navigator::new(&ctx).go().await.expect("navigation succeeds");
        assert_eq!(outcome.destination, RouteDecision::Billing);
        assert_eq!(outcome.path, "/billing");
        assert_eq!(outcome.transition_id, "nav-0001");
        assert_eq!(sink.performed(), vec![RouteDecision::Billing]);
    }

    #[tokio::test]
    async fn sink_failure_propagates() {
        let ctx = {
            let mut ctx = ServiceContext::fixed(now(), None, None);
            ctx.navigation = Box::new(CollectingNavigationSink::failing("router detached"));
            ctx
        };
        let err = Navigator::new(&ctx).go().await.expect_err("navigation fails");
        assert!(err.contains("Navigation to /onboarding failed"));
        assert!(err.contains("router detached"));
    }

    #[tokio::test]
    async fn resolve_does_not_touch_the_sink() {
        let mut ctx = ServiceContext::fixed(now(), None, None);
        let sink = std::sync::Arc::new(CollectingNavigationSink::new());
        ctx.navigation = Box::new(SharedSink(sink.clone()));

        let destination = Navigator::new(&ctx).resolve().await.expect("resolve succeeds");
        assert_eq!(destination, RouteDecision::Onboarding);
        assert!(sink.performed().is_empty());
    }

    /// Forwards to an `Arc`-shared sink so tests can inspect it afterwards.
    struct SharedSink(std::sync::Arc<CollectingNavigationSink>);

    impl crate::ports::NavigationSink for SharedSink {
        fn navigate(&self, destination: RouteDecision) -> crate::ports::NavigationFuture<'_> {
            self.0.navigate(destination)
        }
    }
}
