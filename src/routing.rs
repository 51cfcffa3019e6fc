//! Route resolution — the post-authentication landing decision.
//!
//! [`resolve_route`] is a pure, total function over two already-materialized
//! snapshots. There is no stored state: every call recomputes the destination
//! from scratch, so the "state machine" collapses to a priority-ordered guard
//! chain.

use serde::{Deserialize, Serialize};

use crate::org::{OrganizationState, ServerConfigState};

/// Where an authenticated user should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// The guided first-use flow.
    Onboarding,
    /// The billing settings screen.
    Billing,
    /// The application home screen.
    Home,
}

impl RouteDecision {
    /// The fixed external path for this destination.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Onboarding => "/onboarding",
            Self::Billing => "/billing",
            Self::Home => "/",
        }
    }
}

/// Resolves the landing destination from the two cached snapshots.
///
/// Guard order is load-bearing and must not be reordered:
///
/// 1. No organization → [`RouteDecision::Onboarding`].
/// 2. Welcome modal not yet acknowledged → [`RouteDecision::Onboarding`].
///    A user who is both mid-onboarding and delinquent on billing goes to
///    onboarding, not billing.
/// 3. Billing enforced server-side and the plan is not active-for-use →
///    [`RouteDecision::Billing`].
/// 4. Otherwise → [`RouteDecision::Home`].
///
/// An absent server config means billing is not enforced (guard 3 never
/// fires), while an absent or unrecognized plan status already counts as
/// inactive inside [`PlanDescriptor::is_active_for_use`]. The asymmetry is
/// deliberate: missing config must not lock users out, missing payment
/// state must not let them through.
///
/// [`PlanDescriptor::is_active_for_use`]: crate::plan::PlanDescriptor::is_active_for_use
#[must_use]
pub fn resolve_route(
    organization: Option<&OrganizationState>,
    server_config: Option<&ServerConfigState>,
) -> RouteDecision {
    let Some(org) = organization else {
        return RouteDecision::Onboarding;
    };
    if !org.onboarding_complete() {
        return RouteDecision::Onboarding;
    }
    let billing_enabled = server_config.is_some_and(|config| config.billing_enabled);
    if billing_enabled && !org.billing_plan.is_active_for_use() {
        return RouteDecision::Billing;
    }
    RouteDecision::Home
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::OnboardingMilestone;
    use crate::plan::{PlanDescriptor, PlanStatus, PlanType};

    fn org(onboarded: bool, plan: PlanDescriptor) -> OrganizationState {
        let mut flags = std::collections::HashSet::new();
        flags.insert(OnboardingMilestone::ProfileCompleted);
        if onboarded {
            flags.insert(OnboardingMilestone::WelcomeModalAcknowledged);
        }
        OrganizationState { onboarding_flags: flags, billing_plan: plan }
    }

    fn config(billing_enabled: bool) -> ServerConfigState {
        ServerConfigState { billing_enabled }
    }

    fn active_plan() -> PlanDescriptor {
        PlanDescriptor { plan_type: PlanType::Paid, status: Some(PlanStatus::Active) }
    }

    fn dead_plan() -> PlanDescriptor {
        PlanDescriptor { plan_type: PlanType::Paid, status: Some(PlanStatus::Canceled) }
    }

    #[test]
    fn no_organization_always_routes_to_onboarding() {
        assert_eq!(resolve_route(None, None), RouteDecision::Onboarding);
        assert_eq!(resolve_route(None, Some(&config(true))), RouteDecision::Onboarding);
        assert_eq!(resolve_route(None, Some(&config(false))), RouteDecision::Onboarding);
    }

    #[test]
    fn incomplete_onboarding_outranks_billing() {
        // Mid-onboarding and delinquent: onboarding wins.
        let org = org(false, dead_plan());
        assert_eq!(resolve_route(Some(&org), Some(&config(true))), RouteDecision::Onboarding);
    }

    #[test]
    fn delinquent_plan_routes_to_billing_when_enforced() {
        let org = org(true, dead_plan());
        assert_eq!(resolve_route(Some(&org), Some(&config(true))), RouteDecision::Billing);
    }

    #[test]
    fn billing_gate_off_never_routes_to_billing() {
        let org = org(true, dead_plan());
        assert_eq!(resolve_route(Some(&org), Some(&config(false))), RouteDecision::Home);
        assert_eq!(resolve_route(Some(&org), None), RouteDecision::Home);
    }

    #[test]
    fn grace_period_plan_lands_home() {
        let org = org(
            true,
            PlanDescriptor { plan_type: PlanType::Paid, status: Some(PlanStatus::PastDue) },
        );
        assert_eq!(resolve_route(Some(&org), Some(&config(true))), RouteDecision::Home);
    }

    #[test]
    fn healthy_tenant_lands_home() {
        let org = org(true, active_plan());
        assert_eq!(resolve_route(Some(&org), Some(&config(true))), RouteDecision::Home);
    }

    #[test]
    fn missing_status_with_billing_disabled_lands_home() {
        let org = org(true, PlanDescriptor { plan_type: PlanType::Paid, status: None });
        assert_eq!(resolve_route(Some(&org), Some(&config(false))), RouteDecision::Home);
    }

    #[test]
    fn every_input_combination_maps_to_exactly_one_destination() {
        // Totality over the full boolean grid: organization presence,
        // onboarding completion, billing enforcement, plan activity.
        for org_exists in [false, true] {
            for onboarded in [false, true] {
                for billing_enabled in [false, true] {
                    for plan_active in [false, true] {
                        let plan = if plan_active { active_plan() } else { dead_plan() };
                        let organization = org_exists.then(|| org(onboarded, plan));
                        let decision = resolve_route(
                            organization.as_ref(),
                            Some(&config(billing_enabled)),
                        );
                        let expected = if !org_exists || !onboarded {
                            RouteDecision::Onboarding
                        } else if billing_enabled && !plan_active {
                            RouteDecision::Billing
                        } else {
                            RouteDecision::Home
                        };
                        assert_eq!(decision, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn paths_are_fixed() {
        assert_eq!(RouteDecision::Onboarding.path(), "/onboarding");
        assert_eq!(RouteDecision::Billing.path(), "/billing");
        assert_eq!(RouteDecision::Home.path(), "/");
    }
}
