//! Organization and server-configuration snapshot types.
//!
//! Both types are read-only, point-in-time views owned by an external
//! cache. Absence is modeled at the edges as `Option`: `None` means the
//! snapshot has not been loaded yet or the user has no organization.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::plan::PlanDescriptor;

/// A named step in the guided first-use flow.
///
/// Milestones form a set, not an ordered sequence; routing only ever asks
/// about membership. Server-sent values this build does not know about
/// deserialize to [`OnboardingMilestone::Unrecognized`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingMilestone {
    /// The user dismissed the welcome modal. This is the sentinel the
    /// route resolver checks: without it the user is still onboarding.
    WelcomeModalAcknowledged,
    /// The user filled in their profile.
    ProfileCompleted,
    /// At least one teammate was invited into the organization.
    MemberInvited,
    /// The first data sync finished.
    FirstSyncCompleted,
    /// A milestone this build does not recognize.
    #[serde(other)]
    Unrecognized,
}

/// Snapshot of the current user's organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationState {
    /// Onboarding milestones the organization has completed.
    pub onboarding_flags: HashSet<OnboardingMilestone>,
    /// The organization's current billing plan.
    pub billing_plan: PlanDescriptor,
}

impl OrganizationState {
    /// Returns `true` once the welcome modal has been acknowledged.
    ///
    /// Other milestones never influence routing; this single sentinel
    /// decides whether the user has left the onboarding flow.
    #[must_use]
    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_flags.contains(&OnboardingMilestone::WelcomeModalAcknowledged)
    }
}

/// Snapshot of server-level configuration relevant to routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfigState {
    /// Whether the server enforces billing at all.
    pub billing_enabled: bool,
}
