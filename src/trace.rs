//! Decision traces — recorded routing decisions for audit and replay.
//!
//! The resolver is pure, so a trace only needs its two snapshot inputs and
//! the destination it produced. Replaying a trace re-runs the resolver on
//! the recorded inputs and checks that the destination reproduces; a
//! mismatch means the gating rules changed since the trace was captured.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::org::{OrganizationState, ServerConfigState};
use crate::routing::{resolve_route, RouteDecision};

/// One recorded routing decision: inputs, output, and provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrace {
    /// Unique id for this trace.
    pub id: String,
    /// When the decision was made.
    pub recorded_at: DateTime<Utc>,
    /// The organization snapshot the resolver saw (`None` = absent).
    pub organization: Option<OrganizationState>,
    /// The server-config snapshot the resolver saw (`None` = absent).
    pub server_config: Option<ServerConfigState>,
    /// The destination the resolver produced.
    pub destination: RouteDecision,
}

/// Outcome of replaying a trace against the current gating rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    /// The destination stored in the trace.
    pub recorded: RouteDecision,
    /// The destination the resolver produces today for the same inputs.
    pub resolved: RouteDecision,
}

impl ReplayOutcome {
    /// Returns `true` when the recorded destination reproduces.
    #[must_use]
    pub fn reproduced(&self) -> bool {
        self.recorded == self.resolved
    }
}

impl DecisionTrace {
    /// Captures a trace for one decision, stamping id and time from the
    /// context's ports.
    #[must_use]
    pub fn capture(
        ctx: &ServiceContext,
        organization: Option<OrganizationState>,
        server_config: Option<ServerConfigState>,
        destination: RouteDecision,
    ) -> Self {
        Self {
            id: ctx.id_gen.generate_id(),
            recorded_at: ctx.clock.now(),
            organization,
            server_config,
            destination,
        }
    }

    /// Saves the trace as YAML at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize trace {}: {e}", self.id))?;
        std::fs::write(path, yaml)
            .map_err(|e| format!("Failed to write trace {}: {e}", path.display()))
    }

    /// Loads a trace from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read trace {}: {e}", path.display()))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse trace {}: {e}", path.display()))
    }

    /// Re-runs the resolver on the recorded inputs.
    #[must_use]
    pub fn replay(&self) -> ReplayOutcome {
        ReplayOutcome {
            recorded: self.destination,
            resolved: resolve_route(self.organization.as_ref(), self.server_config.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::OnboardingMilestone;
    use crate::plan::{PlanDescriptor, PlanStatus, PlanType};

    fn now() -> DateTime<Utc> {
        "2025-03-01T09:00:00Z".parse().expect("timestamp parses")
    }

    fn sample_org() -> OrganizationState {
        OrganizationState {
            onboarding_flags: [OnboardingMilestone::WelcomeModalAcknowledged]
                .into_iter()
                .collect(),
            billing_plan: PlanDescriptor {
                plan_type: PlanType::Paid,
                status: Some(PlanStatus::PastDue),
            },
        }
    }

    #[test]
    fn capture_stamps_id_and_time_from_the_context() {
        let ctx = ServiceContext::fixed(now(), None, None);
        let trace = DecisionTrace::capture(&ctx, None, None, RouteDecision::Onboarding);
        assert_eq!(trace.id, "nav-0001");
        assert_eq!(trace.recorded_at, now());
    }

    #[test]
    fn replay_reproduces_a_consistent_trace() {
        let ctx = ServiceContext::fixed(now(), None, None);
        let config = ServerConfigState { billing_enabled: true };
        let trace = DecisionTrace::capture(
            &ctx,
            Some(sample_org()),
            Some(config),
            resolve_route(Some(&sample_org()), Some(&config)),
        );
        let outcome = trace.replay();
        assert!(outcome.reproduced());
        assert_eq!(outcome.resolved, RouteDecision::Home);
    }

    #[test]
    fn replay_flags_a_tampered_destination() {
        let ctx = ServiceContext::fixed(now(), None, None);
        let mut trace = DecisionTrace::capture(&ctx, None, None, RouteDecision::Onboarding);
        trace.destination = RouteDecision::Home;
        let outcome = trace.replay();
        assert!(!outcome.reproduced());
        assert_eq!(outcome.resolved, RouteDecision::Onboarding);
    }

    #[test]
    fn traces_round_trip_through_yaml_files() {
        let ctx = ServiceContext::fixed(now(), None, None);
        let trace = DecisionTrace::capture(
            &ctx,
            Some(sample_org()),
            Some(ServerConfigState { billing_enabled: false }),
            RouteDecision::Home,
        );

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trace.yaml");
        trace.save(&path).expect("save trace");
        let loaded = DecisionTrace::load(&path).expect("load trace");
        assert_eq!(trace, loaded);
    }
}
