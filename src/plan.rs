//! Billing-plan model and the plan activity evaluator.
//!
//! Plan types and statuses were string comparisons in earlier incarnations
//! of this logic; here they are closed enums so adding a tier or status is
//! a compile-time-checked decision instead of a silent fallthrough.

use serde::{Deserialize, Serialize};

/// The billing tier category of an organization's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Evaluation tenant seeded with demo data. Never billed.
    Demo,
    /// Free community tier. Never billed.
    Community,
    /// Self-hosted commercial license; billing happens out of band.
    CommercialSelfHosted,
    /// Standard billable subscription.
    Paid,
    /// Billable enterprise contract.
    Enterprise,
    /// A tier this build does not recognize. Treated as billable so it
    /// fails closed rather than silently granting access.
    #[serde(other)]
    Unknown,
}

impl PlanType {
    /// Returns `true` for tiers whose access is never gated on payment state.
    #[must_use]
    pub fn is_billable(self) -> bool {
        match self {
            Self::Demo | Self::Community | Self::CommercialSelfHosted => false,
            Self::Paid | Self::Enterprise | Self::Unknown => true,
        }
    }
}

/// The payment-processor-reported state of a billable subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Subscription is paid up.
    Active,
    /// Inside a free trial.
    Trialing,
    /// Cancellation requested but the paid period has not lapsed.
    PendingCancellation,
    /// A payment failed; the processor is retrying.
    PastDue,
    /// Subscription was cancelled and the paid period has lapsed.
    Canceled,
    /// Checkout never completed.
    Incomplete,
    /// The processor gave up retrying payment.
    Unpaid,
    /// A status this build does not recognize.
    #[serde(other)]
    Unrecognized,
}

/// An organization's plan: the tier plus the processor-reported status.
///
/// `status` is `None` for plans the payment processor has never seen,
/// which includes every non-billable tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDescriptor {
    /// The billing tier.
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    /// Processor-reported status, when one exists.
    pub status: Option<PlanStatus>,
}

impl PlanDescriptor {
    /// Classifies whether this plan currently entitles the organization to
    /// use the product.
    ///
    /// Non-billable tiers are always active regardless of `status`. Billable
    /// tiers are active only while the processor reports the subscription as
    /// paid, trialing, or inside a grace period (`pending_cancellation`,
    /// `past_due`). A missing or unrecognized status counts as inactive.
    #[must_use]
    pub fn is_active_for_use(&self) -> bool {
        if !self.plan_type.is_billable() {
            return true;
        }
        match self.status {
            Some(
                PlanStatus::Active
                | PlanStatus::Trialing
                | PlanStatus::PendingCancellation
                | PlanStatus::PastDue,
            ) => true,
            Some(
                PlanStatus::Canceled
                | PlanStatus::Incomplete
                | PlanStatus::Unpaid
                | PlanStatus::Unrecognized,
            )
            | None => false,
        }
    }
}
