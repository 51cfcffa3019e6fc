//! Live adapter for the `OrganizationSource` port backed by the tenant API.

use std::env;

use reqwest::Client;
use serde::Deserialize;

use crate::org::OrganizationState;
use crate::ports::organization::{OrganizationFuture, OrganizationSource};
use crate::ports::PortError;

const ORGANIZATION_ENDPOINT: &str = "/api/organizations/current";

/// Live organization source that queries the tenant API over HTTP.
///
/// The API base URL comes from the `LANDING_API_BASE` environment variable,
/// read at call time. A `404` response means the user belongs to no
/// organization and maps to `Ok(None)`.
pub struct LiveOrganizationSource {
    client: Client,
}

impl LiveOrganizationSource {
    /// Creates a new live organization source.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveOrganizationSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Envelope the tenant API wraps the organization document in.
#[derive(Deserialize)]
struct OrganizationEnvelope {
    organization: OrganizationState,
}

impl OrganizationSource for LiveOrganizationSource {
    fn current(&self) -> OrganizationFuture<'_> {
        Box::pin(async move {
            let base = env::var("LANDING_API_BASE").map_err(|_| {
                PortError::from("LANDING_API_BASE environment variable not set")
            })?;

            let response = self
                .client
                .get(format!("{base}{ORGANIZATION_ENDPOINT}"))
                .send()
                .await
                .map_err(|e| -> PortError {
                    format!("Organization lookup request failed: {e}").into()
                })?;

            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }

            let response_text = response.text().await.map_err(|e| -> PortError {
                format!("Failed to read organization response: {e}").into()
            })?;

            if !status.is_success() {
                return Err(format!(
                    "Organization lookup error ({}): {response_text}",
                    status.as_u16()
                )
                .into());
            }

            let envelope: OrganizationEnvelope = serde_json::from_str(&response_text)
                .map_err(|e| -> PortError {
                    format!("Failed to parse organization response: {e}").into()
                })?;

            Ok(Some(envelope.organization))
        })
    }
}
