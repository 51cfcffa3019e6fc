//! Live adapter for the `ServerConfigSource` port backed by the tenant API.

use std::env;

use reqwest::Client;
use serde::Deserialize;

use crate::org::ServerConfigState;
use crate::ports::server_config::{ServerConfigFuture, ServerConfigSource};
use crate::ports::PortError;

const SERVER_CONFIG_ENDPOINT: &str = "/api/server-config";

/// Live server-config source that queries the tenant API over HTTP.
///
/// Reads `LANDING_API_BASE` at call time, like the organization source. A
/// `404` response means the deployment exposes no routing-relevant config
/// and maps to `Ok(None)`; routing then treats billing as not enforced.
pub struct LiveServerConfigSource {
    client: Client,
}

impl LiveServerConfigSource {
    /// Creates a new live server-config source.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveServerConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Envelope the tenant API wraps the config document in.
#[derive(Deserialize)]
struct ServerConfigEnvelope {
    config: ServerConfigState,
}

impl ServerConfigSource for LiveServerConfigSource {
    fn current(&self) -> ServerConfigFuture<'_> {
        Box::pin(async move {
            let base = env::var("LANDING_API_BASE").map_err(|_| {
                PortError::from("LANDING_API_BASE environment variable not set")
            })?;

            let response = self
                .client
                .get(format!("{base}{SERVER_CONFIG_ENDPOINT}"))
                .send()
                .await
                .map_err(|e| -> PortError {
                    format!("Server-config lookup request failed: {e}").into()
                })?;

            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }

            let response_text = response.text().await.map_err(|e| -> PortError {
                format!("Failed to read server-config response: {e}").into()
            })?;

            if !status.is_success() {
                return Err(format!(
                    "Server-config lookup error ({}): {response_text}",
                    status.as_u16()
                )
                .into());
            }

            let envelope: ServerConfigEnvelope = serde_json::from_str(&response_text)
                .map_err(|e| -> PortError {
                    format!("Failed to parse server-config response: {e}").into()
                })?;

            Ok(Some(envelope.config))
        })
    }
}
