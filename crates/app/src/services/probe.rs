//! Backend probe: the one-shot connectivity check run on page load.

use folio_domain::error::ProbeError;
use folio_domain::status::{BackendStatus, StatusPayload};

use crate::ports::HealthEndpoint;

/// A single pending health check.
///
/// [`run`](Self::run) consumes the probe, so each instance settles exactly
/// once and can never be retried.
pub struct BackendProbe<H> {
    endpoint: H,
}

impl<H: HealthEndpoint> BackendProbe<H> {
    pub fn new(endpoint: H) -> Self {
        Self { endpoint }
    }

    /// Perform the request and interpret the answer.
    ///
    /// Always returns a settled status: [`BackendStatus::Ok`] with the
    /// backend's message, or [`BackendStatus::Error`] with a readable reason.
    pub async fn run(self) -> BackendStatus {
        let status = BackendStatus::from(self.check().await);
        match &status {
            BackendStatus::Ok(message) => tracing::info!(%message, "backend reachable"),
            BackendStatus::Error(reason) => tracing::warn!(%reason, "backend unreachable"),
            BackendStatus::Unknown => {}
        }
        status
    }

    async fn check(&self) -> Result<String, ProbeError> {
        let response = self.endpoint.get().await?;
        if !response.is_success() {
            return Err(ProbeError::Status(response.status));
        }
        let body: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|err| ProbeError::Body(err.to_string()))?;
        Ok(StatusPayload::from_value(&body)
            .message_or_default()
            .to_string())
    }
}
