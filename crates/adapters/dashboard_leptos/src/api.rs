//! `gloo-net` implementation of the health endpoint.

use folio_app::ports::{HealthEndpoint, HealthResponse};
use folio_domain::error::ProbeError;
use gloo_net::http::Request;

/// Path probed once on page load.
pub const API_PATH: &str = "/api";

/// Issues `GET` against a same-origin path.
#[derive(Debug, Clone, Copy)]
pub struct GlooHealthEndpoint {
    url: &'static str,
}

impl GlooHealthEndpoint {
    pub fn new(url: &'static str) -> Self {
        Self { url }
    }
}

impl Default for GlooHealthEndpoint {
    fn default() -> Self {
        Self::new(API_PATH)
    }
}

fn transport(err: gloo_net::Error) -> ProbeError {
    ProbeError::Transport(err.to_string())
}

impl HealthEndpoint for GlooHealthEndpoint {
    async fn get(&self) -> Result<HealthResponse, ProbeError> {
        let resp = Request::get(self.url).send().await.map_err(transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;
        Ok(HealthResponse::new(status, body))
    }
}
