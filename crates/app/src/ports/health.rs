//! Health endpoint port: the single HTTP call the page makes.

use std::future::Future;

use folio_domain::error::ProbeError;

/// Raw response to `GET /api`, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: u16,
    pub body: String,
}

impl HealthResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status code is in the `2xx` range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues the health request.
pub trait HealthEndpoint {
    /// Perform the request.
    ///
    /// Only transport-level failures are errors here (use
    /// [`ProbeError::Transport`]); a non-2xx answer is still a response.
    fn get(&self) -> impl Future<Output = Result<HealthResponse, ProbeError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_2xx_as_success() {
        assert!(HealthResponse::new(200, "").is_success());
        assert!(HealthResponse::new(204, "").is_success());
    }

    #[test]
    fn should_treat_other_codes_as_failure() {
        assert!(!HealthResponse::new(199, "").is_success());
        assert!(!HealthResponse::new(304, "").is_success());
        assert!(!HealthResponse::new(503, "").is_success());
    }
}
