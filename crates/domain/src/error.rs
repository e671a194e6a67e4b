//! Common error types used across the workspace.
//!
//! Content validation converts into [`FolioError`] via `#[from]`. Storage
//! and probe failures never leave their use-case: the theme synchroniser
//! logs them and the probe folds them into a backend status.

/// Top-level error for the folio workspace.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Content invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("profile name must not be empty")]
    EmptyName,

    #[error("{section} entry at position {index} has an empty title")]
    EmptyTitle { section: &'static str, index: usize },

    #[error("link {url:?} must use http, https or mailto")]
    UnsupportedLink { url: String },
}

/// Failure reported by the theme persistence backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("theme storage unavailable: {message}")]
pub struct StorageError {
    pub message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure reaching or reading the backend health endpoint.
///
/// The [`Display`](std::fmt::Display) output is what ends up on screen, so
/// every variant renders as a short human-readable line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The endpoint answered with a non-success status code.
    #[error("API {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body was not the expected JSON document.
    #[error("{0}")]
    Body(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_status_error_with_code() {
        assert_eq!(ProbeError::Status(503).to_string(), "API 503");
    }

    #[test]
    fn should_render_transport_error_verbatim() {
        let err = ProbeError::Transport("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[test]
    fn should_convert_validation_error_into_folio_error() {
        let err: FolioError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            FolioError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_include_message_in_storage_error() {
        let err = StorageError::new("quota exceeded");
        assert_eq!(err.to_string(), "theme storage unavailable: quota exceeded");
    }
}
