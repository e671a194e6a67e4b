//! # folio-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `ThemeStore`: persisted theme preference
//!   - `DocumentRoot`: the root element carrying `data-theme`
//!   - `HealthEndpoint`: the backend `GET /api` call
//!   - `ViewportWatcher`: intersection notifications for page sections
//! - Provide the **use-cases** driving the page:
//!   - `ThemeSynchronizer`: resolve, apply, toggle and persist the theme
//!   - `BackendProbe`: one-shot connectivity check
//!   - `ScrollReveal`: scoped reveal subscription
//!   - `PageController`: owns UI state and publishes every change
//! - Provide the pure **renderer** and the canonical **content** tables
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `tokio::sync` for the state channel).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod content;
pub mod controller;
pub mod ports;
pub mod render;
pub mod services;

#[cfg(test)]
mod testing;
