//! # folio-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the `GET /api` status document the page probes on load
//! - Serve a plain-text `GET /health` for load balancers
//! - Serve the compiled page (HTML, wasm, CSS, assets) from a directory
//!
//! ## Dependency rule
//! Depends on `folio-domain` for the wire payload only. Never leaks axum
//! types into the domain.

pub mod api;
pub mod router;
pub mod state;
