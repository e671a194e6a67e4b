//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the page logic and the browser (or the
//! test harness). They are defined here so that both the use-case layer and
//! the adapter layer can depend on them without circular dependencies.
//!
//! None of these traits require `Send`: the page runs on a single-threaded
//! event loop and browser handles are not thread-safe.

pub mod health;
pub mod theme_store;
pub mod viewport;

pub use health::{HealthEndpoint, HealthResponse};
pub use theme_store::{DocumentRoot, ThemeStore};
pub use viewport::{IntersectionCallback, ObservationHandle, ViewportWatcher};
