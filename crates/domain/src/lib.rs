//! # folio-domain
//!
//! Pure domain model for the folio portfolio page.
//!
//! ## Responsibilities
//! - Static **content** types: profile, skill groups, experience, education,
//!   projects and the assets they reference
//! - The two-valued **theme** and its lenient parsing rules
//! - The **backend status** reached by the one-shot probe, plus the JSON
//!   payload the probe reads
//! - **Section** identifiers and the monotonic reveal set
//! - The **UI state** owned by the page controller
//! - Typed error conventions
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Browser and network boundaries are expressed as traits in the `app` crate.

pub mod error;

pub mod content;
pub mod section;
pub mod status;
pub mod theme;
pub mod ui_state;
