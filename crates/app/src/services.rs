//! Application services: use-case implementations.
//!
//! Each service accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from the browser.

pub mod probe;
pub mod reveal;
pub mod theme;
