//! # life_event_core
//!
//! Core domain logic for Life Event.

pub mod auth;
pub mod directory;
pub mod migrate;
pub mod models;
pub mod store;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
