//! Domain models for the Weather Risk Assessment Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
