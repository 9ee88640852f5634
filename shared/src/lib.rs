//! Shared types and risk engine for the Weather Risk Assessment Platform
//!
//! This crate contains the pure classification logic shared between the
//! backend, the browser client (via WASM), and other components of the
//! system. Nothing in here performs I/O.

pub mod classification;
pub mod models;
pub mod synthetic;
pub mod types;
pub mod units;
pub mod validation;

pub use classification::{classify, RiskClassifier};
pub use models::*;
pub use types::*;
pub use validation::*;
