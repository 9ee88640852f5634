//! Domain models for the Weather Risk Assessment Platform

mod metrics;
mod risk;
mod uv;

pub use metrics::*;
pub use risk::*;
pub use uv::*;
