//! HTTP handlers

mod assessment;
mod health;

pub use assessment::*;
pub use health::*;
