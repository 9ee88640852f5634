//! Business logic services for the Weather Risk Assessment Platform

pub mod assessment;

pub use assessment::AssessmentService;
