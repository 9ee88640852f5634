//! External API integrations

pub mod weather;

pub use weather::{DayConditions, WeatherClient};
