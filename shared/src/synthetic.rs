//! Synthetic weather metrics for offline mode
//!
//! Values are drawn from a [`UnitSource`] so tests can replay exact
//! sequences. Production callers wrap a `rand` generator in [`RngSource`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{derive, WeatherMetrics};

/// Lower bound of the synthetic temperature range (°C)
pub const TEMPERATURE_MIN: f64 = -10.0;
/// Width of the synthetic temperature range (°C)
pub const TEMPERATURE_SPAN: f64 = 40.0;
pub const HUMIDITY_MIN: f64 = 20.0;
pub const HUMIDITY_SPAN: f64 = 80.0;
pub const WIND_SPEED_SPAN: f64 = 20.0;
pub const PRECIPITATION_SPAN: f64 = 20.0;
pub const UV_INDEX_MAX: f64 = 11.0;

/// Source of uniform samples in `[0, 1)`
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<S: UnitSource + ?Sized> UnitSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapts any `rand` generator into a [`UnitSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> UnitSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

impl RngSource<ChaCha8Rng> {
    /// Deterministic source; the same seed replays the same metrics
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Round half toward positive infinity, like `Math.round`
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place with [`round_half_up`] semantics
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Draw one snapshot.
///
/// Five samples are consumed in order: temperature, humidity, wind speed,
/// precipitation, UV index. Derived indices use the unrounded readings.
///
/// Every reading except UV is rounded to one decimal, humidity included.
/// The browser mock this replaces rounded humidity to a whole percent.
pub fn generate_metrics<S: UnitSource + ?Sized>(source: &mut S) -> WeatherMetrics {
    let temperature = source.next_unit() * TEMPERATURE_SPAN + TEMPERATURE_MIN;
    let humidity = source.next_unit() * HUMIDITY_SPAN + HUMIDITY_MIN;
    let wind_speed = source.next_unit() * WIND_SPEED_SPAN;
    let precipitation = source.next_unit() * PRECIPITATION_SPAN;

    let derived = derive(temperature, humidity, wind_speed);

    WeatherMetrics {
        temperature: round_to_tenth(temperature),
        humidity: round_to_tenth(humidity),
        wind_speed: round_to_tenth(wind_speed),
        precipitation: round_to_tenth(precipitation),
        heat_index: round_to_tenth(derived.heat_index),
        wind_chill: round_to_tenth(derived.wind_chill),
        uv_index: round_half_up(source.next_unit() * UV_INDEX_MAX),
    }
}

/// Stateful generator owning its random source
#[derive(Debug, Clone)]
pub struct SyntheticMetricsGenerator<S> {
    source: S,
}

impl<S: UnitSource> SyntheticMetricsGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn next_metrics(&mut self) -> WeatherMetrics {
        generate_metrics(&mut self.source)
    }
}

impl SyntheticMetricsGenerator<RngSource<ChaCha8Rng>> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of samples
    struct Sequence(std::vec::IntoIter<f64>);

    impl Sequence {
        fn new(values: &[f64]) -> Self {
            Self(values.to_vec().into_iter())
        }
    }

    impl UnitSource for Sequence {
        fn next_unit(&mut self) -> f64 {
            self.0.next().expect("sequence exhausted")
        }
    }

    #[test]
    fn test_round_half_up_matches_math_round() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
        assert_eq!(round_to_tenth(12.34), 12.3);
        assert_eq!(round_to_tenth(-0.04), 0.0);
    }

    #[test]
    fn test_exact_values_from_fixed_sequence() {
        let mut source = Sequence::new(&[0.5, 0.5, 0.5, 0.25, 0.5]);
        let metrics = generate_metrics(&mut source);

        assert_eq!(metrics.temperature, 10.0);
        assert_eq!(metrics.humidity, 60.0);
        assert_eq!(metrics.wind_speed, 10.0);
        assert_eq!(metrics.precipitation, 5.0);
        // 10 + 0.6 * 5
        assert_eq!(metrics.heat_index, 13.0);
        // 10 - 10 * 2
        assert_eq!(metrics.wind_chill, -10.0);
        // round(5.5)
        assert_eq!(metrics.uv_index, 6.0);
    }

    #[test]
    fn test_calm_wind_keeps_temperature_as_chill() {
        let mut source = Sequence::new(&[0.0, 0.0, 0.1, 0.0, 0.0]);
        let metrics = generate_metrics(&mut source);

        assert_eq!(metrics.temperature, -10.0);
        assert_eq!(metrics.humidity, 20.0);
        assert_eq!(metrics.wind_speed, 2.0);
        assert_eq!(metrics.wind_chill, -10.0);
        assert_eq!(metrics.heat_index, -9.0);
        assert_eq!(metrics.uv_index, 0.0);
    }

    #[test]
    fn test_derived_use_unrounded_readings() {
        // temperature 0.04 rounds to 0.0, humidity is 20.8
        let mut source = Sequence::new(&[0.251, 0.01, 0.0, 0.0, 0.0]);
        let metrics = generate_metrics(&mut source);
        assert_eq!(metrics.temperature, 0.0);
        assert_eq!(metrics.humidity, 20.8);
        // 0.04 + 1.04 = 1.08 -> 1.1, whereas 0.0 + 1.04 would give 1.0
        assert_eq!(metrics.heat_index, 1.1);
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let mut a = SyntheticMetricsGenerator::seeded(7);
        let mut b = SyntheticMetricsGenerator::seeded(7);
        for _ in 0..5 {
            assert_eq!(a.next_metrics(), b.next_metrics());
        }
    }
}
