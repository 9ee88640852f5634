//! Unit conversions used at the forecast provider boundary

/// km/h per m/s
pub const KPH_PER_MPS: f64 = 3.6;

pub fn kph_to_mps(kph: f64) -> f64 {
    kph / KPH_PER_MPS
}

pub fn mps_to_kph(mps: f64) -> f64 {
    mps * KPH_PER_MPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_conversions() {
        assert_eq!(kph_to_mps(36.0), 10.0);
        assert_eq!(mps_to_kph(10.0), 36.0);
        assert_eq!(kph_to_mps(0.0), 0.0);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for kph in [1.0, 10.0, 33.3, 54.0, 120.7] {
            assert!((mps_to_kph(kph_to_mps(kph)) - kph).abs() <= 0.1);
        }
    }
}
