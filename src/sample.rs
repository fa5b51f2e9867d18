use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_COUNT: usize = 24;

const BASE_TEMPERATURE: f64 = 25.;
const TEMPERATURE_AMPLITUDE: f64 = 3.;
const TEMPERATURE_NOISE: f64 = 2.;
const BASE_HUMIDITY: f64 = 60.;
const HUMIDITY_AMPLITUDE: f64 = 10.;
const HUMIDITY_NOISE: f64 = 5.;

/// One synthetic hourly observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub hour_label: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// Generates `count` readings, one per hour index starting at zero.
///
/// Temperature follows `25 + sin(i/3) * 3` and humidity `60 + cos(i/4) * 10`,
/// each with uniform noise drawn from `rng` (`[0, 2)` and `[0, 5)`).
pub fn generate_samples<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Reading> {
    let readings = (0..count)
        .map(|i| {
            let hour = i as f64;
            Reading {
                hour_label: format!("{}:00", i),
                temperature: BASE_TEMPERATURE
                    + (hour / 3.).sin() * TEMPERATURE_AMPLITUDE
                    + rng.gen_range(0.0..TEMPERATURE_NOISE),
                humidity: BASE_HUMIDITY
                    + (hour / 4.).cos() * HUMIDITY_AMPLITUDE
                    + rng.gen_range(0.0..HUMIDITY_NOISE),
            }
        })
        .collect::<Vec<_>>();
    debug!(count, "generated sample readings");
    readings
}

/// Random source for the generator; a seed makes the sample reproducible.
pub fn sample_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn temperatures(readings: &[Reading]) -> Vec<f64> {
    readings.iter().map(|reading| reading.temperature).collect()
}

pub fn humidities(readings: &[Reading]) -> Vec<f64> {
    readings.iter().map(|reading| reading.humidity).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::{prop_assert, prop_assert_eq, proptest};

    fn labels(readings: &[Reading]) -> Vec<&str> {
        readings
            .iter()
            .map(|reading| reading.hour_label.as_str())
            .collect()
    }

    #[test]
    fn test_default_count_labels() {
        let readings = generate_samples(DEFAULT_COUNT, &mut sample_rng(None));
        assert_eq!(readings.len(), 24);
        let expected = (0..24).map(|i| format!("{}:00", i)).collect::<Vec<_>>();
        assert_eq!(labels(&readings), expected);
        assert_eq!(readings[3].hour_label, "3:00");
        assert_eq!(readings[23].hour_label, "23:00");
    }

    #[test]
    fn test_empty_sample() {
        assert!(generate_samples(0, &mut sample_rng(Some(1))).is_empty());
    }

    #[test]
    fn test_repeated_calls_vary_values_not_labels() {
        let mut rng = sample_rng(Some(42));
        let first = generate_samples(DEFAULT_COUNT, &mut rng);
        let second = generate_samples(DEFAULT_COUNT, &mut rng);
        assert_eq!(labels(&first), labels(&second));
        assert_ne!(temperatures(&first), temperatures(&second));
        assert_ne!(humidities(&first), humidities(&second));
    }

    #[test]
    fn test_seed_reproduces_sample() {
        let first = generate_samples(DEFAULT_COUNT, &mut sample_rng(Some(7)));
        let second = generate_samples(DEFAULT_COUNT, &mut sample_rng(Some(7)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_columns_follow_reading_order() {
        let readings = generate_samples(5, &mut sample_rng(Some(3)));
        let temperatures = temperatures(&readings);
        let humidities = humidities(&readings);
        for (i, reading) in readings.iter().enumerate() {
            assert_eq!(temperatures[i], reading.temperature);
            assert_eq!(humidities[i], reading.humidity);
        }
    }

    proptest! {
        #[test]
        fn test_values_within_formula_bounds(seed: u64, count in 0usize..100) {
            let readings = generate_samples(count, &mut sample_rng(Some(seed)));
            prop_assert_eq!(readings.len(), count);
            for (i, reading) in readings.iter().enumerate() {
                let temperature_base = BASE_TEMPERATURE + (i as f64 / 3.).sin() * TEMPERATURE_AMPLITUDE;
                let humidity_base = BASE_HUMIDITY + (i as f64 / 4.).cos() * HUMIDITY_AMPLITUDE;
                prop_assert!(reading.temperature >= temperature_base);
                prop_assert!(reading.temperature <= temperature_base + TEMPERATURE_NOISE);
                prop_assert!(reading.humidity >= humidity_base);
                prop_assert!(reading.humidity <= humidity_base + HUMIDITY_NOISE);
            }
        }
    }
}
