use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("cannot compute statistics of an empty sequence")]
    EmptyInput,
    #[error("value at index {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("values are too far apart to summarize within f64 range")]
    Overflow,
}

/// Descriptive summary of a sequence of readings.
///
/// Every real field is rounded to two decimal places. Quartiles use
/// truncating nearest-rank indexing (`sorted[floor(count * p)]`), not
/// linear interpolation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl SummaryStatistics {
    pub fn compute(data: &[f64]) -> Result<SummaryStatistics, StatsError> {
        if data.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        if let Some(index) = data.iter().position(|value| !value.is_finite()) {
            return Err(StatsError::NonFinite { index });
        }

        let count = data.len();
        // divide before summing so values near f64::MAX do not overflow
        let mean = data.iter().map(|value| value / count as f64).sum::<f64>();
        let std = population_std(data, mean).ok_or(StatsError::Overflow)?;

        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);

        let stats = SummaryStatistics {
            count,
            mean: round2(mean),
            std: round2(std),
            min: round2(sorted[0]),
            q25: round2(nearest_rank(&sorted, 0.25)),
            q50: round2(nearest_rank(&sorted, 0.50)),
            q75: round2(nearest_rank(&sorted, 0.75)),
            max: round2(sorted[count - 1]),
        };
        debug!(?stats, "computed summary statistics");
        Ok(stats)
    }

    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, String); 8] {
        [
            ("Count", self.count.to_string()),
            ("Mean", format!("{:.2}", self.mean)),
            ("Std", format!("{:.2}", self.std)),
            ("Min", format!("{:.2}", self.min)),
            ("25%", format!("{:.2}", self.q25)),
            ("50%", format!("{:.2}", self.q50)),
            ("75%", format!("{:.2}", self.q75)),
            ("Max", format!("{:.2}", self.max)),
        ]
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows().iter() {
            writeln!(f, "  {:8}: {:>8}", label, value)?;
        }
        Ok(())
    }
}

pub fn compute_statistics(values: &[f64]) -> Result<SummaryStatistics, StatsError> {
    SummaryStatistics::compute(values)
}

fn nearest_rank(sorted: &[f64], fraction: f64) -> f64 {
    let index = (sorted.len() as f64 * fraction).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// Population standard deviation (divided by N). Deviations are scaled by
/// the largest one before squaring; `None` when a deviation overflows.
fn population_std(data: &[f64], mean: f64) -> Option<f64> {
    let deviations = data.iter().map(|value| value - mean).collect::<Vec<_>>();
    if deviations.iter().any(|deviation| !deviation.is_finite()) {
        return None;
    }
    let scale = deviations
        .iter()
        .fold(0f64, |scale, deviation| scale.max(deviation.abs()));
    if scale == 0. {
        return Some(0.);
    }
    let variance = deviations
        .iter()
        .map(|deviation| (deviation / scale).powf(2.))
        .sum::<f64>()
        / (data.len() as f64);
    Some(scale * variance.sqrt())
}

fn round2(value: f64) -> f64 {
    let scaled = value * 100.;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::{collection::vec, prop_assert, prop_assert_eq, proptest};

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(compute_statistics(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        assert_eq!(
            compute_statistics(&[1.0, f64::NAN, 3.0]),
            Err(StatsError::NonFinite { index: 1 })
        );
        assert_eq!(
            compute_statistics(&[f64::INFINITY]),
            Err(StatsError::NonFinite { index: 0 })
        );
    }

    #[test]
    fn test_single_value() {
        let stats = compute_statistics(&[5.0]).unwrap();
        assert_eq!(
            stats,
            SummaryStatistics {
                count: 1,
                mean: 5.0,
                std: 0.0,
                min: 5.0,
                q25: 5.0,
                q50: 5.0,
                q75: 5.0,
                max: 5.0,
            }
        );
    }

    #[test]
    fn test_population_std_and_truncated_quartiles() {
        let stats = compute_statistics(&[4.0, 2.0, 1.0, 3.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.std, 1.12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.q25, 2.0);
        assert_eq!(stats.q50, 3.0);
        assert_eq!(stats.q75, 4.0);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_input_is_not_reordered() {
        let values = vec![3.0, 1.0, 2.0];
        compute_statistics(&values).unwrap();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_display() {
        let stats = compute_statistics(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let text = stats.to_string();
        assert!(text.contains("Count   :        4"));
        assert!(text.contains("Std     :     1.12"));
        assert!(text.contains("25%     :     2.00"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_values_near_f64_max_stay_finite() {
        let stats = compute_statistics(&[1e307]).unwrap();
        assert_eq!(stats.mean, 1e307);
        assert_eq!(stats.std, 0.);
        assert_eq!(stats.min, 1e307);
        assert_eq!(stats.q50, 1e307);
        assert_eq!(stats.max, 1e307);

        let stats = compute_statistics(&[f64::MAX, f64::MAX]).unwrap();
        for value in [
            stats.mean, stats.min, stats.q25, stats.q50, stats.q75, stats.max,
        ] {
            assert_eq!(value, f64::MAX);
        }
        assert_eq!(stats.std, 0.);

        let stats = compute_statistics(&[-f64::MAX, f64::MAX]).unwrap();
        assert_eq!(stats.mean, 0.);
        assert_eq!(stats.std, f64::MAX);
    }

    #[test]
    fn test_overflowing_spread_is_rejected() {
        assert_eq!(
            compute_statistics(&[-f64::MAX, f64::MAX, f64::MAX]),
            Err(StatsError::Overflow)
        );
    }

    proptest! {
        #[test]
        fn test_count_and_ordering(values in vec(-1e6f64..1e6, 1..200)) {
            let stats = compute_statistics(&values).unwrap();
            prop_assert_eq!(stats.count, values.len());
            prop_assert!(stats.min <= stats.q25);
            prop_assert!(stats.q25 <= stats.q50);
            prop_assert!(stats.q50 <= stats.q75);
            prop_assert!(stats.q75 <= stats.max);
            prop_assert!(stats.std >= 0.);
        }

        #[test]
        fn test_large_values_stay_finite(values in vec(-1e307f64..1e307, 1..50)) {
            let stats = compute_statistics(&values).unwrap();
            prop_assert!(stats.mean.is_finite() && stats.std.is_finite());
            prop_assert!(stats.min <= stats.q25 && stats.q75 <= stats.max);
        }
    }
}
