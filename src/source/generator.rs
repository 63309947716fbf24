/// In-memory generated readings standing in for a real sensor store
use log::debug;
use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::models::Reading;
use crate::source::ReadingSource;

// Plausible indoor climate ranges for the generated values
const TEMPERATURE_RANGE: std::ops::Range<f32> = -5.0..35.0;
const HUMIDITY_RANGE: std::ops::Range<f32> = 20.0..100.0;

/// A wholesale-generated, immutable reading collection.
///
/// Built once at startup and handed to the API as a read-only snapshot.
/// Stands in for a real sensor store until one exists.
pub struct GeneratedSource {
    readings: Vec<Reading>,
}

impl GeneratedSource {
    /// Generate readings at a fixed interval reaching `history_days` back
    /// from `now`, in ascending timestamp order.
    pub fn new(now: OffsetDateTime, history_days: u32, sample_interval_mins: u64) -> Self {
        let start = now - Duration::days(history_days as i64);
        let step = Duration::minutes(sample_interval_mins as i64);
        let mut rng = rand::thread_rng();

        let mut readings = Vec::new();
        let mut timestamp = start;
        while timestamp <= now {
            readings.push(Reading {
                timestamp,
                temperature: rng.gen_range(TEMPERATURE_RANGE),
                humidity: rng.gen_range(HUMIDITY_RANGE),
            });
            timestamp += step;
        }

        debug!(
            "Generated {} readings from {} to {}",
            readings.len(),
            start,
            now
        );

        Self { readings }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl ReadingSource for GeneratedSource {
    fn all_readings(&self) -> &[Reading] {
        &self.readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn readings_are_ascending_by_timestamp() {
        let source = GeneratedSource::new(datetime!(2024-03-05 12:00 UTC), 7, 30);
        let readings = source.all_readings();
        assert!(readings.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn coverage_reaches_the_requested_depth() {
        let now = datetime!(2024-03-05 12:00 UTC);
        let source = GeneratedSource::new(now, 365, 30);
        let readings = source.all_readings();

        assert!(!source.is_empty());
        let first = readings.first().unwrap().timestamp;
        let last = readings.last().unwrap().timestamp;
        assert_eq!(first, now - Duration::days(365));
        assert!(last <= now);
        // 365 days at 30-minute intervals, endpoints included
        assert_eq!(readings.len(), 365 * 48 + 1);
    }

    #[test]
    fn values_stay_within_the_generated_ranges() {
        let source = GeneratedSource::new(datetime!(2024-03-05 12:00 UTC), 2, 60);
        for r in source.all_readings() {
            assert!(TEMPERATURE_RANGE.contains(&r.temperature));
            assert!(HUMIDITY_RANGE.contains(&r.humidity));
        }
    }
}
