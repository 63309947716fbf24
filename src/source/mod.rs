pub mod generator;

pub use generator::GeneratedSource;

use crate::models::Reading;

/// Read contract for whatever supplies the sensor readings.
///
/// Readings are ordered ascending by timestamp and cover at minimum the
/// trailing year, so every relative window has data to draw from. The
/// aggregator only ever sees a snapshot slice; a real store could append
/// concurrently without the core caring.
pub trait ReadingSource: Send + Sync {
    fn all_readings(&self) -> &[Reading];
}
