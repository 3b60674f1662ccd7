use tracing::debug;

use crate::analyzers::types::AggregateSample;
use crate::analyzers::utility::mean;
use crate::error::WeatherError;
use crate::weather::ReadingSet;

/// Averages every station reading in `set`, one equal weight per station.
///
/// # Errors
///
/// Returns [`WeatherError::EmptyInput`] when the set has no readings.
pub fn aggregate(set: &ReadingSet) -> Result<f64, WeatherError> {
    mean(set.values()).ok_or(WeatherError::EmptyInput)
}

impl AggregateSample {
    /// Reduces the temperature and humidity sets to their area averages.
    pub fn from_sets(
        temperature: &ReadingSet,
        humidity: &ReadingSet,
    ) -> Result<Self, WeatherError> {
        let sample = AggregateSample {
            avg_temperature: aggregate(temperature)?,
            avg_humidity: aggregate(humidity)?,
        };

        debug!(
            temperature_stations = temperature.readings.len(),
            humidity_stations = humidity.readings.len(),
            avg_temperature = sample.avg_temperature,
            avg_humidity = sample.avg_humidity,
            "Readings aggregated"
        );

        Ok(sample)
    }
}
