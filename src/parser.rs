//! JSON parser for data.gov.sg environment readings.

use serde::Deserialize;

use crate::error::WeatherError;
use crate::weather::{Metric, ReadingSet, StationReading};

#[derive(Deserialize)]
struct ApiResponse {
    items: Vec<ApiItem>,
}

#[derive(Deserialize)]
struct ApiItem {
    timestamp: String,
    readings: Vec<ApiReading>,
}

#[derive(Deserialize)]
struct ApiReading {
    station_id: String,
    value: f64,
}

/// Decodes an environment API response into the [`ReadingSet`] of its first
/// batch.
///
/// # Errors
///
/// Returns [`WeatherError::MalformedResponse`] if the body is not the
/// expected JSON shape, carries no batches, or its first batch has no
/// readings.
pub fn parse_reading_set(metric: Metric, bytes: &[u8]) -> Result<ReadingSet, WeatherError> {
    let body: ApiResponse =
        serde_json::from_slice(bytes).map_err(|e| WeatherError::malformed(metric, e.to_string()))?;

    let batch = body
        .items
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::malformed(metric, "response has no reading batches"))?;

    if batch.readings.is_empty() {
        return Err(WeatherError::malformed(
            metric,
            format!("batch at {} has no readings", batch.timestamp),
        ));
    }

    Ok(ReadingSet {
        metric,
        timestamp: batch.timestamp,
        readings: batch
            .readings
            .into_iter()
            .map(|r| StationReading {
                station_id: r.station_id,
                value: r.value,
            })
            .collect(),
    })
}
