//! Reading types produced by the weather client.

use serde::Serialize;
use std::fmt;

/// The two metrics published by the data.gov.sg environment API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Humidity,
}

impl Metric {
    /// Path of the metric's endpoint relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Metric::Temperature => "environment/air-temperature",
            Metric::Humidity => "environment/relative-humidity",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Temperature => f.write_str("temperature"),
            Metric::Humidity => f.write_str("humidity"),
        }
    }
}

/// One station's instantaneous measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReading {
    pub station_id: String,
    pub value: f64,
}

/// Every station reading for one metric at one point in time.
///
/// `timestamp` is the batch timestamp reported by the API, which is not
/// necessarily the timestamp that was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingSet {
    pub metric: Metric,
    pub timestamp: String,
    pub readings: Vec<StationReading>,
}

impl ReadingSet {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().map(|r| r.value)
    }
}
