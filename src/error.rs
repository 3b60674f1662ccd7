//! Error taxonomy for the acquisition and classification pipeline.

use thiserror::Error;

use crate::weather::Metric;

/// Every failure the pipeline can produce. None of them are retried; they
/// propagate to the caller, which shows a failure state and lets the user
/// refresh.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Network failure or non-2xx status from an endpoint.
    #[error("{metric} request failed: {source}")]
    Transport {
        metric: Metric,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL could not be turned into a request URL.
    #[error("invalid {metric} endpoint: {reason}")]
    InvalidEndpoint { metric: Metric, reason: String },

    /// Body was not JSON, lacked the reading list, or the list was empty.
    #[error("malformed {metric} response: {reason}")]
    MalformedResponse { metric: Metric, reason: String },

    /// Aggregation was asked to average zero readings.
    #[error("cannot average an empty reading set")]
    EmptyInput,

    /// Temperature or relative humidity outside the wet-bulb formula's
    /// domain.
    #[error("temperature {temp} °C with relative humidity {rh}% is outside the wet-bulb formula's domain")]
    Domain { temp: f64, rh: f64 },
}

impl WeatherError {
    pub(crate) fn malformed(metric: Metric, reason: impl Into<String>) -> Self {
        WeatherError::MalformedResponse {
            metric,
            reason: reason.into(),
        }
    }
}
