use async_trait::async_trait;
use reqwest::Url;
use std::time::Instant;
use tracing::{debug, warn};

use super::types::{Metric, ReadingSet};
use crate::error::WeatherError;
use crate::fetch::{HttpClient, fetch_bytes};
use crate::parser::parse_reading_set;

/// Public data.gov.sg API root.
pub const DEFAULT_BASE_URL: &str = "https://api.data.gov.sg/v1";

/// Anything that can produce the temperature and humidity reading sets for a
/// local timestamp.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Returns `(temperature, humidity)` for `timestamp`.
    async fn fetch_readings(
        &self,
        timestamp: &str,
    ) -> Result<(ReadingSet, ReadingSet), WeatherError>;
}

pub struct WeatherClient<C> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> WeatherClient<C> {
    pub fn new(http: C) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(http: C, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, metric: Metric, timestamp: &str) -> Result<Url, WeatherError> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), metric.path());
        let mut url = Url::parse(&raw).map_err(|e| WeatherError::InvalidEndpoint {
            metric,
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair("date_time", timestamp);
        Ok(url)
    }

    /// Fetches and parses a single metric. The first batch in the response
    /// is used whatever its timestamp.
    #[tracing::instrument(skip(self, metric), fields(metric = %metric))]
    pub async fn fetch_metric(
        &self,
        metric: Metric,
        timestamp: &str,
    ) -> Result<ReadingSet, WeatherError> {
        let url = self.endpoint(metric, timestamp)?;

        let fetch_start = Instant::now();
        let bytes = fetch_bytes(&self.http, url)
            .await
            .map_err(|source| WeatherError::Transport { metric, source })?;

        let elapsed = fetch_start.elapsed();
        if elapsed.as_secs() > 10 {
            warn!(elapsed_secs = elapsed.as_secs(), "Weather fetch was slow");
        }
        debug!(bytes = bytes.len(), "Response received, parsing");

        let set = parse_reading_set(metric, &bytes)?;
        debug!(
            requested = timestamp,
            batch = %set.timestamp,
            stations = set.readings.len(),
            "Reading batch selected"
        );

        Ok(set)
    }
}

#[async_trait]
impl<C: HttpClient> WeatherSource for WeatherClient<C> {
    async fn fetch_readings(
        &self,
        timestamp: &str,
    ) -> Result<(ReadingSet, ReadingSet), WeatherError> {
        tokio::try_join!(
            self.fetch_metric(Metric::Temperature, timestamp),
            self.fetch_metric(Metric::Humidity, timestamp),
        )
    }
}
