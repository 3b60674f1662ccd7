//! End-to-end evaluation: fetch, aggregate, estimate, classify.

use tracing::info;

use crate::analyzers::risk::classify;
use crate::analyzers::types::{AggregateSample, Report};
use crate::analyzers::wetbulb::compute_wetbulb;
use crate::error::WeatherError;
use crate::weather::WeatherSource;

/// Runs the full pipeline for one local timestamp.
///
/// Any failure aborts the run at the stage where it happens; later stages
/// are never reached and no partial report is produced.
#[tracing::instrument(skip(source))]
pub async fn evaluate<S: WeatherSource + ?Sized>(
    source: &S,
    timestamp: &str,
) -> Result<Report, WeatherError> {
    let (temperature, humidity) = source.fetch_readings(timestamp).await?;
    let sample = AggregateSample::from_sets(&temperature, &humidity)?;
    let wetbulb = compute_wetbulb(sample.avg_temperature, sample.avg_humidity)?;
    let (tier, guidance) = classify(wetbulb);

    info!(
        avg_temperature = sample.avg_temperature,
        avg_humidity = sample.avg_humidity,
        wetbulb,
        tier = %tier,
        "Evaluation complete"
    );

    Ok(Report {
        timestamp: Some(timestamp.to_string()),
        sample,
        wetbulb,
        tier,
        guidance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::risk::RiskTier;
    use crate::weather::{Metric, ReadingSet, StationReading};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        temperature: Vec<f64>,
        humidity: Vec<f64>,
    }

    fn reading_set(metric: Metric, values: &[f64]) -> ReadingSet {
        ReadingSet {
            metric,
            timestamp: "2024-05-01T12:00:00+08:00".to_string(),
            readings: values
                .iter()
                .map(|v| StationReading {
                    station_id: "S109".to_string(),
                    value: *v,
                })
                .collect(),
        }
    }

    #[async_trait]
    impl WeatherSource for FixedSource {
        async fn fetch_readings(
            &self,
            _timestamp: &str,
        ) -> Result<(ReadingSet, ReadingSet), WeatherError> {
            Ok((
                reading_set(Metric::Temperature, &self.temperature),
                reading_set(Metric::Humidity, &self.humidity),
            ))
        }
    }

    /// Fails every fetch with a server error.
    struct UnreachableSource {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl WeatherSource for UnreachableSource {
        async fn fetch_readings(
            &self,
            _timestamp: &str,
        ) -> Result<(ReadingSet, ReadingSet), WeatherError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let resp = http::Response::builder().status(503).body("").unwrap();
            let source = reqwest::Response::from(resp)
                .error_for_status()
                .unwrap_err();
            Err(WeatherError::Transport {
                metric: Metric::Humidity,
                source,
            })
        }
    }

    #[tokio::test]
    async fn test_evaluate_round_trip() {
        let source = FixedSource {
            temperature: vec![30.0, 32.0],
            humidity: vec![70.0, 80.0],
        };

        let report = evaluate(&source, "2024-05-01T12:00:00").await.unwrap();

        assert_eq!(report.timestamp.as_deref(), Some("2024-05-01T12:00:00"));
        assert_eq!(report.sample.avg_temperature, 31.0);
        assert_eq!(report.sample.avg_humidity, 75.0);
        assert!((report.wetbulb - 27.315662356231062).abs() < 1e-9);
        assert_eq!(report.tier, RiskTier::Safe);
        assert_eq!(report.guidance, RiskTier::Safe.guidance());
    }

    #[tokio::test]
    async fn test_evaluate_negative_humidity_is_domain_error() {
        let source = FixedSource {
            temperature: vec![30.0],
            humidity: vec![-3.0, 1.0],
        };

        let err = evaluate(&source, "2024-05-01T12:00:00").await.unwrap_err();
        assert!(matches!(err, WeatherError::Domain { rh, .. } if rh == -1.0));
    }

    #[tokio::test]
    async fn test_evaluate_stops_at_transport_error() {
        let source = UnreachableSource {
            fetches: AtomicUsize::new(0),
        };

        let result = evaluate(&source, "2024-05-01T12:00:00").await;

        assert!(matches!(
            result,
            Err(WeatherError::Transport {
                metric: Metric::Humidity,
                ..
            })
        ));
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_evaluate_empty_readings() {
        let source = FixedSource {
            temperature: vec![],
            humidity: vec![70.0],
        };

        let err = evaluate(&source, "2024-05-01T12:00:00").await.unwrap_err();
        assert!(matches!(err, WeatherError::EmptyInput));
    }
}
