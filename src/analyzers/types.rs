//! Data types produced by the analysis pipeline.

use serde::Serialize;

use crate::analyzers::risk::{RiskTier, TierGuidance};

/// Area-wide averages for one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateSample {
    pub avg_temperature: f64,
    pub avg_humidity: f64,
}

/// Everything the presenter receives for one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Local timestamp the readings were requested for; `None` when the
    /// inputs were supplied directly rather than fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub sample: AggregateSample,
    pub wetbulb: f64,
    pub tier: RiskTier,
    pub guidance: &'static TierGuidance,
}
