//! Presentation of evaluation reports.
//!
//! Supports a plain-text dashboard, JSON for scripting, and a debug dump.

use anyhow::Result;
use std::fmt;
use tracing::debug;

use crate::analyzers::risk::{DANGER_THRESHOLD_C, WARNING_THRESHOLD_C};
use crate::analyzers::types::Report;

const EXPLAINER: &str = "\
Wet-bulb temperature is the lowest temperature air can be cooled to by \
evaporating water into it. It tracks how well sweat can cool the body: the \
closer it gets to skin temperature, the less heat the body can shed.";

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &Report) {
    debug!("{:#?}", report);
}

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Text dashboard view of a [`Report`].
pub struct Dashboard<'a>(pub &'a Report);

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let guidance = report.guidance;

        writeln!(f, "Live wet-bulb temperature in Singapore")?;
        match &report.timestamp {
            Some(timestamp) => writeln!(f, "Readings for {timestamp} (SGT)")?,
            None => writeln!(f, "Computed from supplied values")?,
        }
        writeln!(f)?;
        writeln!(
            f,
            "  Average temperature   {:>6.1} °C",
            report.sample.avg_temperature
        )?;
        writeln!(
            f,
            "  Average humidity      {:>6.1} %",
            report.sample.avg_humidity
        )?;
        writeln!(f, "  Wet-bulb temperature  {:>6.1} °C", report.wetbulb)?;
        writeln!(f)?;
        writeln!(f, "{} {}", guidance.icon, guidance.headline)?;
        for line in guidance.advice.lines() {
            writeln!(f, "  - {}", line.trim())?;
        }
        writeln!(f)?;
        writeln!(f, "{EXPLAINER}")?;
        writeln!(
            f,
            "Thresholds: warning from {WARNING_THRESHOLD_C:.0} °C, danger from {DANGER_THRESHOLD_C:.0} °C wet-bulb."
        )
    }
}

/// Renders a report as the text dashboard shown to the user.
pub fn render(report: &Report) -> String {
    Dashboard(report).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::risk::RiskTier;
    use crate::analyzers::types::AggregateSample;

    fn report(tier: RiskTier, wetbulb: f64) -> Report {
        Report {
            timestamp: Some("2024-05-01T12:00:00".to_string()),
            sample: AggregateSample {
                avg_temperature: 31.0,
                avg_humidity: 75.0,
            },
            wetbulb,
            tier,
            guidance: tier.guidance(),
        }
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&report(RiskTier::Safe, 27.3));
    }

    #[test]
    fn test_render_contains_values_and_guidance() {
        let text = render(&report(RiskTier::Safe, 27.315662356231062));

        assert!(text.contains("2024-05-01T12:00:00"));
        assert!(text.contains("31.0 °C"));
        assert!(text.contains("75.0 %"));
        assert!(text.contains("27.3 °C"));
        assert!(text.contains(RiskTier::Safe.guidance().headline));
        assert!(text.contains("  - Normal activity is fine."));
    }

    #[test]
    fn test_render_without_timestamp() {
        let mut offline = report(RiskTier::Safe, 27.3);
        offline.timestamp = None;

        let text = render(&offline);
        assert!(text.contains("Computed from supplied values"));
        assert!(!text.contains("Readings for"));

        let json = to_json(&offline).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("timestamp").is_none());
    }

    #[test]
    fn test_render_danger_icon() {
        let text = render(&report(RiskTier::Danger, 35.2));
        assert!(text.contains("🚨 Danger"));
    }

    #[test]
    fn test_to_json_fields() {
        let json = to_json(&report(RiskTier::Warning, 32.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["avg_temperature"], 31.0);
        assert_eq!(value["avg_humidity"], 75.0);
        assert_eq!(value["wetbulb"], 32.0);
        assert_eq!(value["tier"], "WARNING");
        assert_eq!(value["guidance"]["icon"], "⚠️");
    }
}
