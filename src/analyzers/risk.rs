use serde::Serialize;
use std::fmt;

/// Wet-bulb temperature (°C) at or above which conditions are dangerous.
pub const DANGER_THRESHOLD_C: f64 = 35.0;

/// Wet-bulb temperature (°C) at or above which caution is advised.
pub const WARNING_THRESHOLD_C: f64 = 31.0;

/// Heat-stress tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Safe,
    Warning,
    Danger,
}

/// Fixed text shown alongside a tier.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TierGuidance {
    pub headline: &'static str,
    pub icon: &'static str,
    pub advice: &'static str,
}

static DANGER: TierGuidance = TierGuidance {
    headline: "Danger: wet-bulb temperature at or beyond the limit of human survivability",
    icon: "🚨",
    advice: "Sweat can no longer cool the body, even at rest in the shade.\n\
             Stay indoors in an air-conditioned space.\n\
             Stop all outdoor activity and check on the elderly and vulnerable.\n\
             Seek medical help immediately for confusion, fainting or a high body temperature.",
};

static WARNING: TierGuidance = TierGuidance {
    headline: "Warning: heat stress likely during physical activity",
    icon: "⚠️",
    advice: "Limit strenuous outdoor activity, especially around midday.\n\
             Drink water regularly and rest in the shade or indoors.\n\
             Watch for dizziness, nausea or cramps and stop at once if they appear.",
};

static SAFE: TierGuidance = TierGuidance {
    headline: "Safe: low risk of heat stress",
    icon: "✅",
    advice: "Normal activity is fine.\n\
             Stay hydrated and take breaks during prolonged exertion outdoors.",
};

impl RiskTier {
    /// Maps a wet-bulb temperature onto a tier. Lower bounds are inclusive;
    /// every real input, however extreme, lands in exactly one tier.
    pub fn from_wetbulb(wetbulb_c: f64) -> Self {
        match wetbulb_c {
            w if w >= DANGER_THRESHOLD_C => RiskTier::Danger,
            w if w >= WARNING_THRESHOLD_C => RiskTier::Warning,
            _ => RiskTier::Safe,
        }
    }

    pub fn guidance(&self) -> &'static TierGuidance {
        match self {
            RiskTier::Danger => &DANGER,
            RiskTier::Warning => &WARNING,
            RiskTier::Safe => &SAFE,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Danger => f.write_str("DANGER"),
            RiskTier::Warning => f.write_str("WARNING"),
            RiskTier::Safe => f.write_str("SAFE"),
        }
    }
}

/// Classifies a wet-bulb temperature and pairs the tier with its guidance.
pub fn classify(wetbulb_c: f64) -> (RiskTier, &'static TierGuidance) {
    let tier = RiskTier::from_wetbulb(wetbulb_c);
    (tier, tier.guidance())
}
