//! Growth-rate resolver: maps a named scenario (or a custom percentage)
//! to the monthly growth fraction the simulation compounds with.

use crate::config::{CUSTOM_GROWTH_RATE_MAX, CUSTOM_GROWTH_RATE_MIN};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// A named preset monthly growth rate, or a user-supplied custom rate.
///
/// The serialized form is the display label, e.g. "Moderate (8% monthly)".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthScenario {
    #[serde(rename = "Conservative (3% monthly)")]
    Conservative,
    #[serde(rename = "Moderate (8% monthly)")]
    Moderate,
    #[serde(rename = "Aggressive (12% monthly)")]
    Aggressive,
    #[serde(rename = "Custom")]
    Custom,
}

impl GrowthScenario {
    /// Parse a scenario from its display label.
    pub fn from_label(label: &str) -> Result<Self, ConfigError> {
        match label {
            "Conservative (3% monthly)" => Ok(Self::Conservative),
            "Moderate (8% monthly)" => Ok(Self::Moderate),
            "Aggressive (12% monthly)" => Ok(Self::Aggressive),
            "Custom" => Ok(Self::Custom),
            other => Err(ConfigError::UnknownScenario(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative (3% monthly)",
            Self::Moderate => "Moderate (8% monthly)",
            Self::Aggressive => "Aggressive (12% monthly)",
            Self::Custom => "Custom",
        }
    }

    /// The preset monthly growth fraction. None for Custom, which takes
    /// its rate from the configuration instead.
    pub fn preset_rate(&self) -> Option<f64> {
        match self {
            Self::Conservative => Some(0.03),
            Self::Moderate => Some(0.08),
            Self::Aggressive => Some(0.12),
            Self::Custom => None,
        }
    }

    /// Resolve the monthly growth fraction for this scenario.
    ///
    /// `custom_rate` is a percentage in [1, 200], required only when the
    /// scenario is Custom; it is divided by 100 here.
    pub fn resolve(&self, custom_rate: Option<f64>) -> Result<f64, ConfigError> {
        match self.preset_rate() {
            Some(rate) => Ok(rate),
            None => {
                let pct = custom_rate.ok_or(ConfigError::MissingCustomRate)?;
                if !(CUSTOM_GROWTH_RATE_MIN..=CUSTOM_GROWTH_RATE_MAX).contains(&pct) {
                    return Err(ConfigError::CustomRateOutOfRange(pct));
                }
                Ok(pct / 100.0)
            }
        }
    }
}
