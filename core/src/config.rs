//! Projection configuration: an immutable snapshot of every business
//! parameter one run needs.
//!
//! The engine takes a `&ProjectionConfig` and returns a fresh table, so
//! there is no hidden state between runs: build a new snapshot, run it,
//! render the result.

use crate::campaign::{CampaignCatalog, MarketingCampaign};
use crate::error::ConfigError;
use crate::growth::GrowthScenario;
use crate::subscription::{SubscriptionTier, TierCatalog};
use crate::types::Month;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// User base every projection starts from.
pub const DEFAULT_INITIAL_USERS: f64 = 100.0;

/// Hard cap on the projection horizon.
pub const MAX_PROJECTION_MONTHS: Month = 36;

/// Horizon used when the caller does not ask for one.
pub const DEFAULT_PROJECTION_MONTHS: Month = 12;

/// Bounds for a custom monthly growth rate, as a percentage.
pub const CUSTOM_GROWTH_RATE_MIN: f64 = 1.0;
pub const CUSTOM_GROWTH_RATE_MAX: f64 = 200.0;

/// Largest supported monthly churn fraction (15%).
pub const MAX_CHURN_RATE: f64 = 0.15;

/// Default campaign funnel parameters offered to new campaigns.
pub const DEFAULT_REACH_TO_DOWNLOAD_RATE: f64 = 0.05;
pub const DEFAULT_DOWNLOAD_TO_ACTIVE_RATE: f64 = 0.25;
pub const DEFAULT_ACTIVE_TO_SUBSCRIBER_RATE: f64 = 1.0;

/// All inputs for one projection run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    pub scenario: GrowthScenario,
    /// Percentage in [1, 200]; read only when `scenario` is Custom.
    pub custom_growth_rate: Option<f64>,
    pub enable_churn: bool,
    /// Fraction in [0, 0.15]; read only when `enable_churn` is set.
    pub churn_rate: f64,
    pub tiers: TierCatalog,
    pub campaigns: CampaignCatalog,
    pub initial_users: f64,
}

impl Default for ProjectionConfig {
    /// Moderate growth, churn off, the seed tier catalog, no campaigns.
    fn default() -> Self {
        Self {
            scenario: GrowthScenario::Moderate,
            custom_growth_rate: None,
            enable_churn: false,
            churn_rate: 0.0,
            tiers: TierCatalog::default_tiers(),
            campaigns: CampaignCatalog::new(),
            initial_users: DEFAULT_INITIAL_USERS,
        }
    }
}

impl ProjectionConfig {
    /// The monthly growth fraction net of churn.
    ///
    /// Fails when the scenario cannot be resolved or the churn rate is
    /// outside [0, 0.15]. Churn is subtracted only when enabled.
    pub fn net_growth_rate(&self) -> Result<f64, ConfigError> {
        let growth_rate = self.scenario.resolve(self.custom_growth_rate)?;
        if !self.enable_churn {
            return Ok(growth_rate);
        }
        if !(0.0..=MAX_CHURN_RATE).contains(&self.churn_rate) {
            return Err(ConfigError::ChurnRateOutOfRange(self.churn_rate));
        }
        Ok(growth_rate - self.churn_rate)
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// The raw file shape is converted through the fallible entity
    /// constructors, so a file with an out-of-range price or funnel
    /// rate is rejected as a whole.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let file: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Cannot parse {}", path.display()))?;
        file.into_config()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }
}

// ── Raw file shapes ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TierFile {
    name: String,
    monthly_price: f64,
    #[serde(default)]
    features: Vec<String>,
    distribution_percentage: f64,
}

#[derive(Debug, Deserialize)]
struct CampaignFile {
    name: String,
    campaign_id: String,
    start_month: Month,
    duration_months: Month,
    budget: f64,
    expected_reach: u64,
    reach_to_download_rate: f64,
    download_to_active_rate: f64,
    active_to_subscriber_rate: f64,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    growth_scenario: String,
    #[serde(default)]
    custom_growth_rate: Option<f64>,
    #[serde(default)]
    enable_churn: bool,
    #[serde(default)]
    churn_rate: f64,
    tiers: Vec<TierFile>,
    #[serde(default)]
    campaigns: Vec<CampaignFile>,
    #[serde(default)]
    initial_users: Option<f64>,
}

impl ConfigFile {
    fn into_config(self) -> anyhow::Result<ProjectionConfig> {
        let scenario = GrowthScenario::from_label(&self.growth_scenario)?;

        let mut tiers = TierCatalog::new();
        for t in self.tiers {
            let tier = SubscriptionTier::new(
                &t.name,
                t.monthly_price,
                t.features,
                t.distribution_percentage,
            )?;
            tiers.add(tier)?;
        }

        let mut campaigns = CampaignCatalog::new();
        for c in self.campaigns {
            let campaign = MarketingCampaign::new(
                &c.name,
                &c.campaign_id,
                c.start_month,
                c.duration_months,
                c.budget,
                c.expected_reach,
                c.reach_to_download_rate,
                c.download_to_active_rate,
                c.active_to_subscriber_rate,
            )?;
            // Overlaps are advisory; add() already logs them.
            campaigns.add(campaign)?;
        }

        Ok(ProjectionConfig {
            scenario,
            custom_growth_rate: self.custom_growth_rate,
            enable_churn: self.enable_churn,
            churn_rate: self.churn_rate,
            tiers,
            campaigns,
            initial_users: self.initial_users.unwrap_or(DEFAULT_INITIAL_USERS),
        })
    }
}
