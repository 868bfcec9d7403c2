//! Subscription tiers and the tier catalog.
//!
//! A tier is pure data: pricing plus the share of the active user base
//! it captures. Validation happens in the constructor so a tier outside
//! its invariant bounds never enters a catalog.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Explicit key type for per-tier breakdowns: the lower-cased tier name.
///
/// Breakdown rows are keyed by this id rather than by runtime-built
/// column names, so "Basic" and "basic" cannot collide silently.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TierId(String);

impl TierId {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One pricing plan. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionTier {
    name: String,
    monthly_price: f64,
    features: Vec<String>,
    distribution_percentage: f64,
}

impl SubscriptionTier {
    /// Construct a tier, enforcing:
    /// - non-empty name
    /// - 0 <= monthly_price <= 100
    /// - 0 <= distribution_percentage <= 1
    ///
    /// `features` is display-only and has no effect on the projection.
    pub fn new(
        name: &str,
        monthly_price: f64,
        features: Vec<String>,
        distribution_percentage: f64,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyTierName);
        }
        if !(0.0..=100.0).contains(&monthly_price) {
            return Err(ValidationError::PriceOutOfRange(monthly_price));
        }
        if !(0.0..=1.0).contains(&distribution_percentage) {
            return Err(ValidationError::DistributionOutOfRange(
                distribution_percentage,
            ));
        }
        Ok(Self {
            name: name.to_string(),
            monthly_price,
            features,
            distribution_percentage,
        })
    }

    pub fn id(&self) -> TierId {
        TierId::new(&self.name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monthly_price(&self) -> f64 {
        self.monthly_price
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn distribution_percentage(&self) -> f64 {
        self.distribution_percentage
    }
}

/// Ordered collection of tiers for one projection run.
///
/// Tier ids must be unique. Distribution percentages are validated
/// per tier only; the catalog does not require them to sum to 1, so
/// per-tier user counts may deliberately not reconcile to the total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TierCatalog {
    tiers: Vec<SubscriptionTier>,
}

impl TierCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tier, rejecting a duplicate id (case-insensitive name).
    pub fn add(&mut self, tier: SubscriptionTier) -> Result<(), ValidationError> {
        if self.tiers.iter().any(|t| t.id() == tier.id()) {
            return Err(ValidationError::DuplicateTier(tier.name.clone()));
        }
        self.tiers.push(tier);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubscriptionTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// The seed catalog shipped with the tool: Basic, Standard, Premium.
    pub fn default_tiers() -> Self {
        let seed = |name: &str, price: f64, features: [&str; 3], share: f64| SubscriptionTier {
            name: name.to_string(),
            monthly_price: price,
            features: features.iter().map(|f| f.to_string()).collect(),
            distribution_percentage: share,
        };
        Self {
            tiers: vec![
                seed(
                    "Basic",
                    0.70,
                    ["Basic Analytics", "Limited Storage", "Email Support"],
                    0.70,
                ),
                seed(
                    "Standard",
                    5.00,
                    ["Advanced Analytics", "Unlimited Storage", "Priority Support"],
                    0.22,
                ),
                seed(
                    "Premium",
                    12.50,
                    ["Custom Analytics", "Enterprise Storage", "24/7 Support"],
                    0.08,
                ),
            ],
        }
    }
}
