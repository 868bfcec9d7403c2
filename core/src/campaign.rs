//! Marketing campaigns and the campaign catalog.
//!
//! A campaign is a time-boxed acquisition effort described by a
//! reach -> download -> active -> subscriber conversion funnel. The
//! catalog turns its campaigns into a cumulative per-month series of
//! campaign-attributed users:
//!   1. Each campaign yields `total_new_users` over its lifetime.
//!   2. Those users arrive uniformly across the active window.
//!   3. Users acquired in a month persist for every later month, so the
//!      series is a non-decreasing step function, flat after the window.
//!   4. Campaigns accumulate additively; overlap is allowed and never
//!      capped or deduplicated.

use crate::error::ValidationError;
use crate::types::{CampaignId, Month};
use serde::Serialize;

/// One time-boxed acquisition effort. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketingCampaign {
    name: String,
    campaign_id: CampaignId,
    start_month: Month,
    duration_months: Month,
    budget: f64,
    expected_reach: u64,
    reach_to_download_rate: f64,
    download_to_active_rate: f64,
    active_to_subscriber_rate: f64,
}

impl MarketingCampaign {
    /// Construct a campaign, enforcing:
    /// - non-empty campaign id
    /// - 1 <= start_month <= 12 and 1 <= duration_months <= 12
    /// - budget >= 0 (display-only; the simulation math never reads it)
    /// - each funnel conversion rate in [0, 1]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        campaign_id: &str,
        start_month: Month,
        duration_months: Month,
        budget: f64,
        expected_reach: u64,
        reach_to_download_rate: f64,
        download_to_active_rate: f64,
        active_to_subscriber_rate: f64,
    ) -> Result<Self, ValidationError> {
        if campaign_id.trim().is_empty() {
            return Err(ValidationError::EmptyCampaignId);
        }
        if !(1..=12).contains(&start_month) {
            return Err(ValidationError::StartMonthOutOfRange(start_month));
        }
        if !(1..=12).contains(&duration_months) {
            return Err(ValidationError::DurationOutOfRange(duration_months));
        }
        if budget < 0.0 {
            return Err(ValidationError::NegativeBudget(budget));
        }
        for (stage, value) in [
            ("reach-to-download", reach_to_download_rate),
            ("download-to-active", download_to_active_rate),
            ("active-to-subscriber", active_to_subscriber_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::ConversionRateOutOfRange { stage, value });
            }
        }
        Ok(Self {
            name: name.to_string(),
            campaign_id: campaign_id.to_string(),
            start_month,
            duration_months,
            budget,
            expected_reach,
            reach_to_download_rate,
            download_to_active_rate,
            active_to_subscriber_rate,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    pub fn start_month(&self) -> Month {
        self.start_month
    }

    pub fn duration_months(&self) -> Month {
        self.duration_months
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn expected_reach(&self) -> u64 {
        self.expected_reach
    }

    /// Total users attributable to this campaign over its lifetime:
    /// reach x reach_to_download x download_to_active x active_to_subscriber.
    /// Carried as a fraction; nothing is rounded here.
    pub fn total_new_users(&self) -> f64 {
        self.expected_reach as f64
            * self.reach_to_download_rate
            * self.download_to_active_rate
            * self.active_to_subscriber_rate
    }

    /// Users acquired per month of the active window.
    pub fn monthly_acquisition_rate(&self) -> f64 {
        self.total_new_users() / self.duration_months as f64
    }

    /// Inclusive-bound interval intersection on [start, start + duration].
    pub fn overlaps(&self, other: &MarketingCampaign) -> bool {
        self.start_month <= other.start_month + other.duration_months
            && self.start_month + self.duration_months >= other.start_month
    }
}

/// A non-blocking warning that a newly added campaign's month range
/// intersects an existing campaign's. Advisory only: the campaign is
/// added regardless.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapAdvisory {
    pub existing_campaign_id: CampaignId,
    pub existing_start_month: Month,
}

/// Ordered collection of campaigns for one projection run. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CampaignCatalog {
    campaigns: Vec<MarketingCampaign>,
}

impl CampaignCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a campaign, rejecting a duplicate id.
    ///
    /// Returns one advisory per existing campaign whose month range
    /// intersects the new one; the campaign is added either way.
    pub fn add(
        &mut self,
        campaign: MarketingCampaign,
    ) -> Result<Vec<OverlapAdvisory>, ValidationError> {
        if self
            .campaigns
            .iter()
            .any(|c| c.campaign_id == campaign.campaign_id)
        {
            return Err(ValidationError::DuplicateCampaign(
                campaign.campaign_id.clone(),
            ));
        }

        let advisories: Vec<OverlapAdvisory> = self
            .campaigns
            .iter()
            .filter(|existing| campaign.overlaps(existing))
            .map(|existing| OverlapAdvisory {
                existing_campaign_id: existing.campaign_id.clone(),
                existing_start_month: existing.start_month,
            })
            .collect();

        for advisory in &advisories {
            log::warn!(
                "campaign '{}' overlaps existing campaign '{}' starting in month {}",
                campaign.campaign_id,
                advisory.existing_campaign_id,
                advisory.existing_start_month,
            );
        }

        self.campaigns.push(campaign);
        Ok(advisories)
    }

    /// Remove a campaign by id. Returns false if no campaign matched.
    pub fn remove(&mut self, campaign_id: &str) -> bool {
        let before = self.campaigns.len();
        self.campaigns.retain(|c| c.campaign_id != campaign_id);
        self.campaigns.len() < before
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarketingCampaign> {
        self.campaigns.iter()
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Cumulative campaign-attributed users per month of the horizon.
    ///
    /// For every month of a campaign's active window (clipped to the
    /// horizon; overhang is silently dropped), the campaign's monthly
    /// rate is added to that month and to every later month through the
    /// end of the horizon. The result is non-decreasing by construction.
    pub fn cumulative_users(&self, horizon: Month) -> Vec<f64> {
        let mut cumulative = vec![0.0; horizon as usize];

        for campaign in &self.campaigns {
            let monthly_rate = campaign.monthly_acquisition_rate();
            let first = campaign.start_month;
            let last = (campaign.start_month + campaign.duration_months - 1).min(horizon);

            for active_month in first..=last {
                for month in active_month..=horizon {
                    cumulative[(month - 1) as usize] += monthly_rate;
                }
            }
        }

        cumulative
    }
}
