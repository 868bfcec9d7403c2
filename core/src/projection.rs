//! The projection engine: month-by-month growth simulation.
//!
//! One call computes the whole table:
//!   1. Validate the horizon and the tier catalog.
//!   2. Resolve the net monthly growth rate (scenario minus churn).
//!   3. Build the cumulative campaign-user series.
//!   4. Month 1 compounds from the initial user base; months 2..N
//!      compound from the prior month's TOTAL users, so campaign users
//!      grow organically once acquired.
//!   5. Post-pass: split each month's total across tiers and price it.
//!
//! The computation is pure and deterministic: same config, same table.
//! User counts stay fractional throughout; rounding is presentation's
//! job.

use crate::config::{ProjectionConfig, MAX_PROJECTION_MONTHS};
use crate::error::{ConfigError, ProjectionResult};
use crate::subscription::TierId;
use crate::types::Month;
use serde::Serialize;

/// Per-tier slice of one month: users on the tier and the revenue they
/// generate at the tier's monthly price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierBreakdown {
    pub tier_id: TierId,
    pub users: f64,
    pub revenue: f64,
}

/// One month of the projection. Growth rates are percentages; they go
/// negative when churn outruns growth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub month: Month,
    /// Cumulative organically grown users.
    pub base_users: f64,
    /// Cumulative campaign-attributed users.
    pub campaign_users: f64,
    /// base_users + campaign_users, always.
    pub total_users: f64,
    pub organic_growth_rate: f64,
    pub campaign_growth_rate: f64,
    /// organic_growth_rate + campaign_growth_rate.
    pub growth_rate: f64,
    pub total_revenue: f64,
    /// One entry per configured tier, in catalog order.
    pub tiers: Vec<TierBreakdown>,
}

impl ProjectionRow {
    /// Look up one tier's breakdown by id.
    pub fn tier(&self, id: &TierId) -> Option<&TierBreakdown> {
        self.tiers.iter().find(|t| &t.tier_id == id)
    }
}

/// Run the projection over `months` periods.
///
/// Fails before any computation when the horizon exceeds
/// [`MAX_PROJECTION_MONTHS`], the tier catalog is empty, or the
/// scenario/churn settings cannot be resolved. Never returns a partial
/// table.
///
/// If churn exactly offsets growth, a month's total can reach zero and
/// the following month's growth-rate divisions produce non-finite
/// values; they are passed through untouched.
pub fn project(config: &ProjectionConfig, months: Month) -> ProjectionResult<Vec<ProjectionRow>> {
    if months > MAX_PROJECTION_MONTHS {
        return Err(ConfigError::HorizonTooLong {
            requested: months,
            max: MAX_PROJECTION_MONTHS,
        }
        .into());
    }
    if config.tiers.is_empty() {
        return Err(ConfigError::NoTiers.into());
    }

    let net_growth_rate = config.net_growth_rate()?;
    let campaign_users = config.campaigns.cumulative_users(months);

    let mut rows: Vec<ProjectionRow> = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let idx = (month - 1) as usize;
        let campaign_cumulative = campaign_users[idx];

        let row = if month == 1 {
            first_month(config, net_growth_rate, campaign_cumulative)
        } else {
            let prev = &rows[idx - 1];
            subsequent_month(month, net_growth_rate, campaign_cumulative, prev)
        };
        rows.push(row);
    }

    // Tier split and pricing, after all user totals are known.
    for row in &mut rows {
        let mut total_revenue = 0.0;
        for tier in config.tiers.iter() {
            let users = row.total_users * tier.distribution_percentage();
            let revenue = users * tier.monthly_price();
            total_revenue += revenue;
            row.tiers.push(TierBreakdown {
                tier_id: tier.id(),
                users,
                revenue,
            });
        }
        row.total_revenue = total_revenue;
    }

    if let Some(last) = rows.last() {
        log::debug!(
            "projection complete: months={} final_users={:.1} final_revenue={:.2}",
            months,
            last.total_users,
            last.total_revenue,
        );
    }

    Ok(rows)
}

/// Month 1 compounds from the configured initial user base, and its
/// growth rates are measured against that base rather than a prior row.
fn first_month(
    config: &ProjectionConfig,
    net_growth_rate: f64,
    campaign_users: f64,
) -> ProjectionRow {
    let initial = config.initial_users;
    let base_users = initial * (1.0 + net_growth_rate);
    let organic_growth_rate = (base_users - initial) / initial * 100.0;
    let campaign_growth_rate = if campaign_users > 0.0 {
        campaign_users / initial * 100.0
    } else {
        0.0
    };

    ProjectionRow {
        month: 1,
        base_users,
        campaign_users,
        total_users: base_users + campaign_users,
        organic_growth_rate,
        campaign_growth_rate,
        growth_rate: organic_growth_rate + campaign_growth_rate,
        total_revenue: 0.0,
        tiers: Vec::new(),
    }
}

fn subsequent_month(
    month: Month,
    net_growth_rate: f64,
    campaign_users: f64,
    prev: &ProjectionRow,
) -> ProjectionRow {
    let prev_total = prev.total_users;

    let new_organic_users = prev_total * net_growth_rate;
    let base_users = prev_total + new_organic_users;
    let organic_growth_rate = new_organic_users / prev_total * 100.0;

    // The cumulative series only rises while a campaign is active; a
    // flat month contributes no campaign growth.
    let campaign_growth_rate = if campaign_users > prev.campaign_users {
        (campaign_users - prev.campaign_users) / prev_total * 100.0
    } else {
        0.0
    };

    ProjectionRow {
        month,
        base_users,
        campaign_users,
        total_users: base_users + campaign_users,
        organic_growth_rate,
        campaign_growth_rate,
        growth_rate: organic_growth_rate + campaign_growth_rate,
        total_revenue: 0.0,
        tiers: Vec::new(),
    }
}
