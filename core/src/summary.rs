//! Headline metrics derived from a finished projection table.
//!
//! Pure aggregation over the rows the engine returned; nothing here
//! feeds back into the simulation.

use crate::projection::ProjectionRow;
use serde::Serialize;

/// The numbers a dashboard leads with: horizon-wide revenue, end-state
/// user counts, and campaign contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSummary {
    /// Number of months summarized.
    pub months: u32,
    /// Revenue summed over the whole horizon.
    pub total_revenue: f64,
    /// Mean monthly revenue.
    pub average_monthly_revenue: f64,
    /// Revenue growth from the first to the last month, in percent.
    pub revenue_growth_pct: f64,
    /// Annual run rate: final-month revenue x 12.
    pub run_rate: f64,
    /// Final-month user counts.
    pub final_total_users: f64,
    pub final_organic_users: f64,
    pub final_campaign_users: f64,
    /// Mean of the monthly total growth rates, in percent.
    pub average_growth_rate: f64,
    /// Campaign-attributed share of final users, in percent.
    pub campaign_user_share_pct: f64,
    /// Final-month revenue per user.
    pub revenue_per_user: f64,
}

impl ProjectionSummary {
    /// Summarize a projection table. Returns None for an empty table.
    pub fn from_rows(rows: &[ProjectionRow]) -> Option<Self> {
        let first = rows.first()?;
        let last = rows.last()?;
        let months = rows.len() as u32;

        let total_revenue: f64 = rows.iter().map(|r| r.total_revenue).sum();
        let average_monthly_revenue = total_revenue / months as f64;

        let revenue_growth_pct = if first.total_revenue != 0.0 {
            (last.total_revenue - first.total_revenue) / first.total_revenue * 100.0
        } else {
            0.0
        };

        let average_growth_rate =
            rows.iter().map(|r| r.growth_rate).sum::<f64>() / months as f64;

        let (campaign_user_share_pct, revenue_per_user) = if last.total_users != 0.0 {
            (
                last.campaign_users / last.total_users * 100.0,
                last.total_revenue / last.total_users,
            )
        } else {
            (0.0, 0.0)
        };

        Some(Self {
            months,
            total_revenue,
            average_monthly_revenue,
            revenue_growth_pct,
            run_rate: last.total_revenue * 12.0,
            final_total_users: last.total_users,
            final_organic_users: last.base_users,
            final_campaign_users: last.campaign_users,
            average_growth_rate,
            campaign_user_share_pct,
            revenue_per_user,
        })
    }
}
