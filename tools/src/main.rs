//! projection-runner: headless revenue projection runner.
//!
//! Usage:
//!   projection-runner --months 12
//!   projection-runner --scenario "Aggressive (12% monthly)" --churn 0.05
//!   projection-runner --config plan.json --json

use anyhow::{bail, Result};
use projection_core::{
    config::DEFAULT_PROJECTION_MONTHS, project, GrowthScenario, MarketingCampaign,
    ProjectionConfig, ProjectionSummary,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let months = parse_arg(&args, "--months", DEFAULT_PROJECTION_MONTHS);
    let json_output = args.iter().any(|a| a == "--json");

    let mut config = match str_arg(&args, "--config") {
        Some(path) => ProjectionConfig::from_json_file(path)?,
        None => ProjectionConfig::default(),
    };

    if let Some(label) = str_arg(&args, "--scenario") {
        config.scenario = GrowthScenario::from_label(label)?;
    }
    if let Some(rate) = str_arg(&args, "--custom-rate") {
        config.custom_growth_rate = Some(rate.parse()?);
    }
    if let Some(rate) = str_arg(&args, "--churn") {
        config.enable_churn = true;
        config.churn_rate = rate.parse()?;
    }
    if args.iter().any(|a| a == "--demo-campaign") {
        let campaign = MarketingCampaign::new(
            "Launch Push",
            "launch-push",
            1,
            3,
            2_500.0,
            10_000,
            0.05,
            0.25,
            1.0,
        )?;
        // add() already warns about any overlap.
        config.campaigns.add(campaign)?;
    }

    let rows = project(&config, months)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Revenue Projection — {}", config.scenario.label());
    if config.enable_churn {
        println!("  churn: {:.1}% monthly", config.churn_rate * 100.0);
    }
    println!();
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>9} {:>12}",
        "month", "organic", "campaign", "total", "growth%", "revenue"
    );
    for row in &rows {
        println!(
            "{:>5} {:>12.0} {:>12.0} {:>12.0} {:>8.2}% {:>12.2}",
            row.month,
            row.base_users,
            row.campaign_users,
            row.total_users,
            row.growth_rate,
            row.total_revenue,
        );
    }

    let Some(summary) = ProjectionSummary::from_rows(&rows) else {
        bail!("projection returned no rows");
    };

    println!();
    println!("Summary ({} months)", summary.months);
    println!("  total revenue:      ${:.2}", summary.total_revenue);
    println!("  avg monthly revenue: ${:.2}", summary.average_monthly_revenue);
    println!("  revenue growth:     {:.1}%", summary.revenue_growth_pct);
    println!("  run rate (ARR):     ${:.2}", summary.run_rate);
    println!("  final users:        {:.0}", summary.final_total_users);
    println!("  campaign share:     {:.1}%", summary.campaign_user_share_pct);
    println!("  revenue per user:   ${:.2}", summary.revenue_per_user);

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
