use anyhow::{Context, Result};
use std::process::ExitCode;

use crate::client::{HttpScoringClient, ScoringService};
use crate::config::Config;
use crate::utils::OutputStyle;

pub async fn handle_categories_command(config: Config) -> Result<ExitCode> {
    let client = HttpScoringClient::new(config.service)?;

    let rows = client
        .categories()
        .await
        .context("Failed to fetch BMI categories")?;

    OutputStyle::print_categories(&rows);
    Ok(ExitCode::SUCCESS)
}

pub async fn handle_health_command(config: Config) -> Result<ExitCode> {
    let client = HttpScoringClient::new(config.service)?;

    let health = client
        .health()
        .await
        .with_context(|| format!("Scoring service at {} is not reachable", client.base_url()))?;

    OutputStyle::print_health(client.base_url(), &health);
    Ok(if health.status == "healthy" {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
