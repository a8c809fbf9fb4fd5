pub mod calculate;
pub mod configure;
pub mod form;
pub mod serve;
pub mod service;

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::client::HttpScoringClient;
use crate::config::Config;
use crate::controller::{ControllerSettings, FormController};
use crate::core::traits::Presenter;
use crate::presenter::TerminalPresenter;

pub type TerminalController = FormController<HttpScoringClient, TerminalPresenter>;

/// Wire up the HTTP client and an installed terminal presenter.
pub fn build_controller(config: &Config, format: Option<OutputFormat>) -> Result<TerminalController> {
    let client = HttpScoringClient::new(config.service.clone())
        .context("Failed to create scoring client")?;

    let mut presenter =
        TerminalPresenter::new(&config.general, format.unwrap_or(config.general.format));
    presenter
        .install()
        .context("Failed to set up the terminal")?;

    Ok(FormController::new(
        client,
        presenter,
        ControllerSettings::from_config(config),
    ))
}
