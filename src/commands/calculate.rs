use anyhow::Result;
use std::process::ExitCode;

use crate::cli::CalculateArgs;
use crate::commands::build_controller;
use crate::config::Config;
use crate::core::input::SubmissionInput;

pub async fn handle_calculate_command(config: Config, args: &CalculateArgs) -> Result<ExitCode> {
    let controller = build_controller(&config, args.format)?;
    let input = SubmissionInput::from_fields(&args.gender, &args.height, &args.weight);

    let outcome = controller.submit(&input).await;

    Ok(if outcome.is_rendered() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
