use anyhow::Result;
use std::process::ExitCode;

use crate::cli::FormArgs;
use crate::commands::build_controller;
use crate::config::Config;
use crate::core::input::SubmissionInput;
use crate::utils::{OutputStyle, print_warning, prompt_input, prompt_yes_no};

struct FormFields {
    gender: String,
    height: String,
    weight: String,
}

/// `None` when input ends before the form is complete.
fn read_fields() -> Result<Option<FormFields>> {
    let Some(gender) = prompt_input(&format!("{} ", OutputStyle::label("Gender (male/female):")))? else {
        return Ok(None);
    };
    let Some(height) = prompt_input(&format!("{} ", OutputStyle::label("Height (cm):")))? else {
        return Ok(None);
    };
    let Some(weight) = prompt_input(&format!("{} ", OutputStyle::label("Weight (kg):")))? else {
        return Ok(None);
    };

    Ok(Some(FormFields {
        gender,
        height,
        weight,
    }))
}

pub async fn handle_form_command(config: Config, args: &FormArgs) -> Result<ExitCode> {
    let controller = build_controller(&config, args.format)?;

    println!("{}", OutputStyle::title("🥗 BMI & Diet Recommendation"));
    println!("{}", OutputStyle::separator());

    loop {
        controller.presenter().redraw_notices();

        let Some(fields) = read_fields()? else {
            println!();
            break;
        };

        let input = SubmissionInput::from_fields(&fields.gender, &fields.height, &fields.weight);
        tokio::select! {
            _ = controller.submit(&input) => {}
            _ = tokio::signal::ctrl_c() => {
                controller.cancel();
                print_warning("Calculation cancelled.");
            }
        }

        println!();
        if !prompt_yes_no("Calculate again?", true)? {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}
