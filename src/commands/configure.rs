use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::{OutputStyle, print_success, prompt_yes_no};

pub fn handle_config_command(
    config: Config,
    command: Option<ConfigCommands>,
) -> Result<ExitCode> {
    match command {
        Some(ConfigCommands::Show) | None => handle_show_command(&config)?,
        Some(ConfigCommands::Path) => handle_path_command(&Config::config_file_path())?,
        Some(ConfigCommands::Reset) => handle_reset_command()?,
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_show_command(config: &Config) -> Result<()> {
    println!("⚙️  BMI Diet Configuration");
    println!("=========================");

    println!("General:");
    println!("  Color: {}", config.general.color);
    println!("  Format: {:?}", config.general.format);
    println!("  Reveal delay: {}ms", config.general.reveal_delay_ms);
    println!("  Notice duration: {}s", config.general.notice_seconds);

    println!("Service:");
    println!("  Base URL: {}", config.service.base_url);
    println!("  Timeout: {}s", config.service.timeout_secs);
    println!("  User agent: {}", config.service.user_agent);

    println!("Server:");
    println!("  Bind: {}", config.server.bind);

    Ok(())
}

fn handle_path_command(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

fn handle_reset_command() -> Result<()> {
    if !prompt_yes_no("Reset configuration to defaults?", false)? {
        println!("{}", OutputStyle::muted("Configuration unchanged"));
        return Ok(());
    }

    Config::default().save()?;
    print_success("Configuration reset to defaults");
    Ok(())
}
