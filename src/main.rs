use bmi_diet::cli::Cli;
use bmi_diet::config::Config;
use bmi_diet::utils::OutputStyle;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(config_path) => Config::load_custom(config_path)?,
        None => {
            Config::ensure_config_exists()?;
            Config::load()?
        }
    };

    if let Some(url) = &cli.url {
        config.service.base_url = url.clone();
        config.validate()?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(if cli.debug {
        "debug"
    } else {
        cli.command.default_log_level()
    });

    let result = match load_config(&cli) {
        Ok(config) => cli.command.execute(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
