use crate::commands::{calculate, configure, form, service, serve};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bmi-diet")]
#[command(about = "Calculate your BMI and get diet recommendations")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, value_name = "URL", help = "Scoring service base URL (overrides config)")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, config: Config) -> Result<ExitCode> {
        match self {
            Commands::Calculate(args) => calculate::handle_calculate_command(config, &args).await,
            Commands::Form(args) => form::handle_form_command(config, &args).await,
            Commands::Categories => service::handle_categories_command(config).await,
            Commands::Health => service::handle_health_command(config).await,
            Commands::Serve(args) => serve::handle_serve_command(config, &args).await,
            Commands::Config(args) => configure::handle_config_command(config, args.command),
        }
    }

    /// Log level used when neither `--debug` nor `RUST_LOG` is given.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Commands::Serve(_) => "info",
            _ => "warn",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate BMI and diet recommendations from flags
    Calculate(CalculateArgs),

    /// Fill in the form interactively
    Form(FormArgs),

    /// List BMI categories known to the service
    Categories,

    /// Check that the scoring service is up
    Health,

    /// Run the scoring service
    Serve(ServeArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CalculateArgs {
    #[arg(short, long, default_value = "", help = "male or female")]
    pub gender: String,

    #[arg(short = 'H', long, value_name = "CM", allow_hyphen_values = true)]
    pub height: String,

    #[arg(short, long, value_name = "KG", allow_hyphen_values = true)]
    pub weight: String,

    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct FormArgs {
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(short, long, value_name = "ADDR", help = "Address to listen on (overrides config)")]
    pub bind: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from([
            "bmi-diet", "--url", "http://localhost:9000", "calculate", "-g", "male", "-H", "180",
            "-w", "75", "--format", "json",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("http://localhost:9000"));
        let Commands::Calculate(args) = cli.command else {
            panic!("expected calculate");
        };
        assert_eq!(args.gender, "male");
        assert_eq!(args.height, "180");
        assert_eq!(args.weight, "75");
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_calculate_gender_defaults_to_empty() {
        let cli = Cli::try_parse_from(["bmi-diet", "calculate", "-H", "180", "-w", "75"]).unwrap();
        let Commands::Calculate(args) = cli.command else {
            panic!("expected calculate");
        };
        assert!(args.gender.is_empty());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_serve_logs_at_info() {
        let cli = Cli::try_parse_from(["bmi-diet", "serve", "--bind", "127.0.0.1:8080"]).unwrap();
        assert_eq!(cli.command.default_log_level(), "info");

        let cli = Cli::try_parse_from(["bmi-diet", "health"]).unwrap();
        assert_eq!(cli.command.default_log_level(), "warn");
    }
}
