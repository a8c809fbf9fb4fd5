use crate::cli::OutputFormat;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SERVICE_URL_ENV: &str = "BMI_DIET_SERVICE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub color: bool,
    pub format: OutputFormat,
    #[serde(default)]
    pub reveal_delay_ms: u64,
    pub notice_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            reveal_delay_ms: 40,
            notice_seconds: 5,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
            timeout_secs: 10,
            user_agent: format!("bmi-diet/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5001".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> AppResult<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server bind address '{}': {}", self.bind, e)))
    }
}

impl GeneralConfig {
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_seconds)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save_to(&config_path)?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::parse(&content)?
        } else {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            default_config
        };

        if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
            config.service.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn validate(&self) -> AppResult<()> {
        let url = self.service.base_url.trim();
        if url.is_empty() {
            return Err(AppError::Config("Service URL cannot be empty".to_string()));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Service URL must start with http:// or https://, got '{}'",
                url
            )));
        }

        if self.service.timeout_secs == 0 {
            return Err(AppError::Config(
                "Service timeout must be at least one second".to_string(),
            ));
        }

        if self.general.notice_seconds == 0 {
            return Err(AppError::Config(
                "Notice duration must be at least one second".to_string(),
            ));
        }

        self.server.bind_addr()?;

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bmi-diet")
            .join("config.toml")
    }
}
