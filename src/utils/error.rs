use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("System error: {0}")]
    System(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::Network(msg) => {
            eprintln!("🌐 {}", OutputStyle::error(&format!("Network: {}", msg)));
        }
        AppError::Timeout(secs) => {
            eprintln!("⏱️  {}", OutputStyle::error(&format!("No answer within {}s", secs)));
        }
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::error(msg));
        }
        AppError::Io(msg) | AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}
