use anyhow::Result;
use std::process::ExitCode;

use crate::cli::ServeArgs;
use crate::config::{Config, ServerConfig};
use crate::server;

pub async fn handle_serve_command(config: Config, args: &ServeArgs) -> Result<ExitCode> {
    let server_config = match &args.bind {
        Some(bind) => ServerConfig { bind: bind.clone() },
        None => config.server,
    };

    server::run(server_config.bind_addr()?).await?;
    Ok(ExitCode::SUCCESS)
}
