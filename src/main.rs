mod commands;

use clap::Parser;
use log::debug;
use std::process::ExitCode;

use creator_portal::config::CONFIG;

use crate::commands::{Cli, Context};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let mut config = CONFIG.clone();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    debug!(
        "Using API at {} with session file {}",
        config.api_url,
        config.session_file.display()
    );

    let ctx = Context::new(config);
    match commands::run(cli.command, &ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
