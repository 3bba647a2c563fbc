use crate::commands::{Cli, Commands};
use crate::report::{inspect_cuesheets, validate_cuesheets};
use anyhow::Result;
use clap::Parser;

mod commands;
mod error;
mod report;
mod util;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(cmd) => inspect_cuesheets(cmd).await?,
        Commands::Validate(cmd) => validate_cuesheets(cmd).await?,
    }

    Ok(())
}
