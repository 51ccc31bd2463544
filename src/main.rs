use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use tableau_dictionary::config::Config;

mod cli;

use cli::Cli;
use cli::app::Commands;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("tableau-dictionary.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting tableau-dictionary");

    let config = Config::load()?;
    debug!("Loaded config: {:?}", config);

    match cli.command {
        Commands::Build(build_args) => {
            cli::commands::build_command(build_args, &config)?;
        }
        Commands::Download(download_args) => {
            cli::commands::download_command(download_args, &config).await?;
        }
        Commands::Settings(settings_args) => {
            cli::commands::settings_command(settings_args, config)?;
        }
    }

    Ok(())
}
