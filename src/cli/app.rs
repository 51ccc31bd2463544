use super::commands::{BuildCommands, DownloadCommands, SettingsCommands};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tableau-dictionary")]
#[command(about = "Build a data dictionary from Tableau Server datasources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the data dictionary from downloaded datasource files
    Build(BuildCommands),
    /// Download every accessible datasource from Tableau Server
    Download(DownloadCommands),
    /// Application settings management
    Settings(SettingsCommands),
}
