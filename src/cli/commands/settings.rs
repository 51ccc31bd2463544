use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use std::path::PathBuf;
use tableau_dictionary::config::Config;

#[derive(Args)]
pub struct SettingsCommands {
    #[command(subcommand)]
    pub command: SettingsSubcommands,
}

#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Show the current settings
    Show,
    /// Set the Tableau Server to download from
    SetServer {
        /// Tableau Server URL
        url: String,
        /// Site content URL
        #[arg(long)]
        site: Option<String>,
        /// REST API version
        #[arg(long)]
        api_version: Option<String>,
    },
    /// Set the default datasource directory
    SetDir {
        /// Directory path
        dir: PathBuf,
    },
}

pub fn settings_command(args: SettingsCommands, mut config: Config) -> Result<()> {
    match args.command {
        SettingsSubcommands::Show => {
            let path = Config::get_config_path()?;
            println!("  {}: {}", "Config file".dimmed(), path.display().to_string().cyan());
            println!(
                "  {}: {}",
                "Server".dimmed(),
                config.server.url.as_deref().unwrap_or("(not set)").cyan()
            );
            println!("  {}: {}", "Site".dimmed(), config.server.site.cyan());
            println!("  {}: {}", "API version".dimmed(), config.server.api_version.cyan());
            println!("  {}: {}s", "Timeout".dimmed(), config.server.timeout_secs);
            println!("  {}: {}", "Page size".dimmed(), config.server.page_size);
            println!(
                "  {}: {}",
                "Datasource dir".dimmed(),
                config.paths.datasource_dir.display().to_string().cyan()
            );
            println!(
                "  {}: {}",
                "JSON output".dimmed(),
                config.paths.json_output.display().to_string().cyan()
            );
            println!(
                "  {}: {}",
                "Markdown output".dimmed(),
                config.paths.markdown_output.display().to_string().cyan()
            );
        }
        SettingsSubcommands::SetServer {
            url,
            site,
            api_version,
        } => {
            config.set_server(url, site, api_version);
            config.save()?;
            println!("{}", "✓ Server saved".bright_green());
        }
        SettingsSubcommands::SetDir { dir } => {
            config.set_datasource_dir(dir);
            config.save()?;
            println!("{}", "✓ Datasource directory saved".bright_green());
        }
    }
    Ok(())
}
