use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use tableau_dictionary::api::TableauClient;
use tableau_dictionary::auth::Credentials;
use tableau_dictionary::config::Config;
use tableau_dictionary::loader::{FsRemover, prune_placeholders};
use tableau_dictionary::ui::prompts::prompt_credentials;

#[derive(Args)]
pub struct DownloadCommands {
    /// Directory to download into
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
    /// Tableau Server URL
    #[arg(long)]
    pub server: Option<String>,
    /// Username
    #[arg(long)]
    pub username: Option<String>,
    /// Password
    #[arg(long)]
    pub password: Option<String>,
    /// Site content URL (empty for the default site)
    #[arg(long)]
    pub site: Option<String>,
    /// REST API version
    #[arg(long)]
    pub api_version: Option<String>,
    /// Import credentials from environment variables
    #[arg(long)]
    pub from_env: bool,
    /// Import credentials from specified .env file
    #[arg(long)]
    pub from_env_file: Option<PathBuf>,
}

pub async fn download_command(args: DownloadCommands, config: &Config) -> Result<()> {
    let credentials = if args.from_env {
        Credentials::from_env()?
    } else if let Some(path) = &args.from_env_file {
        Credentials::from_env_file(path)?
    } else {
        prompt_credentials(
            args.server.clone().or_else(|| config.server.url.clone()),
            args.username.clone(),
            args.password.clone(),
        )?
    };

    let mut server_config = config.server.clone();
    if let Some(api_version) = args.api_version {
        server_config.api_version = api_version;
    }
    let site = args.site.unwrap_or_else(|| server_config.site.clone());

    let dir = args.dir.unwrap_or_else(|| config.paths.datasource_dir.clone());
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create download directory {}", dir.display()))?;
    println!();
    println!("Datasources will download to: {}", dir.display().to_string().cyan());
    println!();

    let client = TableauClient::from_config(&credentials.server, &server_config)?;
    let session = client.sign_in(&credentials, &site).await?;

    let result = async {
        let datasources = client.list_datasources(&session).await?;
        for datasource in &datasources {
            let path = client.download_datasource(&session, datasource, &dir).await?;
            info!("Downloaded '{}' to {}", datasource.name, path.display());
            println!("{}", datasource.name);
        }
        Ok::<usize, anyhow::Error>(datasources.len())
    }
    .await;

    if let Err(e) = client.sign_out(&session).await {
        warn!("{:#}", e);
    }
    let downloaded = result?;

    println!();
    println!(
        "  {} {} datasources",
        "Downloaded".bright_green().bold(),
        downloaded
    );

    prune_placeholders(&dir, &FsRemover)?;
    Ok(())
}
