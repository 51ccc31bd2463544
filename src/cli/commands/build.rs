use anyhow::Result;
use clap::Args;
use colored::*;
use log::info;
use std::path::PathBuf;
use tableau_dictionary::config::Config;
use tableau_dictionary::dictionary::build_dictionary;
use tableau_dictionary::loader::{FileRemover, FsRemover, KeepFiles, load_datasources};
use tableau_dictionary::output::{write_json, write_markdown};

#[derive(Args)]
pub struct BuildCommands {
    /// Directory holding the .tds/.tdsx files
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
    /// Path of the JSON document dump
    #[arg(long)]
    pub json: Option<PathBuf>,
    /// Path of the Markdown outline
    #[arg(long)]
    pub markdown: Option<PathBuf>,
    /// Skip the JSON document dump
    #[arg(long)]
    pub no_json: bool,
    /// Skip the Markdown outline
    #[arg(long)]
    pub no_markdown: bool,
    /// Leave federated placeholder files on disk
    #[arg(long)]
    pub keep_placeholders: bool,
}

pub fn build_command(args: BuildCommands, config: &Config) -> Result<()> {
    let dir = args.dir.unwrap_or_else(|| config.paths.datasource_dir.clone());
    info!("Building data dictionary from {}", dir.display());

    let remover: &dyn FileRemover = if args.keep_placeholders {
        &KeepFiles
    } else {
        &FsRemover
    };

    let report = load_datasources(&dir, remover)?;
    for datasource in &report.datasources {
        println!("{}", datasource.name);
    }
    let dictionary = build_dictionary(&report.datasources);

    println!();
    println!(
        "  {} {} datasources",
        "Catalogued".bright_green().bold(),
        dictionary.len()
    );

    if !args.no_json {
        let path = args.json.unwrap_or_else(|| config.paths.json_output.clone());
        write_json(&dictionary, &path)?;
        println!("  {}: {}", "JSON".dimmed(), path.display().to_string().cyan());
    }

    if !args.no_markdown {
        let path = args
            .markdown
            .unwrap_or_else(|| config.paths.markdown_output.clone());
        write_markdown(&dictionary, &path)?;
        println!("  {}: {}", "Markdown".dimmed(), path.display().to_string().cyan());
    }

    Ok(())
}
