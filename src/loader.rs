//! Datasource file loading
//!
//! Reads `.tds` and `.tdsx` files from a directory and parses them into
//! [`DatasourceSchema`]s. Federated placeholders are handed to a
//! [`FileRemover`] and left out of the result.

use crate::dictionary::DatasourceSchema;
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Deletes the files of placeholder datasources
pub trait FileRemover {
    fn remove(&self, path: &Path) -> Result<()>;
}

/// Removes files from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRemover;

impl FileRemover for FsRemover {
    fn remove(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))
    }
}

/// Leaves files in place
#[derive(Debug, Default, Clone, Copy)]
pub struct KeepFiles;

impl FileRemover for KeepFiles {
    fn remove(&self, path: &Path) -> Result<()> {
        debug!("Keeping placeholder file {}", path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasourceFormat {
    /// Plain XML definition
    Tds,
    /// Zip package holding a `.tds`
    Tdsx,
}

impl DatasourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "tds" => Some(Self::Tds),
            "tdsx" => Some(Self::Tdsx),
            _ => None,
        }
    }
}

/// A parsed, non-placeholder datasource
#[derive(Debug, Clone)]
pub struct Datasource {
    /// Display name, unique within a run
    pub name: String,
    pub path: PathBuf,
    pub schema: DatasourceSchema,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub datasources: Vec<Datasource>,
    /// Placeholder files handed to the remover
    pub removed: Vec<PathBuf>,
    /// Unsupported or unreadable files
    pub skipped: Vec<PathBuf>,
}

/// Read the descriptor XML of a datasource file
pub fn read_descriptor(path: &Path, format: DatasourceFormat) -> Result<String> {
    match format {
        DatasourceFormat::Tds => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        DatasourceFormat::Tdsx => read_packaged_descriptor(path),
    }
}

fn read_packaged_descriptor(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Failed to open archive {}", path.display()))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .with_context(|| format!("Failed to read entry {} of {}", index, path.display()))?;
        if !entry.name().to_ascii_lowercase().ends_with(".tds") {
            continue;
        }

        debug!("Reading {} from {}", entry.name(), path.display());
        let mut xml = String::new();
        entry
            .read_to_string(&mut xml)
            .with_context(|| format!("Failed to read {} from {}", entry.name(), path.display()))?;
        return Ok(xml);
    }

    anyhow::bail!("No .tds descriptor found in {}", path.display())
}

/// Load and parse one file. `Ok(None)` means the format is not supported.
pub fn load_file(path: &Path) -> Result<Option<DatasourceSchema>> {
    let Some(format) = DatasourceFormat::from_path(path) else {
        return Ok(None);
    };
    let xml = read_descriptor(path, format)?;
    let schema = DatasourceSchema::parse(&xml)
        .with_context(|| format!("Invalid datasource definition {}", path.display()))?;
    Ok(Some(schema))
}

/// Load every datasource in `dir`, in file-name order.
///
/// Files that cannot be read or parsed are skipped with a warning.
/// Placeholders are passed to `remover` and excluded.
pub fn load_datasources(dir: &Path, remover: &dyn FileRemover) -> Result<LoadReport> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read datasource directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    info!("Loading {} files from {}", paths.len(), dir.display());

    let mut report = LoadReport::default();
    for path in paths {
        let schema = match load_file(&path) {
            Ok(Some(schema)) => schema,
            Ok(None) => {
                debug!("Skipping unsupported file {}", path.display());
                report.skipped.push(path);
                continue;
            }
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                report.skipped.push(path);
                continue;
            }
        };

        if schema.is_placeholder() {
            println!(
                "{} is invalid, removing from directory.",
                file_label(&path).yellow()
            );
            if let Err(e) = remover.remove(&path) {
                warn!("{:#}", e);
            }
            report.removed.push(path);
            continue;
        }

        let name = match &schema.formatted_name {
            Some(name) => name.clone(),
            None => {
                warn!("{} has no formatted-name, using file name", path.display());
                file_stem(&path)
            }
        };

        report.datasources.push(Datasource { name, path, schema });
    }

    info!(
        "Loaded {} datasources, removed {} placeholders, skipped {} files",
        report.datasources.len(),
        report.removed.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Remove placeholder files from `dir` without building anything
pub fn prune_placeholders(dir: &Path, remover: &dyn FileRemover) -> Result<LoadReport> {
    let report = load_datasources(dir, remover)?;
    println!(
        "{} datasources kept, {} placeholders removed",
        report.datasources.len().to_string().green(),
        report.removed.len().to_string().yellow()
    );
    Ok(report)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
