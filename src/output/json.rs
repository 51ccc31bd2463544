use crate::dictionary::DataDictionary;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Dump the whole dictionary as JSON with sorted keys
pub fn write_json(dictionary: &DataDictionary, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, dictionary)
        .context("Failed to serialize data dictionary to JSON")?;
    writeln!(writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;

    info!("Wrote {} datasources to {}", dictionary.len(), path.display());
    Ok(())
}
