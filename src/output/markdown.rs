use crate::dictionary::outline::{self, DatasourceOutline, OutlineEntry};
use crate::dictionary::DataDictionary;
use anyhow::{Context, Result};
use log::info;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Render the outline as nested Markdown bullets
pub fn render_markdown(datasources: &[DatasourceOutline]) -> String {
    let mut out = String::new();

    for datasource in datasources {
        let _ = writeln!(out, "## __{}__", datasource.name);
        for folder in &datasource.folders {
            let _ = writeln!(out, "- __{}__", folder.name);
            for entry in &folder.entries {
                let _ = writeln!(out, "    - {}", entry.name());
                if let OutlineEntry::Hierarchy { members, .. } = entry {
                    for member in members {
                        let _ = writeln!(out, "        - {}", member);
                    }
                }
            }
        }
        out.push_str("------\n");
    }

    out
}

/// Project the dictionary and write its outline to `path`
pub fn write_markdown(dictionary: &DataDictionary, path: &Path) -> Result<()> {
    let markdown = render_markdown(&outline::project(dictionary));
    fs::write(path, markdown)
        .with_context(|| format!("Failed to write Markdown file: {}", path.display()))?;

    info!("Wrote outline to {}", path.display());
    Ok(())
}
