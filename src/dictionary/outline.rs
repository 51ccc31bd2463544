//! Folder-grouped view of a data dictionary for the readable outline

use super::models::{Catalog, DataDictionary};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasourceOutline {
    pub name: String,
    pub folders: Vec<FolderOutline>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderOutline {
    pub name: String,
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineEntry {
    Field(String),
    Hierarchy { name: String, members: Vec<String> },
}

impl OutlineEntry {
    pub fn name(&self) -> &str {
        match self {
            OutlineEntry::Field(name) => name,
            OutlineEntry::Hierarchy { name, .. } => name,
        }
    }
}

#[derive(Default)]
struct FolderEntries {
    fields: BTreeSet<String>,
    hierarchies: BTreeMap<String, Vec<(usize, String)>>,
}

/// Project every datasource, sorted by name
pub fn project(dictionary: &DataDictionary) -> Vec<DatasourceOutline> {
    dictionary
        .iter()
        .map(|(name, catalog)| project_catalog(name, catalog))
        .collect()
}

/// Group the visible fields of one catalog by folder.
///
/// Fields sharing a hierarchy collapse into one entry named after it, with
/// members in hierarchy order. Other fields appear under their alias (or key).
/// Folders and entries are sorted by name. A field labeled like a hierarchy
/// of the same folder is shadowed by the hierarchy entry.
pub fn project_catalog(name: &str, catalog: &Catalog) -> DatasourceOutline {
    let mut folders: BTreeMap<&str, FolderEntries> = BTreeMap::new();

    for (key, record) in catalog.iter().filter(|(_, r)| !r.hidden) {
        let entries = folders.entry(record.folder.as_str()).or_default();
        let label = record.display_name(key).to_string();

        match &record.hierarchy {
            Some(hierarchy) => {
                let order = record.hierarchy_order.unwrap_or(usize::MAX);
                entries
                    .hierarchies
                    .entry(hierarchy.clone())
                    .or_default()
                    .push((order, label));
            }
            None => {
                entries.fields.insert(label);
            }
        }
    }

    let folders = folders
        .into_iter()
        .map(|(folder, entries)| FolderOutline {
            name: folder.to_string(),
            entries: merge_entries(folder, entries),
        })
        .collect();

    DatasourceOutline {
        name: name.to_string(),
        folders,
    }
}

fn merge_entries(folder: &str, entries: FolderEntries) -> Vec<OutlineEntry> {
    let FolderEntries {
        fields,
        hierarchies,
    } = entries;

    let mut merged: BTreeMap<String, OutlineEntry> = fields
        .into_iter()
        .map(|field| (field.clone(), OutlineEntry::Field(field)))
        .collect();

    for (hierarchy, mut members) in hierarchies {
        members.sort_by_key(|(order, _)| *order);
        let entry = OutlineEntry::Hierarchy {
            name: hierarchy.clone(),
            members: members.into_iter().map(|(_, label)| label).collect(),
        };
        if merged.insert(hierarchy.clone(), entry).is_some() {
            debug!("Field '{}' in folder '{}' is shadowed by a hierarchy", hierarchy, folder);
        }
    }

    merged.into_values().collect()
}
