//! Enrichment passes over a datasource catalog.
//!
//! Each pass reads the parsed schema and mutates the catalog in place. The
//! passes depend on each other's output and must run in the order
//! [`build_catalog`](super::catalog::build_catalog) applies them. Every pass
//! returns the number of records it touched, for logging.
//!
//! Hierarchy and folder matching is last-match-wins across drill paths and
//! folders in document order.

use super::models::{Catalog, FieldRecord};
use super::schema::DatasourceSchema;
use log::debug;

/// Create a blank record for every metadata record's remote name.
///
/// A remote name that occurs twice keeps only one (blank) record.
pub fn enumerate_fields(schema: &DatasourceSchema) -> Catalog {
    let mut catalog = Catalog::new();
    for remote_name in &schema.remote_names {
        if catalog
            .insert(remote_name.clone(), FieldRecord::default())
            .is_some()
        {
            debug!("Duplicate metadata record '{}' replaced", remote_name);
        }
    }
    catalog
}

/// Add a record keyed by caption for every calculated column.
///
/// Calculated fields have no metadata record, so these keys are new unless a
/// caption collides with a remote name, in which case the calculated record
/// replaces it.
pub fn resolve_calculated_fields(schema: &DatasourceSchema, catalog: &mut Catalog) -> usize {
    let mut added = 0;
    for column in schema.columns.iter().filter(|c| c.is_calculated()) {
        let Some(caption) = column.stripped_caption() else {
            debug!("Calculated column '{}' has no caption, skipping", column.name);
            continue;
        };
        catalog.insert(caption, FieldRecord::calculated(column.stripped_name()));
        added += 1;
    }
    added
}

/// Mark records of hidden columns as hidden. Calculated columns are matched
/// by caption, all others by name.
pub fn resolve_visibility(schema: &DatasourceSchema, catalog: &mut Catalog) -> usize {
    let mut hidden = 0;
    for column in schema.columns.iter().filter(|c| c.hidden) {
        let key = if column.is_calculated() {
            column.stripped_caption()
        } else {
            Some(column.stripped_name())
        };

        if let Some(record) = key.and_then(|key| catalog.get_mut(&key)) {
            record.hidden = true;
            hidden += 1;
        }
    }
    hidden
}

/// Set the display alias of every captioned column.
///
/// A calculated field is aliased to its own caption. When two columns alias
/// the same key, the later column wins.
pub fn resolve_aliases(schema: &DatasourceSchema, catalog: &mut Catalog) -> usize {
    let mut aliased = 0;
    for column in &schema.columns {
        let Some(caption) = column.stripped_caption() else {
            continue;
        };
        let key = if column.is_calculated() {
            caption.clone()
        } else {
            column.stripped_name()
        };

        if let Some(record) = catalog.get_mut(&key) {
            record.alias = Some(caption);
            aliased += 1;
        }
    }
    aliased
}

/// Attach hierarchy name and rank to every record that is a drill path member.
///
/// Within one drill path the record is looked up by key, then alias, then
/// calculated-field internal name. A record listed by several drill paths
/// ends up in the last one.
pub fn resolve_hierarchies(schema: &DatasourceSchema, catalog: &mut Catalog) -> usize {
    let mut matched = 0;
    for (key, record) in catalog.iter_mut() {
        for drill_path in &schema.drill_paths {
            let position = drill_path
                .position(key)
                .or_else(|| record.alias.as_deref().and_then(|a| drill_path.position(a)))
                .or_else(|| {
                    record
                        .calculated_field_internal_name
                        .as_deref()
                        .and_then(|n| drill_path.position(n))
                });

            if let Some(position) = position {
                record.hierarchy = Some(drill_path.name.clone());
                record.hierarchy_order = Some(position);
                matched += 1;
            }
        }
    }
    matched
}

/// Place records into folders.
///
/// First every folder item is matched against the records (calculated fields
/// by internal name or alias, others by key or alias). Then every drill path
/// item pulls its whole hierarchy into the enclosing folder, overriding the
/// first placement.
pub fn resolve_folders(schema: &DatasourceSchema, catalog: &mut Catalog) -> usize {
    let mut placed = 0;

    for (key, record) in catalog.iter_mut() {
        for folder in &schema.folders {
            for item in &folder.items {
                if folder_item_matches(key, record, &item.name) {
                    record.folder = folder.name.clone();
                    placed += 1;
                }
            }
        }
    }

    for folder in &schema.folders {
        for item in folder.items.iter().filter(|i| i.is_drill_path()) {
            for (_, record) in catalog.iter_mut() {
                if record.hierarchy.as_deref() == Some(item.name.as_str()) {
                    record.folder = folder.name.clone();
                    placed += 1;
                }
            }
        }
    }

    placed
}

fn folder_item_matches(key: &str, record: &FieldRecord, item_name: &str) -> bool {
    let alias_matches = record.alias.as_deref() == Some(item_name);
    if record.is_calculated_field {
        record.calculated_field_internal_name.as_deref() == Some(item_name) || alias_matches
    } else {
        key == item_name || alias_matches
    }
}
