//! Data dictionary models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Folder label given to fields no folder claims
pub const DEFAULT_FOLDER: &str = "Uncategorized";

/// One field of a datasource catalog.
///
/// Flags are written as `0`/`1` in the document dump. Fields are declared in
/// the sorted order of their serialized names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub alias: Option<String>,
    #[serde(rename = "calculatedField", with = "flag")]
    pub is_calculated_field: bool,
    #[serde(rename = "calculatedFieldName")]
    pub calculated_field_internal_name: Option<String>,
    pub folder: String,
    #[serde(with = "flag")]
    pub hidden: bool,
    pub hierarchy: Option<String>,
    #[serde(rename = "hierarchyOrder")]
    pub hierarchy_order: Option<usize>,
}

impl FieldRecord {
    /// Record for a calculated field backed by `internal_name`
    pub fn calculated(internal_name: impl Into<String>) -> Self {
        Self {
            is_calculated_field: true,
            calculated_field_internal_name: Some(internal_name.into()),
            ..Self::default()
        }
    }

    /// Alias if one was resolved, otherwise the catalog key
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.alias.as_deref().unwrap_or(key)
    }
}

impl Default for FieldRecord {
    fn default() -> Self {
        Self {
            alias: None,
            hierarchy: None,
            hierarchy_order: None,
            hidden: false,
            folder: DEFAULT_FOLDER.to_string(),
            is_calculated_field: false,
            calculated_field_internal_name: None,
        }
    }
}

mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}

/// Field catalog of a single datasource, keyed by raw field name
/// (or caption, for calculated fields)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub fields: BTreeMap<String, FieldRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record already under `key`
    pub fn insert(&mut self, key: impl Into<String>, record: FieldRecord) -> Option<FieldRecord> {
        self.fields.insert(key.into(), record)
    }

    pub fn get(&self, key: &str) -> Option<&FieldRecord> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut FieldRecord> {
        self.fields.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldRecord> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, FieldRecord> {
        self.fields.iter_mut()
    }
}

/// Every datasource catalog of a run, keyed by datasource display name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataDictionary {
    datasources: BTreeMap<String, Catalog>,
}

impl DataDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, catalog: Catalog) -> Option<Catalog> {
        self.datasources.insert(name.into(), catalog)
    }

    pub fn get(&self, name: &str) -> Option<&Catalog> {
        self.datasources.get(name)
    }

    pub fn len(&self) -> usize {
        self.datasources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasources.is_empty()
    }

    /// Datasources in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Catalog> {
        self.datasources.iter()
    }
}
