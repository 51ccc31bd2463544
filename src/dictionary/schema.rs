//! Extraction of the parts of a Tableau datasource definition that feed the
//! data dictionary: metadata records, column definitions, drill paths and folders.

use anyhow::Result;
use log::debug;
use roxmltree::{Document, Node};

/// Root name prefix of federated connections, which carry no field schema
pub const PLACEHOLDER_PREFIX: &str = "federated.";

/// Internal-name fragment Tableau gives to generated calculations
pub const CALCULATION_MARKER: &str = "[Calculation_";

/// Folder item type referencing a drill path
pub const DRILLPATH_ITEM_TYPE: &str = "drillpath";

/// Remove every `[` and `]` from a Tableau identifier
pub fn strip_brackets(value: &str) -> String {
    value.replace(['[', ']'], "")
}

/// A `<column>` definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Raw name, brackets included
    pub name: String,
    /// Raw caption, if any
    pub caption: Option<String>,
    pub hidden: bool,
}

impl ColumnDef {
    pub fn is_calculated(&self) -> bool {
        self.name.contains(CALCULATION_MARKER)
    }

    pub fn stripped_name(&self) -> String {
        strip_brackets(&self.name)
    }

    pub fn stripped_caption(&self) -> Option<String> {
        self.caption.as_deref().map(strip_brackets)
    }
}

/// A `<drill-path>` with its members in drill order (brackets stripped)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillPath {
    pub name: String,
    pub members: Vec<String>,
}

impl DrillPath {
    /// Zero-based rank of `name` in the drill path
    pub fn position(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|member| member == name)
    }
}

/// A `<folder-item>` (name brackets stripped)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderItem {
    pub name: String,
    pub item_type: Option<String>,
}

impl FolderItem {
    pub fn is_drill_path(&self) -> bool {
        self.item_type.as_deref() == Some(DRILLPATH_ITEM_TYPE)
    }
}

/// A `<folder>` and its direct folder items, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderDef {
    pub name: String,
    pub items: Vec<FolderItem>,
}

/// The dictionary-relevant content of one datasource definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasourceSchema {
    /// `formatted-name` of the root element
    pub formatted_name: Option<String>,
    /// `remote-name` of every metadata record, in document order
    pub remote_names: Vec<String>,
    pub columns: Vec<ColumnDef>,
    pub drill_paths: Vec<DrillPath>,
    pub folders: Vec<FolderDef>,
}

impl DatasourceSchema {
    /// Parse a `.tds` document
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml)
            .map_err(|e| anyhow::anyhow!("Failed to parse datasource XML: {}", e))?;

        let root = doc.root_element();
        let formatted_name = root.attribute("formatted-name").map(|s| s.to_string());

        let remote_names: Vec<String> = doc
            .descendants()
            .filter(|n| n.has_tag_name("metadata-record"))
            .filter_map(|record| {
                // Capability records have no remote name
                record
                    .children()
                    .find(|c| c.has_tag_name("remote-name"))
                    .and_then(|c| c.text())
                    .map(|s| s.to_string())
            })
            .collect();

        let columns: Vec<ColumnDef> = doc
            .descendants()
            .filter(|n| n.has_tag_name("column"))
            .filter_map(|column| {
                let name = column.attribute("name")?;
                Some(ColumnDef {
                    name: name.to_string(),
                    caption: column.attribute("caption").map(|s| s.to_string()),
                    hidden: column.attribute("hidden") == Some("true"),
                })
            })
            .collect();

        let drill_paths: Vec<DrillPath> = doc
            .descendants()
            .filter(|n| n.has_tag_name("drill-path"))
            .filter_map(parse_drill_path)
            .collect();

        let folders: Vec<FolderDef> = doc
            .descendants()
            .filter(|n| n.has_tag_name("folder"))
            .filter_map(parse_folder)
            .collect();

        debug!(
            "Parsed datasource {:?}: {} metadata records, {} columns, {} drill paths, {} folders",
            formatted_name,
            remote_names.len(),
            columns.len(),
            drill_paths.len(),
            folders.len()
        );

        Ok(Self {
            formatted_name,
            remote_names,
            columns,
            drill_paths,
            folders,
        })
    }

    /// Whether this describes a federated connection rather than a real source
    pub fn is_placeholder(&self) -> bool {
        self.formatted_name
            .as_deref()
            .is_some_and(|name| name.starts_with(PLACEHOLDER_PREFIX))
    }
}

fn parse_drill_path(node: Node) -> Option<DrillPath> {
    let name = node.attribute("name")?;
    let members = node
        .children()
        .filter(|c| c.is_element())
        .filter_map(|c| c.text())
        .map(strip_brackets)
        .collect();

    Some(DrillPath {
        name: name.to_string(),
        members,
    })
}

fn parse_folder(node: Node) -> Option<FolderDef> {
    let name = node.attribute("name")?;
    let items = node
        .children()
        .filter(|c| c.has_tag_name("folder-item"))
        .filter_map(|item| {
            Some(FolderItem {
                name: strip_brackets(item.attribute("name")?),
                item_type: item.attribute("type").map(|s| s.to_string()),
            })
        })
        .collect();

    Some(FolderDef {
        name: strip_brackets(name),
        items,
    })
}
