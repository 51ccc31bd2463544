//! Data dictionary extraction for Tableau datasources

pub mod catalog;
pub mod models;
pub mod outline;
pub mod resolvers;
pub mod schema;

pub use catalog::{build_catalog, build_dictionary};
pub use models::{Catalog, DataDictionary, FieldRecord, DEFAULT_FOLDER};
pub use outline::{DatasourceOutline, FolderOutline, OutlineEntry};
pub use schema::DatasourceSchema;
