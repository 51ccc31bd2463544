use super::models::{Catalog, DataDictionary};
use super::resolvers::{
    enumerate_fields, resolve_aliases, resolve_calculated_fields, resolve_folders,
    resolve_hierarchies, resolve_visibility,
};
use super::schema::DatasourceSchema;
use crate::loader::Datasource;
use log::{debug, info, warn};

/// Build the fully enriched catalog of one datasource.
///
/// Calculated fields are added before any other pass so the later passes see
/// them, and aliases are resolved before hierarchy and folder matching, which
/// consult them.
pub fn build_catalog(schema: &DatasourceSchema) -> Catalog {
    let mut catalog = enumerate_fields(schema);
    debug!("Enumerated {} fields", catalog.len());

    let calculated = resolve_calculated_fields(schema, &mut catalog);
    let hidden = resolve_visibility(schema, &mut catalog);
    let aliased = resolve_aliases(schema, &mut catalog);
    let in_hierarchy = resolve_hierarchies(schema, &mut catalog);
    let placed = resolve_folders(schema, &mut catalog);

    debug!(
        "Resolved {} calculated, {} hidden, {} aliased, {} hierarchy matches, {} folder placements",
        calculated, hidden, aliased, in_hierarchy, placed
    );

    catalog
}

/// Build the data dictionary of all loaded datasources
pub fn build_dictionary<'a, I>(datasources: I) -> DataDictionary
where
    I: IntoIterator<Item = &'a Datasource>,
{
    let mut dictionary = DataDictionary::new();

    for datasource in datasources {
        let catalog = build_catalog(&datasource.schema);
        info!(
            "Catalogued {} fields for datasource '{}'",
            catalog.len(),
            datasource.name
        );

        if dictionary.insert(datasource.name.clone(), catalog).is_some() {
            warn!(
                "Datasource name '{}' appears more than once, keeping {}",
                datasource.name,
                datasource.path.display()
            );
        }
    }

    dictionary
}
