use super::{SUPERSTORE_TDS, catalog_of};

#[test]
fn test_plain_field_alias_and_folder() {
    let catalog = catalog_of(SUPERSTORE_TDS);
    let sales = catalog.get("Sales").unwrap();

    assert_eq!(sales.alias.as_deref(), Some("Total Sales"));
    assert!(!sales.hidden);
    assert_eq!(sales.folder, "Finance");
    assert!(!sales.is_calculated_field);
    assert_eq!(sales.hierarchy, None);
}

#[test]
fn test_calculated_field() {
    let catalog = catalog_of(SUPERSTORE_TDS);
    let margin = catalog.get("Profit Margin").unwrap();

    assert!(margin.is_calculated_field);
    assert_eq!(margin.calculated_field_internal_name.as_deref(), Some("Calculation_123456"));
    assert!(margin.hidden);
    assert_eq!(margin.alias.as_deref(), Some("Profit Margin"));
    assert_eq!(margin.folder, "Finance");
    assert!(!catalog.contains("Calculation_123456"));
}

#[test]
fn test_hierarchy_membership() {
    let catalog = catalog_of(SUPERSTORE_TDS);
    let category = catalog.get("Category").unwrap();
    let subcategory = catalog.get("Subcategory").unwrap();

    assert_eq!(category.hierarchy.as_deref(), Some("Product Hierarchy"));
    assert_eq!(category.hierarchy_order, Some(0));
    assert_eq!(subcategory.hierarchy.as_deref(), Some("Product Hierarchy"));
    assert_eq!(subcategory.hierarchy_order, Some(1));
    assert_eq!(subcategory.alias.as_deref(), Some("Sub-Category"));
}

#[test]
fn test_drill_path_folder_item_overrides_field_folder() {
    let catalog = catalog_of(SUPERSTORE_TDS);

    // Category is listed in "Catalog" directly but its hierarchy lives in "Merchandising"
    assert_eq!(catalog.get("Category").unwrap().folder, "Merchandising");
    assert_eq!(catalog.get("Subcategory").unwrap().folder, "Merchandising");
}

#[test]
fn test_unmatched_fields_keep_defaults() {
    let catalog = catalog_of(SUPERSTORE_TDS);
    let region = catalog.get("Region").unwrap();

    assert_eq!(region.alias, None);
    assert_eq!(region.folder, "Uncategorized");
    assert!(!region.hidden);
    assert_eq!(region.hierarchy, None);
    assert_eq!(region.hierarchy_order, None);
}

#[test]
fn test_hidden_raw_field() {
    let catalog = catalog_of(SUPERSTORE_TDS);
    assert!(catalog.get("Order ID").unwrap().hidden);
}

#[test]
fn test_alias_match_places_field() {
    let xml = r#"<datasource formatted-name='Aliased'>
  <metadata-record class='column'><remote-name>cust_nm</remote-name></metadata-record>
  <column caption='Customer Name' name='[cust_nm]' />
  <drill-paths>
    <drill-path name='Customer'>
      <field>[Customer Name]</field>
    </drill-path>
  </drill-paths>
  <folder name='People'>
    <folder-item name='[Customer Name]' type='field' />
  </folder>
</datasource>"#;
    let catalog = catalog_of(xml);
    let customer = catalog.get("cust_nm").unwrap();

    assert_eq!(customer.alias.as_deref(), Some("Customer Name"));
    assert_eq!(customer.hierarchy.as_deref(), Some("Customer"));
    assert_eq!(customer.hierarchy_order, Some(0));
    assert_eq!(customer.folder, "People");
}

#[test]
fn test_duplicate_remote_names_collapse() {
    let xml = r#"<datasource formatted-name='Dupes'>
  <metadata-record class='column'><remote-name>Sales</remote-name></metadata-record>
  <metadata-record class='column'><remote-name>Sales</remote-name></metadata-record>
</datasource>"#;
    let catalog = catalog_of(xml);
    assert_eq!(catalog.len(), 1);
}
