/// Output writer tests

use crate::dictionary::SUPERSTORE_TDS;
use std::fs;
use tableau_dictionary::dictionary::{DataDictionary, DatasourceSchema, build_catalog};
use tableau_dictionary::output::{write_json, write_markdown};

fn superstore_dictionary() -> DataDictionary {
    let schema = DatasourceSchema::parse(SUPERSTORE_TDS).unwrap();
    let mut dictionary = DataDictionary::new();
    dictionary.insert("Superstore", build_catalog(&schema));
    dictionary
}

#[test]
fn test_json_dump() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.json");

    write_json(&superstore_dictionary(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let margin = &json["Superstore"]["fields"]["Profit Margin"];
    assert_eq!(margin["calculatedField"], 1);
    assert_eq!(margin["calculatedFieldName"], "Calculation_123456");
    assert_eq!(margin["hidden"], 1);
    assert_eq!(json["Superstore"]["fields"]["Subcategory"]["hierarchyOrder"], 1);

    let positions: Vec<usize> = ["\"Category\"", "\"Order ID\"", "\"Profit Margin\"", "\"Region\""]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_markdown_outline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.md");

    write_markdown(&superstore_dictionary(), &path).unwrap();

    let expected = "\
## __Superstore__
- __Finance__
    - Total Sales
- __Merchandising__
    - Product Hierarchy
        - Category
        - Sub-Category
- __Uncategorized__
    - Region
------
";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}
