/// Catalog enrichment tests
///
/// Fixtures are complete datasource definitions; helpers parse them and run
/// the full pipeline.

pub mod scenarios;

use tableau_dictionary::dictionary::{Catalog, DatasourceSchema, build_catalog};

/// A datasource exercising every enrichment pass
pub const SUPERSTORE_TDS: &str = r#"<?xml version='1.0' encoding='utf-8' ?>
<datasource formatted-name='Superstore' inline='true' source-platform='win' version='18.1' xmlns:user='http://www.tableausoftware.com/xml/user'>
  <connection class='federated'>
    <metadata-records>
      <metadata-record class='capability'>
        <remote-name />
        <remote-type>0</remote-type>
      </metadata-record>
      <metadata-record class='column'>
        <remote-name>Sales</remote-name>
        <local-name>[Sales]</local-name>
      </metadata-record>
      <metadata-record class='column'>
        <remote-name>Category</remote-name>
        <local-name>[Category]</local-name>
      </metadata-record>
      <metadata-record class='column'>
        <remote-name>Subcategory</remote-name>
        <local-name>[Subcategory]</local-name>
      </metadata-record>
      <metadata-record class='column'>
        <remote-name>Region</remote-name>
        <local-name>[Region]</local-name>
      </metadata-record>
      <metadata-record class='column'>
        <remote-name>Order ID</remote-name>
        <local-name>[Order ID]</local-name>
      </metadata-record>
    </metadata-records>
  </connection>
  <column caption='Total Sales' datatype='real' name='[Sales]' role='measure' type='quantitative' />
  <column caption='Profit Margin' datatype='real' name='[Calculation_123456]' role='measure' type='quantitative' hidden='true'>
    <calculation class='tableau' formula='SUM([Profit])/SUM([Sales])' />
  </column>
  <column caption='Sub-Category' datatype='string' name='[Subcategory]' role='dimension' type='nominal' />
  <column datatype='string' name='[Order ID]' role='dimension' type='nominal' hidden='true' />
  <drill-paths>
    <drill-path name='Product Hierarchy'>
      <field>[Category]</field>
      <field>[Subcategory]</field>
    </drill-path>
  </drill-paths>
  <folders-common>
    <folder name='Finance'>
      <folder-item name='[Total Sales]' type='field' />
      <folder-item name='[Calculation_123456]' type='field' />
    </folder>
    <folder name='Merchandising'>
      <folder-item name='Product Hierarchy' type='drillpath' />
    </folder>
    <folder name='Catalog'>
      <folder-item name='[Category]' type='field' />
    </folder>
  </folders-common>
</datasource>
"#;

/// Root of a federated connection with no field schema
pub const PLACEHOLDER_TDS: &str = r#"<?xml version='1.0' encoding='utf-8' ?>
<datasource formatted-name='federated.1x2y3z4' inline='true' version='18.1'>
  <connection class='federated' />
</datasource>
"#;

pub fn catalog_of(xml: &str) -> Catalog {
    let schema = DatasourceSchema::parse(xml).expect("fixture parses");
    build_catalog(&schema)
}
