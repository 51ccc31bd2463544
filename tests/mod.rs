/// Test modules for tableau-dictionary
///
/// Tests are organized into logical groupings:
/// - dictionary: catalog enrichment scenarios over complete datasource files
/// - loader: directory loading, archives and placeholder removal
/// - output: JSON dump and Markdown outline writers
/// - api: live Tableau Server tests (ignored by default)
mod api;
mod dictionary;
mod loader;
mod output;
