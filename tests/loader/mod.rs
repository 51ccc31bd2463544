/// Directory loading tests
///
/// Every test works in its own temporary directory since loading deletes
/// placeholder files.

use crate::dictionary::{PLACEHOLDER_TDS, SUPERSTORE_TDS};
use anyhow::Result;
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tableau_dictionary::loader::{
    FileRemover, FsRemover, KeepFiles, load_datasources, prune_placeholders,
};
use zip::write::SimpleFileOptions;

/// Records removals instead of deleting
#[derive(Default)]
struct RecordingRemover {
    removed: RefCell<Vec<PathBuf>>,
}

impl FileRemover for RecordingRemover {
    fn remove(&self, path: &Path) -> Result<()> {
        self.removed.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

fn write_tdsx(path: &Path, entry_name: &str, xml: &str) {
    let file = File::create(path).unwrap();
    let mut archive = zip::ZipWriter::new(file);
    archive
        .start_file("Data/Extracts/placeholder.txt", SimpleFileOptions::default())
        .unwrap();
    archive.write_all(b"not a descriptor").unwrap();
    archive
        .start_file(entry_name, SimpleFileOptions::default())
        .unwrap();
    archive.write_all(xml.as_bytes()).unwrap();
    archive.finish().unwrap();
}

fn fixture_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a_superstore.tds"), SUPERSTORE_TDS).unwrap();
    fs::write(dir.path().join("b_live.tds"), PLACEHOLDER_TDS).unwrap();
    write_tdsx(
        &dir.path().join("c_packaged.tdsx"),
        "c_packaged.tds",
        &SUPERSTORE_TDS.replace("formatted-name='Superstore'", "formatted-name='Packaged'"),
    );
    fs::write(dir.path().join("d_notes.txt"), "not a datasource").unwrap();
    fs::write(dir.path().join("e_broken.tds"), "<datasource").unwrap();
    dir
}

#[test]
fn test_load_directory() {
    let dir = fixture_dir();
    let remover = RecordingRemover::default();

    let report = load_datasources(dir.path(), &remover).unwrap();

    let names: Vec<&str> = report.datasources.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Superstore", "Packaged"]);
    assert_eq!(report.removed, vec![dir.path().join("b_live.tds")]);
    assert_eq!(*remover.removed.borrow(), report.removed);
    assert_eq!(
        report.skipped,
        vec![dir.path().join("d_notes.txt"), dir.path().join("e_broken.tds")]
    );
}

#[test]
fn test_placeholder_file_is_deleted() {
    let dir = fixture_dir();

    load_datasources(dir.path(), &FsRemover).unwrap();

    assert!(!dir.path().join("b_live.tds").exists());
    assert!(dir.path().join("a_superstore.tds").exists());
    assert!(dir.path().join("e_broken.tds").exists());
}

#[test]
fn test_keep_files_leaves_placeholder() {
    let dir = fixture_dir();

    let report = prune_placeholders(dir.path(), &KeepFiles).unwrap();

    assert_eq!(report.removed.len(), 1);
    assert!(dir.path().join("b_live.tds").exists());
}

#[test]
fn test_archive_without_descriptor_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_tdsx(&dir.path().join("empty.tdsx"), "readme.md", "nothing here");

    let report = load_datasources(dir.path(), &KeepFiles).unwrap();

    assert!(report.datasources.is_empty());
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn test_unnamed_root_uses_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Orders.tds"), "<datasource />").unwrap();

    let report = load_datasources(dir.path(), &KeepFiles).unwrap();

    assert_eq!(report.datasources[0].name, "Orders");
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_datasources(&dir.path().join("missing"), &KeepFiles).is_err());
}
