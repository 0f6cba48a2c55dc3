//! Curated sample documents
//!
//! Samples live in `samples/` at the crate root and are named `NNN-description.diwire`.
//! Tests should load documents from here rather than inlining larger sources, so a
//! change to the format only needs the samples updated.

use std::fs;
use std::path::PathBuf;

/// Directory holding the sample documents
pub fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

/// Names of all samples, sorted
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(samples_dir())
        .expect("samples directory to exist")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".diwire"))
        .collect();
    names.sort();
    names
}

/// Source text of a sample, by file name
pub fn source(name: &str) -> String {
    let path = samples_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read sample {}: {}", path.display(), e))
}
