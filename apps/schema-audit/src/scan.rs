//! Page discovery

use crate::analyze::{analyze, SchemaAuditRecord};
use crate::error::AuditError;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Walk `root` and analyze every file named exactly `page_file_name`
///
/// Traversal is sorted by file name so the record order is stable across
/// runs. Any walk or read error aborts the scan.
pub fn scan_pages(root: &Path, page_file_name: &str) -> Result<Vec<SchemaAuditRecord>, AuditError> {
    let mut records = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.file_name() != page_file_name {
            continue;
        }

        let path = entry.path();
        let contents = fs::read_to_string(path).map_err(|source| AuditError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let relative = path.strip_prefix(root).unwrap_or(path);
        let record = analyze(&contents, relative);
        tracing::debug!(
            route = %record.path,
            recommendations = record.recommendations.len(),
            "analyzed page"
        );
        if !record.has_any_schema() {
            tracing::warn!(route = %record.path, "page emits no structured data");
        }
        records.push(record);
    }

    tracing::info!(pages = records.len(), root = %root.display(), "page scan complete");
    Ok(records)
}
