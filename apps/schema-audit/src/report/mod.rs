//! Audit report aggregation and output
//!
//! - **JSON**: full report written to disk for tooling
//! - **Console**: human-readable summary with capped recommendation listings

mod console;
mod json;

use crate::analyze::SchemaAuditRecord;
use crate::error::AuditError;
use crate::patterns::{recommendation_codes, schema_names};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Pages with and without one schema type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCount {
    pub present: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub total_pages: usize,
    pub pages_without_schema: usize,
    pub schemas: BTreeMap<String, SchemaCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub summary: AuditSummary,
    /// Recommendation code -> routes, every known code present
    pub recommendations: BTreeMap<String, Vec<String>>,
    pub pages: Vec<SchemaAuditRecord>,
}

/// Aggregate per-page records into counts and recommendation lists
pub fn build_report(records: Vec<SchemaAuditRecord>, generated_at: DateTime<Utc>) -> AuditReport {
    let mut schemas: BTreeMap<String, SchemaCount> = schema_names()
        .map(|name| (name.to_string(), SchemaCount::default()))
        .collect();
    let mut recommendations: BTreeMap<String, Vec<String>> = recommendation_codes()
        .map(|code| (code.to_string(), Vec::new()))
        .collect();

    for record in &records {
        for (name, &present) in &record.schemas {
            let count = schemas.entry(name.clone()).or_default();
            if present {
                count.present += 1;
            } else {
                count.missing += 1;
            }
        }
        for code in &record.recommendations {
            recommendations
                .entry(code.clone())
                .or_default()
                .push(record.path.clone());
        }
    }

    AuditReport {
        generated_at,
        summary: AuditSummary {
            total_pages: records.len(),
            pages_without_schema: records.iter().filter(|r| !r.has_any_schema()).count(),
            schemas,
        },
        recommendations,
        pages: records,
    }
}

/// Write the pretty JSON report, creating parent directories as needed
pub fn write_report(report: &AuditReport, path: &Path) -> Result<(), AuditError> {
    let json = JsonReporter::format(report, true)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AuditError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| AuditError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "wrote schema audit report");
    Ok(())
}
