//! Per-page schema analysis

use crate::patterns::{CONTENT_PATTERNS, RECOMMENDATION_RULES, SCHEMA_PATTERNS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path};

/// Schema findings for one page file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAuditRecord {
    pub path: String, // Route, e.g. "/services/waterproofing"
    pub schemas: BTreeMap<String, bool>,
    pub content_patterns: BTreeMap<String, bool>,
    pub recommendations: Vec<String>,
}

impl SchemaAuditRecord {
    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.get(name).copied().unwrap_or(false)
    }

    pub fn has_signal(&self, name: &str) -> bool {
        self.content_patterns.get(name).copied().unwrap_or(false)
    }

    pub fn has_any_schema(&self) -> bool {
        self.schemas.values().any(|&present| present)
    }
}

/// Analyze one page's source text
///
/// `file_path` is the page file relative to the scan root; its directory
/// becomes the record's route. Every rule is evaluated independently and
/// recommendations are emitted in rule-table order.
pub fn analyze(contents: &str, file_path: &Path) -> SchemaAuditRecord {
    let schemas: BTreeMap<String, bool> = SCHEMA_PATTERNS
        .iter()
        .map(|p| (p.name.to_string(), p.is_match(contents)))
        .collect();

    let content_patterns: BTreeMap<String, bool> = CONTENT_PATTERNS
        .iter()
        .map(|p| (p.name.to_string(), p.is_match(contents)))
        .collect();

    let recommendations = RECOMMENDATION_RULES
        .iter()
        .filter(|rule| {
            content_patterns.get(rule.signal).copied().unwrap_or(false)
                && !schemas.get(rule.missing_schema).copied().unwrap_or(false)
        })
        .map(|rule| rule.code.to_string())
        .collect();

    SchemaAuditRecord {
        path: route_path(file_path),
        schemas,
        content_patterns,
        recommendations,
    }
}

/// Route for a page file relative to the app root
///
/// The file name is dropped, route groups like `(marketing)` are skipped, and
/// the root page maps to "/".
pub fn route_path(file_path: &Path) -> String {
    let segments: Vec<String> = file_path
        .parent()
        .map(|dir| {
            dir.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                    _ => None,
                })
                .filter(|s| !(s.starts_with('(') && s.ends_with(')')))
                .collect()
        })
        .unwrap_or_default();

    format!("/{}", segments.join("/"))
}
