//! End-to-end scans over temporary app directories

use pretty_assertions::assert_eq;
use schema_audit::{run, scan_pages, AuditConfig, AuditError, AuditReport, SchemaAuditRecord};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_page(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn find<'a>(records: &'a [SchemaAuditRecord], route: &str) -> &'a SchemaAuditRecord {
    records.iter().find(|r| r.path == route).unwrap()
}

fn sample_app() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_page(
        root,
        "page.tsx",
        "<OrganizationSchema />\n<h1>Gulf Coast Builders</h1>",
    );
    write_page(
        root,
        "locations/[slug]/page.tsx",
        "const location = getLocationData(params.slug);\n<h2>Frequently Asked Questions</h2>",
    );
    write_page(
        root,
        "services/roofing/page.tsx",
        "<ServiceSchema />\n<h2>Our Services</h2>",
    );
    write_page(root, "(marketing)/about/page.tsx", "<h2>Testimonials</h2>");
    write_page(root, "services/layout.tsx", "<h2>FAQ</h2>");
    write_page(root, "components/page.ts", "testimonials");
    dir
}

#[test]
fn test_scan_finds_only_page_files() {
    let app = sample_app();
    let records = scan_pages(app.path(), "page.tsx").unwrap();

    let routes: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        routes,
        vec!["/about", "/locations/[slug]", "/", "/services/roofing"]
    );
}

#[test]
fn test_scan_recommendations() {
    let app = sample_app();
    let records = scan_pages(app.path(), "page.tsx").unwrap();

    let location = find(&records, "/locations/[slug]");
    assert_eq!(
        location.recommendations,
        vec!["ADD_FAQ_SCHEMA", "ADD_LOCAL_BUSINESS_SCHEMA"]
    );

    let service = find(&records, "/services/roofing");
    assert!(service.recommendations.is_empty());
}

#[test]
fn test_missing_root_is_walk_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = scan_pages(&dir.path().join("missing"), "page.tsx").unwrap_err();
    assert!(matches!(err, AuditError::Walk(_)));
}

#[test]
fn test_non_utf8_page_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("page.tsx"), [0xff, 0xfe, 0x00]).unwrap();

    let err = scan_pages(dir.path(), "page.tsx").unwrap_err();
    assert!(matches!(err, AuditError::Read { .. }));
    assert!(err.to_string().contains("Failed to read page file"));
}

#[test]
fn test_run_writes_report_into_new_directory() {
    let app = sample_app();
    let out = tempfile::tempdir().unwrap();
    let report_path = out.path().join("reports").join("schema-audit.json");

    let config = AuditConfig {
        root_dir: app.path().to_path_buf(),
        report_path: report_path.clone(),
        ..AuditConfig::default()
    };
    let report = run(&config).unwrap();

    let written: AuditReport =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(written, report);
    assert_eq!(report.summary.total_pages, 4);
    assert_eq!(report.summary.pages_without_schema, 2);
    assert_eq!(report.recommendations["ADD_REVIEW_SCHEMA"], vec!["/about"]);
}

#[test]
fn test_empty_app_produces_empty_report() {
    let app = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let config = AuditConfig {
        root_dir: app.path().to_path_buf(),
        report_path: out.path().join("audit.json"),
        ..AuditConfig::default()
    };

    let report = run(&config).unwrap();
    assert_eq!(report.summary.total_pages, 0);
    assert!(report.pages.is_empty());
    assert!(report.recommendations.values().all(Vec::is_empty));
}
