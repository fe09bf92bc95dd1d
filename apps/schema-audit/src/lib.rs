//! Structured-data audit for site pages
//!
//! Walks an app directory, detects which schema.org components each page
//! emits, and recommends the ones its content calls for.
//!
//! ```no_run
//! use schema_audit::{run, AuditConfig};
//!
//! # fn example() -> Result<(), schema_audit::AuditError> {
//! let report = run(&AuditConfig::default())?;
//! println!("{} pages scanned", report.summary.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod analyze;
pub mod config;
pub mod error;
pub mod patterns;
pub mod report;
pub mod scan;

pub use analyze::{analyze, route_path, SchemaAuditRecord};
pub use config::AuditConfig;
pub use error::AuditError;
pub use report::{build_report, write_report, AuditReport, ConsoleReporter, JsonReporter};
pub use scan::scan_pages;

/// Scan, aggregate and write the JSON report
pub fn run(config: &AuditConfig) -> Result<AuditReport, AuditError> {
    let records = scan_pages(&config.root_dir, &config.page_file_name)?;
    let report = build_report(records, chrono::Utc::now());
    write_report(&report, &config.report_path)?;
    Ok(report)
}
