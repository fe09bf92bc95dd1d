//! Console reporter for audit results

use super::AuditReport;
use std::fmt::{self, Write};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a human-readable summary
    ///
    /// Each recommendation listing shows at most `listing_limit` routes,
    /// followed by a "... +N more" line when truncated.
    pub fn format(report: &AuditReport, listing_limit: usize) -> Result<String, fmt::Error> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(
            output,
            "╔══════════════════════════════════════════════════════════════╗"
        )?;
        writeln!(
            output,
            "║                    SCHEMA AUDIT RESULTS                      ║"
        )?;
        writeln!(
            output,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;
        writeln!(output)?;

        let summary = &report.summary;
        writeln!(output, "Pages scanned:        {}", summary.total_pages)?;
        writeln!(
            output,
            "Pages without schema: {}",
            summary.pages_without_schema
        )?;
        writeln!(
            output,
            "Generated:            {}",
            report.generated_at.to_rfc3339()
        )?;
        writeln!(output)?;

        writeln!(output, "  ┌──────────────────────┬─────────┬─────────┐")?;
        writeln!(output, "  │ Schema               │ Present │ Missing │")?;
        writeln!(output, "  ├──────────────────────┼─────────┼─────────┤")?;
        for (name, count) in &summary.schemas {
            writeln!(
                output,
                "  │ {:<20} │ {:>7} │ {:>7} │",
                name, count.present, count.missing
            )?;
        }
        writeln!(output, "  └──────────────────────┴─────────┴─────────┘")?;
        writeln!(output)?;

        let pending: Vec<_> = report
            .recommendations
            .iter()
            .filter(|(_, paths)| !paths.is_empty())
            .collect();

        if pending.is_empty() {
            writeln!(output, "✓ No missing schema detected")?;
        } else {
            writeln!(output, "Recommendations:")?;
            for (code, paths) in pending {
                writeln!(output)?;
                writeln!(output, "  {} ({} pages)", code, paths.len())?;
                for path in paths.iter().take(listing_limit) {
                    writeln!(output, "    • {}", path)?;
                }
                if paths.len() > listing_limit {
                    writeln!(output, "    ... +{} more", paths.len() - listing_limit)?;
                }
            }
        }

        writeln!(output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::report::build_report;
    use chrono::Utc;
    use std::path::PathBuf;

    fn faq_pages(count: usize) -> AuditReport {
        let records = (0..count)
            .map(|i| {
                let area = format!("area-{:02}", i);
                let path: PathBuf = ["locations", &area, "page.tsx"].iter().collect();
                analyze("<h2>Frequently Asked Questions</h2>", &path)
            })
            .collect();
        build_report(records, Utc::now())
    }

    #[test]
    fn test_listing_capped_with_suffix() {
        let output = ConsoleReporter::format(&faq_pages(25), 20).unwrap();

        assert!(output.contains("ADD_FAQ_SCHEMA (25 pages)"));
        assert!(output.contains("/locations/area-19"));
        assert!(!output.contains("/locations/area-20"));
        assert!(output.contains("... +5 more"));
    }

    #[test]
    fn test_short_listing_not_truncated() {
        let output = ConsoleReporter::format(&faq_pages(3), 20).unwrap();

        assert!(output.contains("/locations/area-02"));
        assert!(!output.contains("more"));
    }

    #[test]
    fn test_clean_report() {
        let output = ConsoleReporter::format(&faq_pages(0), 20).unwrap();

        assert!(output.contains("Pages scanned:        0"));
        assert!(output.contains("No missing schema detected"));
        assert!(output.contains("FAQSchema"));
    }
}
