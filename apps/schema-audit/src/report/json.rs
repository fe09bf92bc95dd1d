//! JSON reporter for audit results

use super::AuditReport;
use crate::error::AuditError;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format the audit report as JSON
    ///
    /// # Arguments
    ///
    /// * `report` - The aggregated audit report
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn format(report: &AuditReport, pretty: bool) -> Result<String, AuditError> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::report::build_report;
    use chrono::{TimeZone, Utc};
    use std::path::Path;

    fn create_test_report() -> AuditReport {
        let generated_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        build_report(
            vec![analyze("<h2>FAQ</h2>", Path::new("services/page.tsx"))],
            generated_at,
        )
    }

    #[test]
    fn test_json_format_compact() {
        let output = JsonReporter::format(&create_test_report(), false).unwrap();

        assert!(!output.contains('\n'));
        assert!(output.contains("\"totalPages\":1"));
        assert!(output.contains("\"generatedAt\":\"2024-01-01T00:00:00Z\""));
    }

    #[test]
    fn test_json_format_pretty() {
        let output = JsonReporter::format(&create_test_report(), true).unwrap();

        assert!(output.contains('\n'));
        assert!(output.contains("\"contentPatterns\""));
    }

    #[test]
    fn test_json_parses_back() {
        let report = create_test_report();
        let json = JsonReporter::format(&report, false).unwrap();
        let parsed: AuditReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.summary, report.summary);
        assert_eq!(parsed.recommendations["ADD_FAQ_SCHEMA"], vec!["/services"]);
    }
}
