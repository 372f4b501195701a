use super::GradeReport;
use crate::error::Result;

/// Pretty-printed JSON for a report.
pub fn format_report_json(report: &GradeReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
