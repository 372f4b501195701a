//! Grade three scores and print the result.

use anyhow::{Context, Result};
use grade_core::{GradeReport, Scores, format_report_console, format_report_json};
use tracing::info;

pub fn run(scores: &[f64], json: bool) -> Result<()> {
    let values: [f64; 3] = scores
        .try_into()
        .with_context(|| format!("expected exactly 3 scores, got {}", scores.len()))?;

    let report = GradeReport::new(Scores::from(values));
    info!("Average {:.2} -> {}", report.average, report.grade);

    let content = if json {
        format_report_json(&report)?
    } else {
        format_report_console(&report)
    };
    println!("{}", content);

    Ok(())
}
