//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

use super::GradeReport;
use crate::config::display::AVERAGE_PRECISION;
use crate::score::Grade;

/// Format a report as a single console line, e.g. `avg 85.00  B`.
pub fn format_report_console(report: &GradeReport) -> String {
    format!(
        "avg {:.prec$}  {}",
        report.average,
        format_colored_grade(&report.grade),
        prec = AVERAGE_PRECISION
    )
}

/// Human-readable listing of the grading scale.
pub fn format_band_table() -> String {
    let mut output = String::new();
    for grade in Grade::iter().rev() {
        let Some(band) = grade.band() else {
            let _ = writeln!(output, "{}  otherwise", grade);
            continue;
        };
        let upper = if band.max_inclusive { "<=" } else { "< " };
        let _ = writeln!(
            output,
            "{}  {:>6.prec$} <= avg {} {:>6.prec$}",
            grade,
            band.min,
            upper,
            band.max,
            prec = AVERAGE_PRECISION
        );
    }
    output
}

/// Format grade with color
fn format_colored_grade(grade: &Grade) -> String {
    let name = grade.short_name();
    match grade {
        Grade::A => name.green().bold().to_string(),
        Grade::B => name.cyan().to_string(),
        Grade::C => name.yellow().to_string(),
        // D: orange
        Grade::D => name.truecolor(255, 165, 0).to_string(),
        Grade::F => name.red().to_string(),
    }
}
