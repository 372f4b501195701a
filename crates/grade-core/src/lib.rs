pub mod config;
pub mod error;
pub mod export;
pub mod score;

pub use error::{Error, Result};
pub use export::{GradeReport, format_band_table, format_report_console, format_report_json};
pub use score::{GRADE_BANDS, Grade, GradeBand, Scores, average, compute_grade, parse_score};
