//! Result reporting.
//!
//! - `GradeReport` - scores, average and grade for one calculation
//! - Console formatting with coloured grades
//! - JSON output

mod console;
mod json;

pub use console::*;
pub use json::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::score::{Grade, Scores};

/// Outcome of grading one set of scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub scores: Scores,
    pub average: f64,
    pub grade: Grade,
}

impl GradeReport {
    pub fn new(scores: Scores) -> Self {
        let average = scores.average();
        let grade = scores.grade();
        debug!(?scores, average, %grade, "Graded scores");
        Self {
            scores,
            average,
            grade,
        }
    }
}
