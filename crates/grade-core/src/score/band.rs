use super::grade::Grade;
use crate::config::thresholds;

/// A range of averages that earns one letter grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub grade: Grade,
    pub min: f64,
    pub max: f64,
    /// Whether `max` itself belongs to the band. Only A is closed on top.
    pub max_inclusive: bool,
}

impl GradeBand {
    pub fn contains(&self, average: f64) -> bool {
        if average < self.min {
            return false;
        }
        if self.max_inclusive {
            average <= self.max
        } else {
            average < self.max
        }
    }
}

/// Passing bands in priority order. F is not listed; it is the fallback.
pub static GRADE_BANDS: [GradeBand; 4] = [
    GradeBand {
        grade: Grade::A,
        min: thresholds::A_MIN,
        max: thresholds::A_MAX,
        max_inclusive: true,
    },
    GradeBand {
        grade: Grade::B,
        min: thresholds::B_MIN,
        max: thresholds::A_MIN,
        max_inclusive: false,
    },
    GradeBand {
        grade: Grade::C,
        min: thresholds::C_MIN,
        max: thresholds::B_MIN,
        max_inclusive: false,
    },
    GradeBand {
        grade: Grade::D,
        min: thresholds::D_MIN,
        max: thresholds::C_MIN,
        max_inclusive: false,
    },
];
