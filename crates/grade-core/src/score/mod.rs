//! Score-related types and the grading function.
//!
//! This module contains:
//! - `Grade` - letter grades (F, D, C, B, A)
//! - `GradeBand` - the fixed average ranges that map to each grade
//! - `Scores` - the three input scores and `compute_grade`

mod band;
mod grade;
mod scores;

pub use band::*;
pub use grade::*;
pub use scores::*;
