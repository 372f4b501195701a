use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use super::band::{GRADE_BANDS, GradeBand};

/// Letter grade, ordered worst to best.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

impl Grade {
    /// Map an average to its grade. The first matching band wins; an average
    /// in no band (below 60, above 100, or NaN) is an F.
    pub fn from_average(average: f64) -> Self {
        GRADE_BANDS
            .iter()
            .find(|band| band.contains(average))
            .map_or(Self::F, |band| band.grade)
    }

    /// The band this grade covers. F has none: it is whatever the others miss.
    pub fn band(&self) -> Option<&'static GradeBand> {
        GRADE_BANDS.iter().find(|band| band.grade == *self)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
