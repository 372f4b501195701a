use serde::{Deserialize, Serialize};

use super::grade::Grade;
use crate::error::{Error, Result};

/// Mean of three scores, using real division.
///
/// Finite scores always give a finite mean. When the sum itself overflows
/// (scores near `f64::MAX`) each score is divided first instead; such a
/// mean is far outside every band either way.
pub fn average(score1: f64, score2: f64, score3: f64) -> f64 {
    let sum = score1 + score2 + score3;
    if sum.is_finite() {
        sum / 3.0
    } else {
        score1 / 3.0 + score2 / 3.0 + score3 / 3.0
    }
}

/// Letter grade for the average of three scores.
///
/// Total over finite input: an average below 60 or above 100 is an F.
pub fn compute_grade(score1: f64, score2: f64, score3: f64) -> Grade {
    Grade::from_average(average(score1, score2, score3))
}

/// Parse one score from user input.
///
/// Any finite number is accepted; there is no 0-100 range check.
pub fn parse_score(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidScore(input.to_string()))?;
    if !value.is_finite() {
        return Err(Error::NonFiniteScore(trimmed.to_string()));
    }
    Ok(value)
}

/// The three scores being graded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores([f64; 3]);

impl Scores {
    pub fn new(score1: f64, score2: f64, score3: f64) -> Self {
        Self([score1, score2, score3])
    }

    pub fn values(&self) -> [f64; 3] {
        self.0
    }

    pub fn average(&self) -> f64 {
        let [s1, s2, s3] = self.0;
        average(s1, s2, s3)
    }

    pub fn grade(&self) -> Grade {
        Grade::from_average(self.average())
    }
}

impl From<[f64; 3]> for Scores {
    fn from(values: [f64; 3]) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_grade_boundaries() {
        assert_eq!(compute_grade(90.0, 90.0, 90.0), Grade::A);
        assert_eq!(compute_grade(89.9, 89.9, 89.9), Grade::B);
        assert_eq!(compute_grade(80.0, 80.0, 80.0), Grade::B);
        assert_eq!(compute_grade(70.0, 70.0, 71.0), Grade::C);
        assert_eq!(compute_grade(70.0, 70.0, 69.0), Grade::D);
        assert_eq!(compute_grade(60.0, 60.0, 61.0), Grade::D);
        assert_eq!(compute_grade(60.0, 60.0, 59.0), Grade::F);
        assert_eq!(compute_grade(0.0, 0.0, 0.0), Grade::F);
        assert_eq!(compute_grade(100.0, 100.0, 100.0), Grade::A);
    }

    #[test]
    fn test_compute_grade_above_hundred_falls_to_f() {
        assert_eq!(compute_grade(101.0, 101.0, 101.0), Grade::F);
        assert_eq!(compute_grade(105.0, 105.0, 105.0), Grade::F);
        // 110 + 100 + 90 averages exactly 100
        assert_eq!(compute_grade(110.0, 100.0, 90.0), Grade::A);
    }

    #[test]
    fn test_average_uses_real_division() {
        assert_eq!(average(1.0, 1.0, 2.0), 4.0 / 3.0);
        assert_eq!(average(-30.0, 0.0, 30.0), 0.0);
    }

    #[test]
    fn test_average_of_huge_scores_stays_finite() {
        let avg = average(1e308, 1e308, 1e308);
        assert!(avg.is_finite());
        assert!(avg > 9e307);
        assert!(average(-1e308, -1e308, -1e308).is_finite());
        assert_eq!(compute_grade(1e308, 1e308, 1e308), Grade::F);
        assert_eq!(compute_grade(-1e308, -1e308, -1e308), Grade::F);
    }

    #[test]
    fn test_scores_matches_free_functions() {
        let scores = Scores::new(95.0, 85.0, 75.0);
        assert_eq!(scores.average(), 85.0);
        assert_eq!(scores.grade(), compute_grade(95.0, 85.0, 75.0));
        assert_eq!(Scores::from([95.0, 85.0, 75.0]), scores);
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("85").unwrap(), 85.0);
        assert_eq!(parse_score(" 72.5 ").unwrap(), 72.5);
        assert_eq!(parse_score("-4").unwrap(), -4.0);
        assert_eq!(parse_score("150").unwrap(), 150.0);
    }

    #[test]
    fn test_parse_score_rejects_non_numeric() {
        assert!(matches!(parse_score("abc"), Err(Error::InvalidScore(_))));
        assert!(matches!(parse_score(""), Err(Error::InvalidScore(_))));
    }

    #[test]
    fn test_parse_score_rejects_non_finite() {
        assert!(matches!(parse_score("inf"), Err(Error::NonFiniteScore(_))));
        assert!(matches!(parse_score("NaN"), Err(Error::NonFiniteScore(_))));
    }
}
