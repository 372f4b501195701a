//! Fixed grading constants.
//!
//! The grading scale is not configurable at runtime; these values define it.
//! - Band thresholds on the average of the three scores
//! - Display precision for printed averages

/// Lower (and for A, upper) bounds of each letter band.
///
/// Bands are half-open `[min, next_min)` except A, which is closed at
/// `A_MAX`. Anything outside every band is an F.
pub mod thresholds {
    pub const A_MIN: f64 = 90.0;
    pub const A_MAX: f64 = 100.0;
    pub const B_MIN: f64 = 80.0;
    pub const C_MIN: f64 = 70.0;
    pub const D_MIN: f64 = 60.0;
}

/// Console and report formatting.
pub mod display {
    /// Decimal places shown for an average.
    pub const AVERAGE_PRECISION: usize = 2;
}
