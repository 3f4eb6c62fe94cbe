//! Degree/radian conversion as exposed by ADQL `RADIANS()` and `DEGREES()`.
//!
//! Both use the `PI / 180` split rather than a single precomputed factor so
//! that `degrees(radians(x))` reproduces `x` to within a couple of ULP.

use crate::constants::PI;

/// Degrees to radians: `x * (pi / 180)`.
///
/// ```
/// use astroqlite_core::angle::radians;
///
/// assert!((radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
/// ```
#[inline]
pub fn radians(x: f64) -> f64 {
    x * (PI / 180.0)
}

/// Radians to degrees: `(x / pi) * 180`.
#[inline]
pub fn degrees(x: f64) -> f64 {
    (x / PI) * 180.0
}
