//! Great-circle separation for ADQL `DISTANCE(lon1, lat1, lon2, lat2)`.
//!
//! All inputs and the result are in degrees. The Vincenty form from
//! [`crate::math::vincenty_angular_separation`] is used instead of the
//! spherical law of cosines so that separations of a few milliarcseconds and
//! near-antipodal pairs keep full precision.
//!
//! # Range
//!
//! The quadrant-aware `atan2(N, D)` returns `[0, pi]`, so the result is in
//! `[0, 180]` with no modulo correction. Separations above 90 degrees (negative
//! dot product) come out directly, and antipodal points give 180.
//! A NaN or infinite coordinate gives NaN.

use crate::angle::{degrees, radians};
use crate::constants::HALF_TURN_DEG;
use crate::math::vincenty_angular_separation;

/// Angular separation in degrees between `(lon1, lat1)` and `(lon2, lat2)`.
///
/// # Example
///
/// ```
/// use astroqlite_core::sphere::angular_distance_deg;
///
/// // Merak to Dubhe
/// let d = angular_distance_deg(165.458, 56.3825, 165.933, 61.7511);
/// assert!((d - 5.3741116).abs() < 1e-6);
/// ```
pub fn angular_distance_deg(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let lon1 = radians(lon1);
    let lat1 = radians(lat1);
    let lon2 = radians(lon2);
    let lat2 = radians(lat2);

    let (lat1_sin, lat1_cos) = libm::sincos(lat1);
    let (lat2_sin, lat2_cos) = libm::sincos(lat2);

    let sep = vincenty_angular_separation(lat1_sin, lat1_cos, lat2_sin, lat2_cos, lon2 - lon1);
    let d = degrees(sep);
    // pi converted back can land one ULP above 180; NaN must pass through
    if d > HALF_TURN_DEG {
        HALF_TURN_DEG
    } else {
        d
    }
}
