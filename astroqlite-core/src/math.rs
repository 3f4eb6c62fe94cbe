//! Scalar kernels that libm does not provide directly.

use crate::constants::PI;

/// ADQL `PI()`.
#[inline]
pub fn pi() -> f64 {
    PI
}

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Arithmetic sign as a float: `-1.0`, `0.0` or `1.0`.
///
/// NaN compares false both ways and yields `0.0`. Signed zeros map to `0.0`.
#[inline]
pub fn sign(x: f64) -> f64 {
    ((x > 0.0) as i8 - (x < 0.0) as i8) as f64
}

/// Real division `y / x` with IEEE semantics (no NULL on zero divisor).
#[inline]
pub fn div(y: f64, x: f64) -> f64 {
    y / x
}

/// Vincenty great-circle separation in radians, range `[0, pi]`.
///
/// Takes the sines and cosines of both latitudes so callers that already
/// hold them avoid recomputing. The numerator is the magnitude of the cross
/// product and the denominator the dot product of the two unit vectors;
/// `atan2` keeps full precision near 0 and near pi where `acos` does not.
#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}

#[cfg(test)]
mod tests {
    use super::*;
    const HALF_PI: f64 = PI / 2.0;

    #[test]
    fn test_pi() {
        assert_eq!(pi(), std::f64::consts::PI);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(-0.001), -1.0);
        assert_eq!(sign(42.0), 1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(f64::NEG_INFINITY), -1.0);
        assert_eq!(sign(f64::NAN), 0.0);
    }

    #[test]
    fn test_fmod_keeps_dividend_sign() {
        assert_eq!(fmod(7.0, 3.0), 1.0);
        assert_eq!(fmod(-7.0, 3.0), -1.0);
        assert!(fmod(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_div() {
        assert_eq!(div(1.0, 4.0), 0.25);
        assert_eq!(div(1.0, 0.0), f64::INFINITY);
        assert!(div(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_vincenty_equator_quarter_turn() {
        let sep = vincenty_angular_separation(0.0, 1.0, 0.0, 1.0, HALF_PI);
        assert!((sep - HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_vincenty_obtuse_stays_positive() {
        // 135 degrees along the equator: dot product negative, atan2 keeps the quadrant
        let sep = vincenty_angular_separation(0.0, 1.0, 0.0, 1.0, 0.75 * PI);
        assert!((sep - 0.75 * PI).abs() < 1e-14);
    }
}
