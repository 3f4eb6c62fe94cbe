//! HEALPix pixel indices derived from Gaia `source_id`.
//!
//! A Gaia DR2/DR3 `source_id` stores the nested level-12 HEALPix pixel of the
//! source in its upper bits: `source_id = pix12 * 2^35 + n`. Because nested
//! indices subdivide each pixel into 4 children per level, the ancestor at a
//! coarser level `L` is a plain right shift by `35 + 2 * (12 - L)` bits. No
//! angular decomposition is needed.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`gaia_healpix_index`] | SQL kernel, `None` on an invalid level or id |
//! | [`healpix_index`] | Checked variant reporting [`CoreError`] |
//! | [`source_id_range`] | Half-open `source_id` interval covered by a pixel |
//! | [`npix`] | Pixel count `12 * 4^L` at a level |

use crate::constants::{GAIA_HEALPIX_MAX_LEVEL, GAIA_SOURCE_ID_SHIFT, HEALPIX_BASE_PIXELS};
use crate::errors::{CoreError, CoreResult};

/// Right shift taking a `source_id` to its pixel at `level`.
#[inline]
fn level_shift(level: i32) -> u32 {
    GAIA_SOURCE_ID_SHIFT + 2 * (GAIA_HEALPIX_MAX_LEVEL - level) as u32
}

fn check_level(level: i32) -> CoreResult<()> {
    if (0..=GAIA_HEALPIX_MAX_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(CoreError::invalid_level(level, GAIA_HEALPIX_MAX_LEVEL))
    }
}

/// Nested HEALPix index at `level` of the source identified by `source_id`.
pub fn healpix_index(level: i32, source_id: i64) -> CoreResult<i64> {
    check_level(level)?;
    if source_id < 0 {
        return Err(CoreError::invalid_source_id(
            source_id,
            "Gaia source identifiers are non-negative",
        ));
    }
    Ok(source_id >> level_shift(level))
}

/// Kernel behind ADQL `GAIA_HEALPIX_INDEX(level, source_id)`.
///
/// Returns `None` where [`healpix_index`] would fail, which the SQL adapter
/// surfaces as NULL.
///
/// ```
/// use astroqlite_core::healpix::gaia_healpix_index;
///
/// assert_eq!(gaia_healpix_index(4, 2060294888487267584), Some(914));
/// assert_eq!(gaia_healpix_index(13, 2060294888487267584), None);
/// ```
#[inline]
pub fn gaia_healpix_index(level: i32, source_id: i64) -> Option<i64> {
    healpix_index(level, source_id).ok()
}

/// Level-12 pixel, the finest one encoded in a `source_id`.
#[inline]
pub fn healpix_level12(source_id: i64) -> CoreResult<i64> {
    healpix_index(GAIA_HEALPIX_MAX_LEVEL, source_id)
}

/// Number of pixels covering the sphere at `level`: `12 * 4^level`.
pub fn npix(level: i32) -> CoreResult<i64> {
    check_level(level)?;
    Ok(HEALPIX_BASE_PIXELS << (2 * level as u32))
}

/// `source_id` interval `[lower, upper)` whose members fall in `pixel` at `level`.
///
/// Lets a caller turn a pixel restriction into a range scan on a
/// `source_id` index instead of evaluating the function per row.
///
/// ```
/// use astroqlite_core::healpix::{gaia_healpix_index, source_id_range};
///
/// let (lo, hi) = source_id_range(8, 61374).unwrap();
/// assert_eq!(gaia_healpix_index(8, lo), Some(61374));
/// assert_eq!(gaia_healpix_index(8, hi - 1), Some(61374));
/// assert_eq!(gaia_healpix_index(8, hi), Some(61375));
/// ```
pub fn source_id_range(level: i32, pixel: i64) -> CoreResult<(i64, i64)> {
    let total = npix(level)?;
    if !(0..total).contains(&pixel) {
        return Err(CoreError::pixel_out_of_range(level, pixel, total));
    }
    let shift = level_shift(level);
    Ok((pixel << shift, (pixel + 1) << shift))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Largest id that still maps into the last level-12 pixel.
    const MAX_SOURCE_ID: i64 = (12i64 << 24 << GAIA_SOURCE_ID_SHIFT) - 1;

    #[test]
    fn test_reference_values() {
        assert_eq!(gaia_healpix_index(4, 2060294888487267584), Some(914));
        assert_eq!(gaia_healpix_index(8, 539853444666465792), Some(61374));
        assert_eq!(gaia_healpix_index(8, 1678668421246394624), Some(190842));
    }

    #[test]
    fn test_level_bounds() {
        assert!(gaia_healpix_index(0, 0).is_some());
        assert!(gaia_healpix_index(12, 0).is_some());
        assert_eq!(gaia_healpix_index(-1, 1 << 40), None);
        assert_eq!(gaia_healpix_index(13, 1 << 40), None);
        assert_eq!(
            healpix_index(13, 1),
            Err(CoreError::invalid_level(13, GAIA_HEALPIX_MAX_LEVEL))
        );
    }

    #[test]
    fn test_negative_source_id() {
        assert_eq!(gaia_healpix_index(5, -1), None);
        assert!(matches!(
            healpix_index(5, -1),
            Err(CoreError::InvalidSourceId { source_id: -1, .. })
        ));
    }

    #[test]
    fn test_level_zero_is_base_pixel() {
        assert_eq!(gaia_healpix_index(0, MAX_SOURCE_ID), Some(11));
        assert_eq!(gaia_healpix_index(0, 0), Some(0));
    }

    #[test]
    fn test_npix() {
        assert_eq!(npix(0), Ok(12));
        assert_eq!(npix(1), Ok(48));
        assert_eq!(npix(8), Ok(786_432));
        assert_eq!(npix(12), Ok(201_326_592));
        assert!(npix(13).is_err());
    }

    #[test]
    fn test_source_id_range_rejects_bad_pixel() {
        assert_eq!(
            source_id_range(0, 12),
            Err(CoreError::pixel_out_of_range(0, 12, 12))
        );
        assert!(source_id_range(3, -1).is_err());
        assert!(source_id_range(14, 0).is_err());
    }

    #[test]
    fn test_source_id_range_last_pixel_fits_i64() {
        let (lo, hi) = source_id_range(12, 201_326_591).unwrap();
        assert!(lo < hi);
        assert_eq!(hi - 1, MAX_SOURCE_ID);
    }

    proptest! {
        #[test]
        fn prop_level12_is_shift(source_id in 0i64..=MAX_SOURCE_ID) {
            prop_assert_eq!(gaia_healpix_index(12, source_id), Some(source_id >> 35));
        }

        #[test]
        fn prop_parent_is_child_div_four(source_id in 0i64..=MAX_SOURCE_ID, level in 1i32..=12) {
            let child = gaia_healpix_index(level, source_id).unwrap();
            let parent = gaia_healpix_index(level - 1, source_id).unwrap();
            prop_assert_eq!(parent, child / 4);
            prop_assert!(parent <= child);
        }

        #[test]
        fn prop_ignores_bits_below_cell(
            source_id in 0i64..=MAX_SOURCE_ID,
            level in 0i32..=12,
            noise in any::<i64>(),
        ) {
            let shift = level_shift(level);
            let cell = source_id >> shift << shift;
            let jittered = cell | (noise & ((1i64 << shift) - 1));
            prop_assert_eq!(
                gaia_healpix_index(level, jittered),
                gaia_healpix_index(level, source_id)
            );
        }

        #[test]
        fn prop_index_below_npix(source_id in 0i64..=MAX_SOURCE_ID, level in 0i32..=12) {
            let pix = gaia_healpix_index(level, source_id).unwrap();
            prop_assert!(pix < npix(level).unwrap());
        }
    }
}
