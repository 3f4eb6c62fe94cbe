//! Gaia `source_id` partition lookups for callers outside a query.
//!
//! The SQL kernel `GAIA_HEALPIX_INDEX` folds every bad input into NULL. These
//! helpers are the checked side of the same arithmetic: an invalid level, a
//! negative `source_id` or a pixel beyond the sphere comes back as
//! [`AdqlError::Core`](crate::AdqlError::Core) so a command line or planner
//! can report it.

use astroqlite_core::healpix::{healpix_index, healpix_level12, npix, source_id_range};
use tracing::debug;

use crate::errors::AdqlResult;

/// Pixel containing `source_id`, at `level` or at level 12 when none is given.
pub fn source_pixel(level: Option<i32>, source_id: i64) -> AdqlResult<i64> {
    let pixel = match level {
        Some(level) => healpix_index(level, source_id)?,
        None => healpix_level12(source_id)?,
    };
    Ok(pixel)
}

/// Half-open `source_id` interval `[lower, upper)` covered by `pixel` at `level`.
pub fn pixel_source_range(level: i32, pixel: i64) -> AdqlResult<(i64, i64)> {
    let (lower, upper) = source_id_range(level, pixel)?;
    debug!(level, pixel, lower, upper, "pixel source_id range");
    Ok((lower, upper))
}

/// Number of pixels on the sphere at `level`.
pub fn pixel_count(level: i32) -> AdqlResult<i64> {
    Ok(npix(level)?)
}
