//! Error types for the numeric layer.
//!
//! The SQL-facing functions never return these: a bad row degrades to NULL
//! in the adapter. [`CoreError`] is reported by the checked helpers
//! ([`healpix_index`](crate::healpix::healpix_index),
//! [`source_id_range`](crate::healpix::source_id_range), [`npix`](crate::healpix::npix))
//! that callers use outside of a query, e.g. to build index range scans.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`InvalidLevel`](CoreError::InvalidLevel) | HEALPix level outside `0..=12` |
//! | [`InvalidSourceId`](CoreError::InvalidSourceId) | Negative Gaia `source_id` |
//! | [`PixelOutOfRange`](CoreError::PixelOutOfRange) | Pixel index `>= npix(level)` |

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid HEALPix level {level}: must be within 0..={max}")]
    InvalidLevel { level: i32, max: i32 },

    #[error("Invalid source_id {source_id}: {message}")]
    InvalidSourceId { source_id: i64, message: String },

    #[error("Pixel {pixel} out of range for level {level} (npix = {npix})")]
    PixelOutOfRange { level: i32, pixel: i64, npix: i64 },
}

/// Convenience alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn invalid_level(level: i32, max: i32) -> Self {
        Self::InvalidLevel { level, max }
    }

    pub fn invalid_source_id(source_id: i64, message: impl Into<String>) -> Self {
        Self::InvalidSourceId {
            source_id,
            message: message.into(),
        }
    }

    pub fn pixel_out_of_range(level: i32, pixel: i64, npix: i64) -> Self {
        Self::PixelOutOfRange { level, pixel, npix }
    }
}
