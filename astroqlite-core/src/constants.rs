#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

/// Half turn in degrees; upper bound of a great-circle separation.
pub const HALF_TURN_DEG: f64 = 180.0;

/// Number of low-order bits in a Gaia `source_id` below the level-12 HEALPix index.
///
/// Gaia DR2/DR3 pack the nested level-12 pixel into the top bits:
/// `source_id = healpix_12 * 2^35 + running_number`.
pub const GAIA_SOURCE_ID_SHIFT: u32 = 35;

/// Finest HEALPix level encoded in a Gaia `source_id` (nside = 4096).
pub const GAIA_HEALPIX_MAX_LEVEL: i32 = 12;

/// Base pixels on the HEALPix sphere at level 0.
pub const HEALPIX_BASE_PIXELS: i64 = 12;
