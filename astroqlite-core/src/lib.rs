//! Numeric kernels behind the ADQL scalar functions.
//!
//! `astroqlite-core` holds the pure math: no host value types and no
//! registration. Every function here is deterministic and allocation free.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | `radians` / `degrees` conversion |
//! | [`sphere`] | Great-circle separation in degrees (Vincenty) |
//! | [`healpix`] | HEALPix ancestor index of a Gaia `source_id`, pixel ranges |
//! | [`math`] | `sign`, `div`, `fmod`, raw Vincenty kernel |
//! | [`constants`] | pi and conversion factors, Gaia bit layout |
//! | [`errors`] | [`CoreError`] and [`CoreResult`] |
//!
//! # Example
//!
//! ```
//! use astroqlite_core::{angular_distance_deg, gaia_healpix_index};
//!
//! let sep = angular_distance_deg(0.0, 0.0, 90.0, 0.0);
//! assert!((sep - 90.0).abs() < 1e-12);
//!
//! assert_eq!(gaia_healpix_index(8, 1678668421246394624), Some(190842));
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod healpix;
pub mod math;
pub mod sphere;

pub use errors::{CoreError, CoreResult};
pub use healpix::{gaia_healpix_index, healpix_index, source_id_range};
pub use sphere::angular_distance_deg;
