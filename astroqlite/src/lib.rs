//! ADQL scalar functions for row-oriented SQL evaluators.
//!
//! SQLite and similar engines have no trigonometric, logarithmic or
//! astrometric functions. This crate supplies them, one value per call, so
//! queries written for the Gaia archive run against a local catalog copy:
//! angle conversion, transcendental functions, great-circle `DISTANCE`, and
//! `GAIA_HEALPIX_INDEX` for spatial partitioning by `source_id`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`value`] | [`SqlValue`] tagged argument, numeric affinity and conversion |
//! | [`adapter`] | [`Kernel`]: arity-typed validation and dispatch, NULL on bad input |
//! | [`registry`] | [`CATALOG`], [`ScalarFunction`], [`FunctionSink`], [`FunctionRegistry`] |
//! | [`gaia`] | Checked `source_id` to pixel and pixel to `source_id` range lookups |
//! | [`random`] | [`RandomSource`] behind `RAND()` |
//! | [`config`] | [`ExtensionConfig`] |
//! | [`preprocess`] | [`preprocess_query`]: `TOP n` and boolean literal rewriting |
//! | [`errors`] | [`AdqlError`] and [`AdqlResult`] |
//!
//! # Quick Start
//!
//! ```
//! use astroqlite::{ExtensionConfig, FunctionRegistry, SqlValue};
//!
//! let registry = FunctionRegistry::with_config(&ExtensionConfig::default())?;
//!
//! let sep = registry.call(
//!     "distance",
//!     &[165.458.into(), 56.3825.into(), 165.933.into(), 61.7511.into()],
//! )?;
//! assert!(matches!(sep, SqlValue::Float(d) if (d - 5.3741116).abs() < 1e-6));
//!
//! let pix = registry.call("gaia_healpix_index", &[8.into(), 539853444666465792i64.into()])?;
//! assert_eq!(pix, SqlValue::Integer(61374));
//! # Ok::<(), astroqlite::AdqlError>(())
//! ```
//!
//! # Hosting
//!
//! An engine binding implements [`FunctionSink`] and passes itself to
//! [`register_functions`]. Each function arrives as an
//! `Arc<dyn ScalarFunction>` reporting its name, arity and determinism;
//! everything except `rand` is deterministic and may be folded or cached.
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for [`ExtensionConfig`] and
//!   [`ExtensionConfig::from_json`].
//! - **`cli`**: the `adql-eval` binary.

pub mod adapter;
pub mod config;
pub mod errors;
pub mod gaia;
pub mod preprocess;
pub mod random;
pub mod registry;
pub mod value;

pub use adapter::Kernel;
pub use config::ExtensionConfig;
pub use errors::{AdqlError, AdqlResult};
pub use preprocess::preprocess_query;
pub use random::RandomSource;
pub use registry::{
    register_functions, AdqlFunction, Family, FunctionDescriptor, FunctionRegistry, FunctionSink,
    ScalarFunction, CATALOG,
};
pub use value::{NumericType, SqlValue};
