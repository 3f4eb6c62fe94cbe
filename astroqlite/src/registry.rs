//! Registration table and host binding.
//!
//! [`CATALOG`] is the static list of every ADQL function this crate provides:
//! external name, typed [`Kernel`], determinism, and which function family it
//! belongs to. [`register_functions`] walks it and hands each entry to a
//! host through the [`FunctionSink`] trait, bound to one shared
//! [`RandomSource`].
//!
//! [`FunctionRegistry`] is an in-process sink with case-insensitive lookup,
//! useful on its own for evaluators that dispatch by name and as the
//! reference host in tests.
//!
//! ```
//! use astroqlite::{ExtensionConfig, FunctionRegistry, SqlValue};
//!
//! let registry = FunctionRegistry::with_config(&ExtensionConfig::default()).unwrap();
//! let v = registry.call("POWER", &[SqlValue::Float(2.0), SqlValue::Integer(10)]).unwrap();
//! assert_eq!(v, SqlValue::Float(1024.0));
//!
//! // non-numeric input is NULL for the row, not an error
//! let v = registry.call("sin", &["polaris".into()]).unwrap();
//! assert!(v.is_null());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use astroqlite_core::{angle, healpix, math, sphere};
use tracing::{debug, info, trace};

use crate::adapter::Kernel;
use crate::config::ExtensionConfig;
use crate::errors::{AdqlError, AdqlResult};
use crate::random::RandomSource;
use crate::value::SqlValue;

/// SQLite refuses function names longer than this.
pub const MAX_FUNCTION_NAME_BYTES: usize = 255;

/// Where a function is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// ADQL 2.1 math, trigonometric and geometric functions.
    Adql,
    /// Gaia archive extensions to ADQL.
    Gaia,
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub kernel: Kernel,
    pub deterministic: bool,
    pub family: Family,
}

impl FunctionDescriptor {
    const fn adql(name: &'static str, kernel: Kernel) -> Self {
        Self {
            name,
            kernel,
            deterministic: true,
            family: Family::Adql,
        }
    }

    const fn gaia(name: &'static str, kernel: Kernel) -> Self {
        Self {
            name,
            kernel,
            deterministic: true,
            family: Family::Gaia,
        }
    }

    pub fn arity(&self) -> usize {
        self.kernel.arity()
    }
}

pub static CATALOG: &[FunctionDescriptor] = &[
    FunctionDescriptor::adql("pi", Kernel::Constant(math::pi)),
    FunctionDescriptor {
        name: "rand",
        kernel: Kernel::Random,
        deterministic: false,
        family: Family::Adql,
    },
    FunctionDescriptor::adql("abs", Kernel::Unary(libm::fabs)),
    FunctionDescriptor::adql("ceiling", Kernel::Unary(libm::ceil)),
    FunctionDescriptor::adql("floor", Kernel::Unary(libm::floor)),
    FunctionDescriptor::adql("exp", Kernel::Unary(libm::exp)),
    FunctionDescriptor::adql("log", Kernel::Unary(libm::log)),
    FunctionDescriptor::adql("log10", Kernel::Unary(libm::log10)),
    FunctionDescriptor::adql("sqrt", Kernel::Unary(libm::sqrt)),
    FunctionDescriptor::adql("round", Kernel::Unary(libm::round)),
    FunctionDescriptor::adql("trunc", Kernel::Unary(libm::trunc)),
    FunctionDescriptor::adql("degrees", Kernel::Unary(angle::degrees)),
    FunctionDescriptor::adql("radians", Kernel::Unary(angle::radians)),
    FunctionDescriptor::adql("sin", Kernel::Unary(libm::sin)),
    FunctionDescriptor::adql("cos", Kernel::Unary(libm::cos)),
    FunctionDescriptor::adql("tan", Kernel::Unary(libm::tan)),
    FunctionDescriptor::adql("asin", Kernel::Unary(libm::asin)),
    FunctionDescriptor::adql("acos", Kernel::Unary(libm::acos)),
    FunctionDescriptor::adql("atan", Kernel::Unary(libm::atan)),
    FunctionDescriptor::adql("sinh", Kernel::Unary(libm::sinh)),
    FunctionDescriptor::adql("cosh", Kernel::Unary(libm::cosh)),
    FunctionDescriptor::adql("tanh", Kernel::Unary(libm::tanh)),
    FunctionDescriptor::adql("asinh", Kernel::Unary(libm::asinh)),
    FunctionDescriptor::adql("acosh", Kernel::Unary(libm::acosh)),
    FunctionDescriptor::adql("atanh", Kernel::Unary(libm::atanh)),
    FunctionDescriptor::adql("mod", Kernel::Binary(libm::fmod)),
    FunctionDescriptor::adql("power", Kernel::Binary(libm::pow)),
    FunctionDescriptor::adql("atan2", Kernel::Binary(libm::atan2)),
    FunctionDescriptor::adql("distance", Kernel::Quaternary(sphere::angular_distance_deg)),
    FunctionDescriptor::gaia("cbrt", Kernel::Unary(libm::cbrt)),
    FunctionDescriptor::gaia("div", Kernel::Binary(math::div)),
    FunctionDescriptor::gaia("sign", Kernel::Unary(math::sign)),
    FunctionDescriptor::gaia(
        "gaia_healpix_index",
        Kernel::BinaryInt(healpix::gaia_healpix_index),
    ),
];

/// A row-level SQL function as seen by the host evaluator.
///
/// `invoke` never fails: an absent result is returned as [`SqlValue::Null`].
pub trait ScalarFunction: Send + Sync {
    fn invoke(&self, args: &[SqlValue]) -> SqlValue;

    /// Same inputs, same output; lets the host fold or cache calls.
    fn is_deterministic(&self) -> bool {
        true
    }

    fn num_args(&self) -> usize;

    fn name(&self) -> &str;
}

/// A [`FunctionDescriptor`] bound to the random source of its context.
#[derive(Debug, Clone)]
pub struct AdqlFunction {
    descriptor: FunctionDescriptor,
    rng: Arc<RandomSource>,
}

impl AdqlFunction {
    pub fn new(descriptor: FunctionDescriptor, rng: Arc<RandomSource>) -> Self {
        Self { descriptor, rng }
    }

    pub fn descriptor(&self) -> &FunctionDescriptor {
        &self.descriptor
    }

    /// Call result, `None` when an argument is not numeric.
    pub fn evaluate(&self, args: &[SqlValue]) -> Option<SqlValue> {
        self.descriptor.kernel.apply(args, &self.rng)
    }
}

impl ScalarFunction for AdqlFunction {
    fn invoke(&self, args: &[SqlValue]) -> SqlValue {
        self.evaluate(args).unwrap_or_else(|| {
            trace!(function = self.descriptor.name, "no result, returning NULL");
            SqlValue::Null
        })
    }

    fn is_deterministic(&self) -> bool {
        self.descriptor.deterministic
    }

    fn num_args(&self) -> usize {
        self.descriptor.arity()
    }

    fn name(&self) -> &str {
        self.descriptor.name
    }
}

/// The host's function registration interface.
pub trait FunctionSink {
    fn create_function(&mut self, function: Arc<dyn ScalarFunction>) -> AdqlResult<()>;
}

/// Register every [`CATALOG`] entry allowed by `config` with `sink`.
///
/// Returns the number of functions registered. The first sink failure
/// aborts registration and is returned.
pub fn register_functions<S: FunctionSink + ?Sized>(
    sink: &mut S,
    config: &ExtensionConfig,
) -> AdqlResult<usize> {
    let rng = Arc::new(match config.rng_seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_clock(),
    });

    let mut count = 0;
    for descriptor in CATALOG {
        if descriptor.family == Family::Gaia && !config.include_gaia {
            continue;
        }
        if !descriptor.deterministic && !config.include_random {
            continue;
        }
        sink.create_function(Arc::new(AdqlFunction::new(*descriptor, Arc::clone(&rng))))?;
        debug!(
            name = descriptor.name,
            arity = descriptor.arity(),
            deterministic = descriptor.deterministic,
            "registered function"
        );
        count += 1;
    }

    info!(count, "registered ADQL functions");
    Ok(count)
}

/// In-memory [`FunctionSink`] keyed by lowercase name and arity.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<(String, usize), Arc<dyn ScalarFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated from [`CATALOG`].
    pub fn with_config(config: &ExtensionConfig) -> AdqlResult<Self> {
        let mut registry = Self::new();
        register_functions(&mut registry, config)?;
        Ok(registry)
    }

    pub fn find(&self, name: &str, arity: usize) -> Option<Arc<dyn ScalarFunction>> {
        self.functions
            .get(&(name.to_ascii_lowercase(), arity))
            .cloned()
    }

    /// Resolve `name` for `args.len()` arguments and invoke it.
    ///
    /// Lookup failures are errors; a row with bad input is `Ok(SqlValue::Null)`.
    pub fn call(&self, name: &str, args: &[SqlValue]) -> AdqlResult<SqlValue> {
        if let Some(function) = self.find(name, args.len()) {
            return Ok(function.invoke(args));
        }

        let key = name.to_ascii_lowercase();
        let mut arities: Vec<usize> = self
            .functions
            .keys()
            .filter(|(n, _)| *n == key)
            .map(|(_, arity)| *arity)
            .collect();
        arities.sort_unstable();
        match arities.first() {
            Some(&expected) => Err(AdqlError::arity_mismatch(name, expected, args.len())),
            None => Err(AdqlError::unknown_function(name, args.len())),
        }
    }

    /// Registered functions ordered by name, then arity.
    pub fn functions(&self) -> Vec<Arc<dyn ScalarFunction>> {
        let mut keys: Vec<&(String, usize)> = self.functions.keys().collect();
        keys.sort();
        keys.into_iter()
            .filter_map(|key| self.functions.get(key).cloned())
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().map(|(n, _)| n.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl FunctionSink for FunctionRegistry {
    fn create_function(&mut self, function: Arc<dyn ScalarFunction>) -> AdqlResult<()> {
        let name = function.name();
        if name.is_empty() {
            return Err(AdqlError::registration(name, "function name is empty"));
        }
        if name.len() > MAX_FUNCTION_NAME_BYTES {
            return Err(AdqlError::registration(
                name,
                format!("name longer than {} bytes", MAX_FUNCTION_NAME_BYTES),
            ));
        }
        let key = (name.to_ascii_lowercase(), function.num_args());
        // same name and arity replaces the earlier definition
        self.functions.insert(key, function);
        Ok(())
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.functions.len())
            .finish()
    }
}
