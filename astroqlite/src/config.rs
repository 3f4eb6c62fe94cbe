//! Options applied when the function table is registered with a host.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtensionConfig {
    /// Fixed seed for `rand()`; `None` seeds from the clock once per registration.
    pub rng_seed: Option<u64>,

    /// Register the Gaia archive extension `gaia_healpix_index`.
    pub include_gaia: bool,

    /// Register the non-deterministic `rand()`.
    pub include_random: bool,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            include_gaia: true,
            include_random: true,
        }
    }
}

impl ExtensionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_gaia(mut self, include: bool) -> Self {
        self.include_gaia = include;
        self
    }

    pub fn with_random(mut self, include: bool) -> Self {
        self.include_random = include;
        self
    }

    /// Parse a JSON document; missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::AdqlResult<Self> {
        serde_json::from_str(json).map_err(|e| crate::AdqlError::invalid_config(e.to_string()))
    }
}
