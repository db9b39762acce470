//! Configuration for timeline construction and growth.
//!
//! Timelines are created in very large numbers (one per element attribute)
//! and usually hold a handful of entries, so the default configuration
//! allocates nothing up front and grows storage one slot at a time.

use crate::error::{Result, TimesetError};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for [`TimelineConfig::initial_capacity`].
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Capacity above which a warning is logged when configuring a timeline.
const LARGE_CAPACITY_WARNING: usize = 100_000;

/// How backing storage grows once its capacity is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// Grow by exactly one slot per insertion (minimal memory footprint)
    #[default]
    Exact,
    /// Let the vector over-allocate (fewer reallocations, more slack)
    Amortized,
}

impl GrowthPolicy {
    /// Make room for one more element in `buf` according to this policy.
    #[inline]
    pub(crate) fn reserve_one<T>(self, buf: &mut Vec<T>) {
        if buf.len() < buf.capacity() {
            return;
        }
        match self {
            GrowthPolicy::Exact => buf.reserve_exact(1),
            GrowthPolicy::Amortized => buf.reserve(1),
        }
    }
}

/// Timeline configuration
///
/// # Example
///
/// ```rust
/// use timeset::{GrowthPolicy, TimelineConfig};
///
/// let json = r#"{ "initial_capacity": 4, "growth": "amortized" }"#;
/// let config = TimelineConfig::from_json(json)?;
/// assert_eq!(config.initial_capacity, 4);
/// assert_eq!(config.growth, GrowthPolicy::Amortized);
/// # Ok::<(), timeset::TimesetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TimelineConfig {
    /// Slots reserved at construction. A hint only; storage still grows past it.
    #[serde(default)]
    pub initial_capacity: usize,

    /// Growth strategy once the reserved slots are used up.
    #[serde(default)]
    pub growth: GrowthPolicy,
}

impl TimelineConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        if capacity > LARGE_CAPACITY_WARNING {
            log::warn!(
                "Initial timeline capacity of {} is very large; every timeline built \
                from this configuration reserves it up front.",
                capacity
            );
        }
        self.initial_capacity = capacity;
        self
    }

    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(TimesetError::InvalidConfig(format!(
                "initial_capacity {} exceeds maximum of {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            TimesetError::InvalidConfig(format!("Failed to parse JSON config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimesetError::InvalidConfig(format!("Failed to serialize config: {}", e))
        })
    }

    /// Parse and validate a configuration from TOML.
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| {
            TimesetError::InvalidConfig(format!("Failed to parse TOML config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            TimesetError::InvalidConfig(format!("Failed to serialize config: {}", e))
        })
    }
}
