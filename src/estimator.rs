//! Aggregate kinds requested over a subset of timestamp indices.

use crate::error::{Result, TimesetError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The aggregate to compute over a set of timestamp indices.
///
/// The full vocabulary is shared with the attribute store, but timelines only
/// ever compute `Min`, `Max`, `First` and `Last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estimator {
    Average,
    Median,
    Mode,
    Sum,
    Min,
    Max,
    First,
    Last,
}

impl Estimator {
    /// All estimator kinds, in declaration order.
    pub const ALL: [Estimator; 8] = [
        Estimator::Average,
        Estimator::Median,
        Estimator::Mode,
        Estimator::Sum,
        Estimator::Min,
        Estimator::Max,
        Estimator::First,
        Estimator::Last,
    ];

    /// Returns true if `self` is one of `candidates`.
    pub fn is(self, candidates: &[Estimator]) -> bool {
        candidates.contains(&self)
    }

    /// Lowercase name, as used in configuration and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Estimator::Average => "average",
            Estimator::Median => "median",
            Estimator::Mode => "mode",
            Estimator::Sum => "sum",
            Estimator::Min => "min",
            Estimator::Max => "max",
            Estimator::First => "first",
            Estimator::Last => "last",
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Estimator {
    type Err = TimesetError;

    fn from_str(s: &str) -> Result<Self> {
        Estimator::ALL
            .into_iter()
            .find(|estimator| estimator.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TimesetError::InvalidArgument(format!("Unknown estimator '{}'", s)))
    }
}
