//! Error types for timeline operations.

use crate::estimator::Estimator;
use crate::value::ValueKind;
use thiserror::Error;

/// Errors raised by timelines and their configuration.
///
/// Absence of data is never an error on the non-throwing paths: `get`,
/// `get_or` and `aggregate` report it as `None` or the supplied default.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimesetError {
    /// A required value was absent or an argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The timestamp index has no value in this timeline.
    #[error("Timestamp index {timestamp_index} not found")]
    NotFound { timestamp_index: u32 },

    /// The estimator cannot be computed for this value type.
    #[error("Estimator {estimator} is not supported for {kind} values")]
    Unsupported {
        estimator: Estimator,
        kind: ValueKind,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TimesetError>;
