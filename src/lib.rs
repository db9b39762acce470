//! Sparse, timestamp-indexed scalar value containers for time-varying attributes.
//!
//! A timeline stores at most one value per timestamp index (an opaque integer
//! assigned by the surrounding attribute store), keeps the active indices
//! sorted, and answers point lookups plus `Min`, `Max`, `First` and `Last`
//! aggregates over any subset of indices.
//!
//! ```rust
//! use timeset::{CharTimeline, Estimator};
//!
//! let mut grade = CharTimeline::new();
//! grade.put(2, 'a');
//! grade.put(9, 'c');
//! grade.put(7, 'b');
//!
//! assert_eq!(grade.to_vec(), vec!['a', 'b', 'c']);
//! assert_eq!(grade.aggregate(&[2, 9], Estimator::Last)?, Some('c'));
//! assert_eq!(grade.aggregate(&[100], Estimator::Min)?, None);
//! # Ok::<(), timeset::TimesetError>(())
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod index_set;
pub mod stats;
pub mod timeline;
pub mod value;

pub use config::{GrowthPolicy, MAX_INITIAL_CAPACITY, TimelineConfig};
pub use error::{Result, TimesetError};
pub use estimator::Estimator;
pub use index_set::{IndexSet, Slot};
pub use stats::TimelineStats;
pub use timeline::ScalarTimeline;
pub use value::{TimelineValue, ValueKind};

pub type CharTimeline = ScalarTimeline<char>;
pub type BoolTimeline = ScalarTimeline<bool>;
pub type ByteTimeline = ScalarTimeline<i8>;
pub type ShortTimeline = ScalarTimeline<i16>;
pub type IntTimeline = ScalarTimeline<i32>;
pub type LongTimeline = ScalarTimeline<i64>;
pub type FloatTimeline = ScalarTimeline<f32>;
pub type DoubleTimeline = ScalarTimeline<f64>;
pub type StringTimeline = ScalarTimeline<String>;
pub type BytesTimeline = ScalarTimeline<bytes::Bytes>;
pub type JsonTimeline = ScalarTimeline<serde_json::Value>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Estimator, Result, ScalarTimeline, TimelineValue, TimesetError};

    pub use crate::{GrowthPolicy, TimelineConfig};
}
