//! Sparse, timestamp-indexed scalar value container.
//!
//! A [`ScalarTimeline`] stores at most one value per timestamp index. It owns
//! an [`IndexSet`] for ordering and membership and a value array kept in
//! lockstep with the set's slots: every insertion or removal touches both at
//! the same position.
//!
//! ```rust
//! use timeset::{Estimator, ScalarTimeline};
//!
//! let mut weight: ScalarTimeline<f64> = ScalarTimeline::new();
//! weight.put(4, 0.5);
//! weight.put(1, 2.0);
//! weight.put(9, 1.25);
//!
//! assert_eq!(weight.to_vec(), vec![2.0, 0.5, 1.25]);
//! assert_eq!(weight.aggregate(&[9, 4], Estimator::Max)?, Some(1.25));
//! assert_eq!(weight.aggregate(&[9, 4], Estimator::First)?, Some(0.5));
//! # Ok::<(), timeset::TimesetError>(())
//! ```

use crate::config::TimelineConfig;
use crate::error::{Result, TimesetError};
use crate::estimator::Estimator;
use crate::index_set::{IndexSet, Slot};
use crate::stats::TimelineStats;
use crate::value::{TimelineValue, ValueKind};
use std::cmp::Ordering;
use std::mem;

/// Estimators every value type supports.
const POSITIONAL_ESTIMATORS: &[Estimator] = &[Estimator::First, Estimator::Last];

/// Estimators that additionally require a total order on the values.
const ORDERED_ESTIMATORS: &[Estimator] = &[
    Estimator::Min,
    Estimator::Max,
    Estimator::First,
    Estimator::Last,
];

/// Values of one scalar type keyed by timestamp index, kept in ascending index order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarTimeline<T> {
    index: IndexSet,
    values: Vec<T>,
}

impl<T: TimelineValue> Default for ScalarTimeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimelineValue> ScalarTimeline<T> {
    /// Create an empty timeline with no backing storage.
    pub fn new() -> Self {
        Self {
            index: IndexSet::new(),
            values: Vec::new(),
        }
    }

    /// Create an empty timeline with `capacity` slots reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: IndexSet::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Create an empty timeline from a configuration.
    ///
    /// Fails with [`TimesetError::InvalidConfig`] when the configuration does
    /// not validate, before anything is allocated.
    pub fn with_config(config: &TimelineConfig) -> Result<Self> {
        let index = IndexSet::with_config(config)?;
        Ok(Self {
            index,
            values: Vec::with_capacity(config.initial_capacity),
        })
    }

    /// Store `value` at `timestamp_index`, returning the value it replaced.
    pub fn put(&mut self, timestamp_index: u32, value: T) -> Option<T> {
        let replaced = match self.index.locate_or_reserve(timestamp_index) {
            Slot::Inserted(pos) => {
                self.index.growth().reserve_one(&mut self.values);
                self.values.insert(pos, value);
                None
            }
            Slot::Existing(pos) => Some(mem::replace(&mut self.values[pos], value)),
        };
        self.debug_check_lockstep();
        replaced
    }

    /// Store a possibly absent value.
    ///
    /// Entry point for callers holding boxed or nullable values: an absent
    /// value is rejected with [`TimesetError::InvalidArgument`] and the
    /// timeline is left untouched.
    pub fn try_put(&mut self, timestamp_index: u32, value: Option<T>) -> Result<Option<T>> {
        let value = value.ok_or_else(|| {
            TimesetError::InvalidArgument(format!(
                "{} value for timestamp index {} cannot be absent",
                T::KIND,
                timestamp_index
            ))
        })?;
        Ok(self.put(timestamp_index, value))
    }

    /// Remove the value at `timestamp_index`, if any.
    pub fn remove(&mut self, timestamp_index: u32) -> Option<T> {
        let pos = self.index.remove(timestamp_index)?;
        let removed = self.values.remove(pos);
        self.debug_check_lockstep();
        Some(removed)
    }

    #[inline]
    pub fn get(&self, timestamp_index: u32) -> Option<&T> {
        self.index
            .locate(timestamp_index)
            .map(|pos| &self.values[pos])
    }

    /// Value at `timestamp_index`, or `default` when absent.
    pub fn get_or(&self, timestamp_index: u32, default: T) -> T {
        match self.get(timestamp_index) {
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// Value at `timestamp_index`, failing with [`TimesetError::NotFound`] when absent.
    pub fn get_or_err(&self, timestamp_index: u32) -> Result<&T> {
        self.get(timestamp_index)
            .ok_or(TimesetError::NotFound { timestamp_index })
    }

    #[inline]
    pub fn contains(&self, timestamp_index: u32) -> bool {
        self.index.contains(timestamp_index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Active timestamp indices in ascending order.
    pub fn timestamp_indices(&self) -> &[u32] {
        self.index.as_slice()
    }

    /// Active values, aligned with [`timestamp_indices`](Self::timestamp_indices).
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Fresh copy of the active values in ascending timestamp-index order.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    /// `(timestamp_index, value)` pairs in ascending timestamp-index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (u32, &T)> + '_ {
        self.index.iter().zip(self.values.iter())
    }

    /// Drop every value and release both backing arrays.
    pub fn clear(&mut self) {
        log::trace!("Clearing {} timeline holding {} entries", T::KIND, self.values.len());
        self.index.clear();
        self.values = Vec::new();
    }

    pub fn value_kind(&self) -> ValueKind {
        T::KIND
    }

    /// Whether timelines of this value type can compute `estimator`.
    pub fn supports(estimator: Estimator) -> bool {
        if T::ORDERED {
            estimator.is(ORDERED_ESTIMATORS)
        } else {
            estimator.is(POSITIONAL_ESTIMATORS)
        }
    }

    /// Instance form of [`supports`](Self::supports), for callers that want to
    /// fail fast before calling [`aggregate`](Self::aggregate).
    pub fn is_supported(&self, estimator: Estimator) -> bool {
        Self::supports(estimator)
    }

    /// Aggregate the values stored at `requested` timestamp indices.
    ///
    /// `requested` may be unordered, contain duplicates, and name indices
    /// absent from this timeline; absent indices are ignored. Returns
    /// `Ok(None)` when none of the requested indices is present.
    ///
    /// * `Min` / `Max`: extremum under the type's natural order.
    /// * `First` / `Last`: value at the lowest / highest present requested index.
    ///
    /// Fails with [`TimesetError::Unsupported`] when the estimator is outside
    /// this type's capability, before anything is scanned.
    pub fn aggregate(&self, requested: &[u32], estimator: Estimator) -> Result<Option<T>> {
        if !Self::supports(estimator) {
            log::debug!("Rejecting {} aggregate over {} values", estimator, T::KIND);
            return Err(TimesetError::Unsupported {
                estimator,
                kind: T::KIND,
            });
        }

        let found = match estimator {
            Estimator::Min => self.extremum(requested, Ordering::Less),
            Estimator::Max => self.extremum(requested, Ordering::Greater),
            // Slots are ordered like timestamp indices, so the lowest slot is the earliest.
            Estimator::First => self.present_slots(requested).min().map(|pos| &self.values[pos]),
            Estimator::Last => self.present_slots(requested).max().map(|pos| &self.values[pos]),
            other => {
                return Err(TimesetError::Unsupported {
                    estimator: other,
                    kind: T::KIND,
                });
            }
        };
        Ok(found.cloned())
    }

    pub fn stats(&self) -> TimelineStats {
        let index_capacity = self.index.capacity();
        let value_capacity = self.values.capacity();
        TimelineStats {
            kind: T::KIND,
            entries: self.len(),
            index_capacity,
            value_capacity,
            heap_bytes: index_capacity * mem::size_of::<u32>()
                + value_capacity * mem::size_of::<T>(),
        }
    }

    fn present_slots<'a>(&'a self, requested: &'a [u32]) -> impl Iterator<Item = usize> + 'a {
        requested
            .iter()
            .filter_map(move |&timestamp_index| self.index.locate(timestamp_index))
    }

    /// Value that wins every comparison in direction `keep` (earliest on ties).
    fn extremum(&self, requested: &[u32], keep: Ordering) -> Option<&T> {
        let values = &self.values;
        self.present_slots(requested)
            .map(move |pos| &values[pos])
            .reduce(|best, candidate| {
                if candidate.compare(best) == Some(keep) {
                    candidate
                } else {
                    best
                }
            })
    }

    #[inline]
    fn debug_check_lockstep(&self) {
        debug_assert_eq!(
            self.index.len(),
            self.values.len(),
            "index and value arrays out of lockstep"
        );
    }
}

impl<T: TimelineValue> Extend<(u32, T)> for ScalarTimeline<T> {
    fn extend<I: IntoIterator<Item = (u32, T)>>(&mut self, iter: I) {
        for (timestamp_index, value) in iter {
            self.put(timestamp_index, value);
        }
    }
}

impl<T: TimelineValue> FromIterator<(u32, T)> for ScalarTimeline<T> {
    fn from_iter<I: IntoIterator<Item = (u32, T)>>(iter: I) -> Self {
        let mut timeline = Self::new();
        timeline.extend(iter);
        timeline
    }
}
