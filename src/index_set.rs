//! Sorted set of timestamp indices shared by every timeline value type.
//!
//! `IndexSet` owns the ordering and membership logic: it maps a timestamp
//! index to its slot and shifts slots on insertion and removal. It knows
//! nothing about the values stored alongside it; [`ScalarTimeline`] keeps a
//! parallel value array in lockstep with the slots reported here.
//!
//! Lookups are `O(log n)` binary searches; insertions and removals are
//! `O(n)` because the tail of the array is shifted.
//!
//! [`ScalarTimeline`]: crate::ScalarTimeline

use crate::config::{GrowthPolicy, TimelineConfig};
use crate::error::Result;

/// Outcome of [`IndexSet::locate_or_reserve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The timestamp index was already present at this slot.
    Existing(usize),
    /// The timestamp index was inserted at this slot; later slots moved right.
    Inserted(usize),
}

impl Slot {
    #[inline]
    pub fn position(self) -> usize {
        match self {
            Slot::Existing(pos) | Slot::Inserted(pos) => pos,
        }
    }

    #[inline]
    pub fn is_inserted(self) -> bool {
        matches!(self, Slot::Inserted(_))
    }
}

/// Strictly increasing, duplicate-free sequence of timestamp indices.
#[derive(Debug, Clone, Default)]
pub struct IndexSet {
    indices: Vec<u32>,
    growth: GrowthPolicy,
}

impl IndexSet {
    /// Create an empty set with no backing storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with `capacity` slots reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            growth: GrowthPolicy::default(),
        }
    }

    /// Create an empty set from a validated configuration.
    pub fn with_config(config: &TimelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            indices: Vec::with_capacity(config.initial_capacity),
            growth: config.growth,
        })
    }

    /// Find the slot of `timestamp_index`, inserting it in sorted position if absent.
    pub fn locate_or_reserve(&mut self, timestamp_index: u32) -> Slot {
        match self.indices.binary_search(&timestamp_index) {
            Ok(pos) => Slot::Existing(pos),
            Err(pos) => {
                self.growth.reserve_one(&mut self.indices);
                self.indices.insert(pos, timestamp_index);
                Slot::Inserted(pos)
            }
        }
    }

    /// Slot of `timestamp_index`, if present.
    #[inline]
    pub fn locate(&self, timestamp_index: u32) -> Option<usize> {
        self.indices.binary_search(&timestamp_index).ok()
    }

    /// Remove `timestamp_index` and return the slot it occupied.
    ///
    /// Later slots move left by one. Absent indices leave the set unchanged.
    pub fn remove(&mut self, timestamp_index: u32) -> Option<usize> {
        let pos = self.locate(timestamp_index)?;
        self.indices.remove(pos);
        Some(pos)
    }

    /// Drop every index and release the backing storage.
    pub fn clear(&mut self) {
        self.indices = Vec::new();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of slots allocated, used or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.indices.capacity()
    }

    #[inline]
    pub fn contains(&self, timestamp_index: u32) -> bool {
        self.locate(timestamp_index).is_some()
    }

    /// Active timestamp indices in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    pub fn first(&self) -> Option<u32> {
        self.indices.first().copied()
    }

    pub fn last(&self) -> Option<u32> {
        self.indices.last().copied()
    }

    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }
}

impl PartialEq for IndexSet {
    fn eq(&self, other: &Self) -> bool {
        self.indices == other.indices
    }
}

impl Eq for IndexSet {}
