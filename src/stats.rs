use crate::value::ValueKind;
use serde::Serialize;

/// Memory and occupancy statistics for a single timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStats {
    /// Scalar type stored by the timeline
    pub kind: ValueKind,
    /// Number of active timestamp indices
    pub entries: usize,
    /// Slots allocated for timestamp indices
    pub index_capacity: usize,
    /// Slots allocated for values
    pub value_capacity: usize,
    /// Approximate heap bytes held by both backing arrays (excludes heap data owned by values)
    pub heap_bytes: usize,
}

impl TimelineStats {
    /// Allocated but unused slots across both backing arrays.
    pub fn slack(&self) -> usize {
        (self.index_capacity - self.entries) + (self.value_capacity - self.entries)
    }
}
