//! Scalar value types that can be stored in a timeline.
//!
//! Each supported type implements [`TimelineValue`], which carries a type
//! tag and an ordering capability. Types with a natural total order support
//! every aggregate; types without one (JSON values) only support `First` and
//! `Last`.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Tag identifying the concrete scalar type held by a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Char,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Bytes,
    Json,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Char => "char",
            ValueKind::Bool => "bool",
            ValueKind::I8 => "i8",
            ValueKind::I16 => "i16",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::String => "string",
            ValueKind::Bytes => "bytes",
            ValueKind::Json => "json",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar type storable in a [`ScalarTimeline`](crate::ScalarTimeline).
///
/// `ORDERED` is the capability flag consulted before any `Min`/`Max`
/// aggregate runs. When it is true, `compare` must return `Some` for every
/// pair of values and define a total order.
pub trait TimelineValue: Clone + PartialEq + fmt::Debug {
    /// Type tag reported by [`ScalarTimeline::value_kind`](crate::ScalarTimeline::value_kind).
    const KIND: ValueKind;

    /// Whether values of this type have a natural total order.
    const ORDERED: bool;

    /// Natural ordering of two values, `None` for unordered types.
    fn compare(&self, other: &Self) -> Option<Ordering>;
}

macro_rules! impl_ordered_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl TimelineValue for $ty {
                const KIND: ValueKind = ValueKind::$kind;
                const ORDERED: bool = true;

                #[inline]
                fn compare(&self, other: &Self) -> Option<Ordering> {
                    Some(Ord::cmp(self, other))
                }
            }
        )*
    };
}

impl_ordered_value! {
    char => Char,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    String => String,
    Bytes => Bytes,
}

// Floats use the IEEE 754 total order so that NaN and signed zeros still
// produce a deterministic extremum.
impl TimelineValue for f32 {
    const KIND: ValueKind = ValueKind::F32;
    const ORDERED: bool = true;

    #[inline]
    fn compare(&self, other: &Self) -> Option<Ordering> {
        Some(self.total_cmp(other))
    }
}

impl TimelineValue for f64 {
    const KIND: ValueKind = ValueKind::F64;
    const ORDERED: bool = true;

    #[inline]
    fn compare(&self, other: &Self) -> Option<Ordering> {
        Some(self.total_cmp(other))
    }
}

impl TimelineValue for serde_json::Value {
    const KIND: ValueKind = ValueKind::Json;
    const ORDERED: bool = false;

    fn compare(&self, _other: &Self) -> Option<Ordering> {
        None
    }
}
