//! Scalar sample kinds the extractor runs over.
//!
//! Every kind shares one extraction loop; they differ only in how a corner is
//! compared against the iso-level and in the arithmetic used for the edge
//! interpolation factor.

use derive_more::Display;

use crate::types::Value;

/// Tag naming a sample kind, e.g. for diagnostics.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    #[display("u8")]
    U8,
    #[display("i16")]
    I16,
    #[display("i32")]
    I32,
    #[display("f32")]
    F32,
    #[display("f64")]
    F64,
}

/// How a corner sample is ordered against the iso-level.
///
/// 8-bit samples are read as unsigned intensities. Every wider kind compares
/// in its native signed ordering, so a 16-bit sample with the high bit set is
/// negative and never exceeds a positive iso-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonPolicy {
    UnsignedMagnitude,
    NativeSigned,
}

/// A scalar that can populate a [`VolumeChunk`](crate::chunk::VolumeChunk).
pub trait Sample: Copy + Send + Sync + 'static {
    const KIND: SampleKind;
    const COMPARISON: ComparisonPolicy;

    /// Returns `true` if this corner is "active", i.e. strictly above `iso_level`.
    fn exceeds(self, iso_level: Self) -> bool;

    /// `(iso_level - a) / (b - a)`, evaluated without integer truncation.
    ///
    /// Equal `a` and `b` yield a non-finite factor; it is passed through untouched.
    fn interpolation_factor(iso_level: Self, a: Self, b: Self) -> Value;
}

impl Sample for u8 {
    const KIND: SampleKind = SampleKind::U8;
    const COMPARISON: ComparisonPolicy = ComparisonPolicy::UnsignedMagnitude;

    #[inline]
    fn exceeds(self, iso_level: Self) -> bool {
        u32::from(self) > u32::from(iso_level)
    }

    #[inline]
    fn interpolation_factor(iso_level: Self, a: Self, b: Self) -> Value {
        (Value::from(iso_level) - Value::from(a)) / (Value::from(b) - Value::from(a))
    }
}

impl Sample for i16 {
    const KIND: SampleKind = SampleKind::I16;
    const COMPARISON: ComparisonPolicy = ComparisonPolicy::NativeSigned;

    #[inline]
    fn exceeds(self, iso_level: Self) -> bool {
        self > iso_level
    }

    #[inline]
    fn interpolation_factor(iso_level: Self, a: Self, b: Self) -> Value {
        (Value::from(iso_level) - Value::from(a)) / (Value::from(b) - Value::from(a))
    }
}

impl Sample for i32 {
    const KIND: SampleKind = SampleKind::I32;
    const COMPARISON: ComparisonPolicy = ComparisonPolicy::NativeSigned;

    #[inline]
    fn exceeds(self, iso_level: Self) -> bool {
        self > iso_level
    }

    // f64 keeps the full i32 range exact before the difference is taken.
    #[inline]
    fn interpolation_factor(iso_level: Self, a: Self, b: Self) -> Value {
        ((f64::from(iso_level) - f64::from(a)) / (f64::from(b) - f64::from(a))) as Value
    }
}

impl Sample for f32 {
    const KIND: SampleKind = SampleKind::F32;
    const COMPARISON: ComparisonPolicy = ComparisonPolicy::NativeSigned;

    #[inline]
    fn exceeds(self, iso_level: Self) -> bool {
        self > iso_level
    }

    #[inline]
    fn interpolation_factor(iso_level: Self, a: Self, b: Self) -> Value {
        (iso_level - a) / (b - a)
    }
}

impl Sample for f64 {
    const KIND: SampleKind = SampleKind::F64;
    const COMPARISON: ComparisonPolicy = ComparisonPolicy::NativeSigned;

    #[inline]
    fn exceeds(self, iso_level: Self) -> bool {
        self > iso_level
    }

    #[inline]
    fn interpolation_factor(iso_level: Self, a: Self, b: Self) -> Value {
        ((iso_level - a) / (b - a)) as Value
    }
}

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;
