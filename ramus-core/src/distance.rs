//! Merge-distance abstraction shared by the extraction pipeline.
//!
//! The pointer representation records, per object, the distance at which the
//! object merges into its successor. The extraction pipeline only ever
//! compares these values, tests them for equality, and recognises the
//! "infinite" sentinel that flags the unmerged root. [`MergeDistance`]
//! captures exactly that capability so a single generic pipeline serves both
//! floating-point distances and any other totally ordered quantity.

use core::{cmp::Ordering, fmt};

/// A totally ordered merge-distance quantity with an infinite sentinel.
///
/// The sentinel marks objects that never merge (the root of the pointer
/// representation carries it). Implementations must provide a total order;
/// for floating-point distances this is [`f64::total_cmp`], which also gives
/// the numeric fast path the same tie semantics as any other implementation.
///
/// # Examples
/// ```
/// use core::cmp::Ordering;
/// use ramus_core::MergeDistance;
///
/// assert_eq!(1.5_f64.compare(&2.0), Ordering::Less);
/// assert!(f64::infinite().is_infinite());
/// assert!(!u64::MAX.saturating_sub(1).is_infinite());
/// ```
pub trait MergeDistance: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Compares two distances under the total order.
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns whether this value is the infinite sentinel.
    fn is_infinite(&self) -> bool;

    /// Returns the infinite sentinel.
    fn infinite() -> Self;
}

impl MergeDistance for f64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn is_infinite(&self) -> bool {
        f64::is_infinite(*self)
    }

    fn infinite() -> Self {
        f64::INFINITY
    }
}

impl MergeDistance for f32 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn is_infinite(&self) -> bool {
        f32::is_infinite(*self)
    }

    fn infinite() -> Self {
        f32::INFINITY
    }
}

impl MergeDistance for u64 {
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn is_infinite(&self) -> bool {
        *self == u64::MAX
    }

    fn infinite() -> Self {
        u64::MAX
    }
}

impl MergeDistance for u32 {
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn is_infinite(&self) -> bool {
        *self == u32::MAX
    }

    fn infinite() -> Self {
        u32::MAX
    }
}
