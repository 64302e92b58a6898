//! Pointer-representation input contract for cluster extraction.
//!
//! A hierarchical clustering in pointer form records, per object id, the id
//! it merges into next and the distance at which that merge occurs. Exactly
//! one id is its own parent (the root), and distances are non-decreasing
//! along any parent chain towards the root. The first precondition is checked
//! while extracting; the second is a documented contract of the upstream
//! algorithm and is not validated here. A violation yields an unspecified
//! clustering, not an error.

use crate::{distance::MergeDistance, error::ExtractionError};

/// Read access to a hierarchical clustering in pointer representation.
///
/// Object ids are the dense range `0..len()`. Implementations are immutable
/// snapshots for the duration of an extraction call.
///
/// # Examples
/// ```
/// use ramus_core::{MergeDistance, PointerHierarchy};
///
/// struct Chain(usize);
///
/// impl PointerHierarchy for Chain {
///     type Distance = f64;
///     fn len(&self) -> usize { self.0 }
///     fn parent(&self, id: usize) -> usize { (id + 1).min(self.0 - 1) }
///     fn merge_distance(&self, id: usize) -> f64 {
///         if id + 1 == self.0 { f64::infinite() } else { id as f64 }
///     }
/// }
///
/// let chain = Chain(3);
/// assert_eq!(chain.parent(0), 1);
/// assert!(chain.merge_distance(2).is_infinite());
/// ```
pub trait PointerHierarchy {
    /// Merge-distance type stored alongside the parent pointers.
    type Distance: MergeDistance;

    /// Returns the number of objects in the id universe.
    fn len(&self) -> usize;

    /// Returns whether the id universe is empty.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the id that `id` merges into next (the root maps to itself).
    fn parent(&self, id: usize) -> usize;

    /// Returns the distance at which `id` merges into its parent.
    ///
    /// The root carries the infinite sentinel.
    fn merge_distance(&self, id: usize) -> Self::Distance;
}

/// Owned pointer representation backed by parallel arrays.
///
/// # Examples
/// ```
/// use ramus_core::{PointerHierarchy, PointerRepresentation};
///
/// // 0 merges into 1 at distance 1.0; 1 is the root.
/// let rep = PointerRepresentation::new(vec![1, 1], vec![1.0, f64::INFINITY])?;
/// assert_eq!(rep.len(), 2);
/// assert_eq!(rep.parent(0), 1);
/// # Ok::<(), ramus_core::ExtractionError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PointerRepresentation<D> {
    parents: Vec<usize>,
    distances: Vec<D>,
}

impl<D: MergeDistance> PointerRepresentation<D> {
    /// Validates and constructs a pointer representation.
    ///
    /// # Errors
    /// Returns [`ExtractionError::LengthMismatch`] when the arrays disagree
    /// on length and [`ExtractionError::ParentOutOfBounds`] when a parent
    /// pointer falls outside `0..parents.len()`. The single-self-loop shape
    /// is not checked here; extraction reports it when the upper pass runs.
    pub fn new(parents: Vec<usize>, distances: Vec<D>) -> Result<Self, ExtractionError> {
        if parents.len() != distances.len() {
            return Err(ExtractionError::LengthMismatch {
                parents: parents.len(),
                distances: distances.len(),
            });
        }
        let len = parents.len();
        for (id, &parent) in parents.iter().enumerate() {
            if parent >= len {
                return Err(ExtractionError::ParentOutOfBounds { id, parent, len });
            }
        }
        Ok(Self { parents, distances })
    }
}

impl<D: MergeDistance> PointerHierarchy for PointerRepresentation<D> {
    type Distance = D;

    fn len(&self) -> usize {
        self.parents.len()
    }

    fn parent(&self, id: usize) -> usize {
        self.parents[id]
    }

    fn merge_distance(&self, id: usize) -> D {
        self.distances[id].clone()
    }
}
