//! Total ordering of the id set by ascending merge distance.

use crate::{distance::MergeDistance, pointer::PointerHierarchy};

/// Returns the ids `0..len` sorted by ascending merge distance.
///
/// The sort is stable, so ids tied on distance keep their relative order and
/// repeated extractions over the same input reproduce the same sequence.
pub(super) fn sort_by_distance<H: PointerHierarchy>(hierarchy: &H) -> Vec<usize> {
    let mut order: Vec<usize> = (0..hierarchy.len()).collect();
    order.sort_by(|&left, &right| {
        hierarchy
            .merge_distance(left)
            .compare(&hierarchy.merge_distance(right))
    });
    order
}
