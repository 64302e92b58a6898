//! Split-point search over the sorted id order.
//!
//! The split index `s` divides the sorted order into the base part `[0, s)`,
//! whose merges are applied bottom-up, and the upper part `[s, n)`, which
//! remains as explicit hierarchy.

use core::cmp::Ordering;
use std::num::NonZeroUsize;

use crate::{builder::ThresholdRule, distance::MergeDistance, pointer::PointerHierarchy};

/// Computes the split index for the configured stopping rule.
///
/// For a minimum cluster count the initial cut at `n - min_clusters` is
/// walked left across exact ties so ids merging at the stop distance are
/// never separated. For a distance threshold the cut keeps every merge at or
/// above the threshold in the upper part.
pub(super) fn locate_split<H: PointerHierarchy>(
    hierarchy: &H,
    order: &[usize],
    rule: &ThresholdRule<H::Distance>,
) -> usize {
    match rule {
        ThresholdRule::MinClusters(min_clusters) => {
            split_by_min_clusters(hierarchy, order, *min_clusters)
        }
        ThresholdRule::Threshold(threshold) => split_by_threshold(hierarchy, order, threshold),
        ThresholdRule::FullHierarchy => 0,
    }
}

fn split_by_min_clusters<H: PointerHierarchy>(
    hierarchy: &H,
    order: &[usize],
    min_clusters: NonZeroUsize,
) -> usize {
    let mut split = order.len().saturating_sub(min_clusters.get());
    let Some(&stop_id) = order.get(split) else {
        return split;
    };
    let stop_distance = hierarchy.merge_distance(stop_id);
    // Tie extension: ids merging exactly at the stop distance stay together.
    while split > 0
        && hierarchy
            .merge_distance(order[split - 1])
            .compare(&stop_distance)
            == Ordering::Equal
    {
        split -= 1;
    }
    split
}

fn split_by_threshold<H: PointerHierarchy>(
    hierarchy: &H,
    order: &[usize],
    threshold: &H::Distance,
) -> usize {
    let mut split = order.len();
    while split > 0
        && hierarchy.merge_distance(order[split - 1]).compare(threshold) != Ordering::Less
    {
        split -= 1;
    }
    split
}
