//! Bottom-up assembly of base clusters below the split index.
//!
//! Ids below the split are processed in strictly decreasing distance order.
//! Because distances are non-decreasing along parent chains, an id's
//! successor has either already been placed in a base cluster (the id joins
//! it) or is still unplaced (a new cluster forms around the pair). The
//! decreasing order is what lets chains of merges grow a single cluster
//! without revisiting placed ids.

use core::cmp::Ordering;

use crate::{
    distance::MergeDistance,
    observer::{ExtractionPass, ProgressObserver},
    pointer::PointerHierarchy,
};

/// A cluster produced by the base pass.
///
/// The lead is the first-encountered successor; the depth is the maximum
/// distance among all merges absorbed so far. Records grow but never shrink.
pub(super) struct BaseCluster<D> {
    pub(super) lead: usize,
    pub(super) members: Vec<usize>,
    pub(super) depth: D,
}

/// Runs the base pass over `base_ids` (ascending slice of the sorted order).
///
/// Fills `cluster_map` with the base-cluster id of every placed object and
/// returns the cluster records.
pub(super) fn assemble_base_clusters<H, O>(
    hierarchy: &H,
    base_ids: &[usize],
    cluster_map: &mut [Option<usize>],
    observer: &mut O,
) -> Vec<BaseCluster<H::Distance>>
where
    H: PointerHierarchy,
    O: ProgressObserver,
{
    let mut clusters: Vec<BaseCluster<H::Distance>> = Vec::new();
    for &id in base_ids.iter().rev() {
        let distance = hierarchy.merge_distance(id);
        let successor = hierarchy.parent(id);
        match cluster_map[successor] {
            Some(cluster_id) => {
                let cluster = &mut clusters[cluster_id];
                cluster.members.push(id);
                cluster_map[id] = Some(cluster_id);
                if cluster.depth.compare(&distance) == Ordering::Less {
                    cluster.depth = distance;
                }
            }
            None => {
                let cluster_id = clusters.len();
                clusters.push(BaseCluster {
                    lead: successor,
                    members: vec![successor, id],
                    depth: distance,
                });
                cluster_map[successor] = Some(cluster_id);
                cluster_map[id] = Some(cluster_id);
            }
        }
        observer.processed(ExtractionPass::BaseClusters);
    }
    clusters
}
