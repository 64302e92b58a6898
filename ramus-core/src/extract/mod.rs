//! Cluster extraction pipeline over a pointer representation.
//!
//! The pipeline runs four stages over an immutable input snapshot:
//!
//! - Sort the id set by ascending merge distance ([`order`]).
//! - Locate the split index for the stopping rule ([`split`]).
//! - Assemble base clusters below the split, walking distances downwards
//!   ([`assemble`]).
//! - Walk the upper part upwards, either growing an n-ary dendrogram or
//!   flattening directly into a strict partition (this module).
//!
//! The computation is sequential and deterministic; both pass directions are
//! load-bearing. All mutation is local to the call.

mod assemble;
mod naming;
mod order;
mod split;

use tracing::debug;

use crate::{
    builder::{OutputMode, ThresholdRule},
    clustering::{Cluster, ClusterHandle, Clustering},
    distance::MergeDistance,
    error::{ExtractionError, Result},
    observer::{ExtractionPass, ProgressObserver},
    pointer::PointerHierarchy,
};

use self::assemble::BaseCluster;

/// Runs the full extraction pipeline.
///
/// The caller guarantees a non-empty hierarchy.
pub(crate) fn extract_clusters<H, O>(
    hierarchy: &H,
    rule: &ThresholdRule<H::Distance>,
    output_mode: OutputMode,
    observer: &mut O,
) -> Result<Clustering<H::Distance>>
where
    H: PointerHierarchy,
    O: ProgressObserver,
{
    let order = order::sort_by_distance(hierarchy);
    let split = split::locate_split(hierarchy, &order, rule);
    debug!(split, items = order.len(), "located split index");

    let mut cluster_map: Vec<Option<usize>> = vec![None; hierarchy.len()];
    let base =
        assemble::assemble_base_clusters(hierarchy, &order[..split], &mut cluster_map, observer);
    debug!(base_clusters = base.len(), "assembled base clusters");

    match output_mode {
        OutputMode::PartialHierarchy => {
            build_dendrogram(hierarchy, &order[split..], base, &mut cluster_map, observer)
        }
        OutputMode::StrictPartitions => {
            Ok(build_partition(&order[split..], base, &cluster_map, observer))
        }
    }
}

/// Emits a one-element leaf cluster for a raw object.
fn push_leaf<D: MergeDistance>(clustering: &mut Clustering<D>, id: usize) -> ClusterHandle {
    let name = naming::cluster_name::<D>(id, None, &[id]);
    clustering.push(Cluster::new(name, vec![id], None))
}

/// Builds the truncated dendrogram from the upper part of the order.
///
/// Each base cluster keeps a "current representative" arena slot. A new
/// merge layer pushes a fresh node and rebinds the slot; the superseded
/// representative survives as the merge node's child, so emitted nodes are
/// never mutated.
fn build_dendrogram<H, O>(
    hierarchy: &H,
    upper_ids: &[usize],
    base: Vec<BaseCluster<H::Distance>>,
    cluster_map: &mut [Option<usize>],
    observer: &mut O,
) -> Result<Clustering<H::Distance>>
where
    H: PointerHierarchy,
    O: ProgressObserver,
{
    let mut clustering = Clustering::new();
    let mut current: Vec<ClusterHandle> = Vec::with_capacity(base.len() + upper_ids.len());
    for cluster in base {
        let name = naming::cluster_name(cluster.lead, Some(&cluster.depth), &cluster.members);
        current.push(clustering.push(Cluster::new(
            name,
            cluster.members,
            Some(cluster.depth),
        )));
    }

    let mut root: Option<(usize, ClusterHandle)> = None;
    for &id in upper_ids {
        let handle = match cluster_map[id] {
            Some(cluster_id) => current[cluster_id],
            // A synthesized leaf can take no further incoming parent
            // pointer, so it is never registered in the representative map.
            None => push_leaf(&mut clustering, id),
        };
        let successor = hierarchy.parent(id);
        if successor == id {
            if let Some((first, _)) = root {
                return Err(ExtractionError::SecondRoot { first, second: id });
            }
            root = Some((id, handle));
        } else {
            let depth = hierarchy.merge_distance(id);
            let name = naming::cluster_name(successor, Some(&depth), &[]);
            match cluster_map[successor] {
                Some(parent_id) => {
                    let merged = clustering.push(Cluster::with_children(
                        name,
                        Vec::new(),
                        Some(depth),
                        vec![current[parent_id], handle],
                    ));
                    current[parent_id] = merged;
                }
                None => {
                    let parent_id = current.len();
                    let leaf = push_leaf(&mut clustering, successor);
                    let merged = clustering.push(Cluster::with_children(
                        name,
                        Vec::new(),
                        Some(depth),
                        vec![leaf, handle],
                    ));
                    current.push(merged);
                    cluster_map[successor] = Some(parent_id);
                }
            }
        }
        observer.processed(ExtractionPass::UpperHierarchy);
    }

    let (_, root_handle) = root.ok_or(ExtractionError::MissingRoot)?;
    clustering.add_top_level(root_handle);
    debug!(clusters = clustering.len(), "assembled dendrogram");
    Ok(clustering)
}

/// Flattens the extraction into a strict partition of the id set.
///
/// Base clusters become partition cells directly; upper ids not absorbed
/// into a base cluster become top-level singletons.
fn build_partition<D, O>(
    upper_ids: &[usize],
    base: Vec<BaseCluster<D>>,
    cluster_map: &[Option<usize>],
    observer: &mut O,
) -> Clustering<D>
where
    D: MergeDistance,
    O: ProgressObserver,
{
    let mut clustering = Clustering::new();
    for cluster in base {
        let name = naming::cluster_name(cluster.lead, Some(&cluster.depth), &cluster.members);
        let handle = clustering.push(Cluster::new(name, cluster.members, Some(cluster.depth)));
        clustering.add_top_level(handle);
    }
    for &id in upper_ids {
        if cluster_map[id].is_none() {
            let handle = push_leaf(&mut clustering, id);
            clustering.add_top_level(handle);
        }
        observer.processed(ExtractionPass::UpperHierarchy);
    }
    debug!(cells = clustering.top_level().len(), "assembled strict partition");
    clustering
}
