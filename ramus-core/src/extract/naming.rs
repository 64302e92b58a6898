//! Deterministic human-readable cluster names.

use crate::distance::MergeDistance;

/// Derives a presentation name from a cluster's lead object, linkage depth,
/// and member count.
///
/// Names are identification aids only, never lookup keys.
pub(super) fn cluster_name<D: MergeDistance>(
    lead: usize,
    depth: Option<&D>,
    members: &[usize],
) -> String {
    if members.is_empty() {
        return match depth {
            Some(depth) => format!("merge_{lead}_{depth}"),
            None => format!("merge_{lead}"),
        };
    }
    if depth.is_some_and(MergeDistance::is_infinite) || members.len() == 1 {
        return format!("object_{lead}");
    }
    match depth {
        Some(depth) => format!("cluster_{lead}_{depth}"),
        // Whole-dataset cluster.
        None => format!("cluster_{lead}"),
    }
}
