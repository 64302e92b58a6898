//! Property tests over randomly generated well-formed pointer hierarchies.
//!
//! Inputs are built as random bottom-up merge sequences: at each step one
//! active object merges into another at a non-decreasing distance, and the
//! last survivor becomes the self-loop root. This construction guarantees
//! the pointer-representation contract (single root, distances
//! non-decreasing along parent chains) by construction.

use proptest::collection::vec;
use proptest::prelude::*;
use ramus_core::{
    Cluster, ClusterHandle, Clustering, ExtractorBuilder, OutputMode, PointerHierarchy,
    PointerRepresentation,
};

/// Drives one random merge sequence into a pointer representation.
///
/// `increments` feed the running merge distance; a zero increment creates an
/// exact tie with the previous merge.
fn build_representation(
    n: usize,
    picks: &[(u32, u32)],
    increments: &[u8],
) -> PointerRepresentation<f64> {
    let mut active: Vec<usize> = (0..n).collect();
    let mut parents: Vec<usize> = (0..n).collect();
    let mut distances = vec![f64::INFINITY; n];
    let mut current = 0.0_f64;
    for (step, &(source_raw, target_raw)) in picks.iter().enumerate() {
        current += f64::from(increments[step]);
        let source = active.remove(source_raw as usize % active.len());
        let target = active[target_raw as usize % active.len()];
        parents[source] = target;
        distances[source] = current;
    }
    PointerRepresentation::new(parents, distances).expect("generated input must be well formed")
}

/// Random merge sequences; zero increments allowed, so exact ties occur.
fn merge_sequences() -> impl Strategy<Value = (usize, Vec<(u32, u32)>, Vec<u8>, u32)> {
    (2_usize..24).prop_flat_map(|n| {
        (
            Just(n),
            vec((any::<u32>(), any::<u32>()), n - 1),
            vec(0_u8..3, n - 1),
            any::<u32>(),
        )
    })
}

/// Random merge sequences with strictly increasing distances (no ties).
fn tie_free_merge_sequences() -> impl Strategy<Value = (usize, Vec<(u32, u32)>, Vec<u8>, u32)> {
    (2_usize..24).prop_flat_map(|n| {
        (
            Just(n),
            vec((any::<u32>(), any::<u32>()), n - 1),
            vec(1_u8..4, n - 1),
            any::<u32>(),
        )
    })
}

fn cluster_at<'a>(clustering: &'a Clustering<f64>, handle: ClusterHandle) -> &'a Cluster<f64> {
    clustering.get(handle).expect("handle must resolve")
}

fn assert_exact_partition(clustering: &Clustering<f64>, n: usize) {
    let mut seen = vec![false; n];
    for &handle in clustering.top_level() {
        for &id in cluster_at(clustering, handle).members() {
            assert!(!seen[id], "id {id} appears in two partition cells");
            seen[id] = true;
        }
    }
    assert!(
        seen.iter().all(|&covered| covered),
        "partition must cover the full id set"
    );
}

proptest! {
    #[test]
    fn strict_partitions_cover_the_id_set_exactly(
        (n, picks, increments, k_raw) in merge_sequences(),
    ) {
        let rep = build_representation(n, &picks, &increments);
        let extractor = ExtractorBuilder::new()
            .with_min_clusters(k_raw as usize % n + 1)
            .with_output_mode(OutputMode::StrictPartitions)
            .build()
            .expect("configuration must be valid");
        let clustering = extractor.run(&rep).expect("extraction must succeed");
        assert_exact_partition(&clustering, n);
    }

    #[test]
    fn tie_free_min_clusters_yields_exactly_k_cells(
        (n, picks, increments, k_raw) in tie_free_merge_sequences(),
    ) {
        let k = k_raw as usize % n + 1;
        let rep = build_representation(n, &picks, &increments);
        let extractor = ExtractorBuilder::new()
            .with_min_clusters(k)
            .with_output_mode(OutputMode::StrictPartitions)
            .build()
            .expect("configuration must be valid");
        let clustering = extractor.run(&rep).expect("extraction must succeed");
        prop_assert_eq!(clustering.top_level().len(), k);
    }

    #[test]
    fn sub_threshold_merges_share_a_cell(
        (n, picks, increments, t_raw) in merge_sequences(),
    ) {
        let rep = build_representation(n, &picks, &increments);
        // Distances are whole numbers; an offset cut never ties with one.
        let threshold = f64::from(t_raw % 64) + 0.5;
        let extractor = ExtractorBuilder::new()
            .with_threshold(threshold)
            .with_output_mode(OutputMode::StrictPartitions)
            .build()
            .expect("configuration must be valid");
        let clustering = extractor.run(&rep).expect("extraction must succeed");
        assert_exact_partition(&clustering, n);

        let mut cell = vec![usize::MAX; n];
        for (index, &handle) in clustering.top_level().iter().enumerate() {
            for &id in cluster_at(&clustering, handle).members() {
                cell[id] = index;
            }
        }
        for id in 0..n {
            let distance = rep.merge_distance(id);
            if distance.is_finite() && distance < threshold {
                prop_assert_eq!(
                    cell[id],
                    cell[rep.parent(id)],
                    "ids merging below the threshold must share a cell",
                );
            }
        }
    }

    #[test]
    fn dendrograms_reach_every_id_exactly_once(
        (n, picks, increments, k_raw) in merge_sequences(),
    ) {
        let rep = build_representation(n, &picks, &increments);
        let extractor = ExtractorBuilder::new()
            .with_min_clusters(k_raw as usize % n + 1)
            .with_output_mode(OutputMode::PartialHierarchy)
            .build()
            .expect("configuration must be valid");
        let clustering = extractor.run(&rep).expect("extraction must succeed");

        let root = clustering.root().expect("dendrogram must have one root");
        let mut seen = vec![false; n];
        let mut visited = 0_usize;
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            visited += 1;
            let cluster = cluster_at(&clustering, handle);
            for &id in cluster.members() {
                assert!(!seen[id], "id {id} reachable twice from the root");
                seen[id] = true;
            }
            for &child in cluster.children() {
                // Children are always pushed before their merge node, so the
                // walk cannot revisit the root or cycle.
                prop_assert!(child.index() < handle.index());
                stack.push(child);
            }
        }
        prop_assert!(seen.iter().all(|&covered| covered));
        prop_assert_eq!(visited, clustering.len(), "arena must hold no orphans");
    }

    #[test]
    fn extraction_is_deterministic(
        (n, picks, increments, k_raw) in merge_sequences(),
    ) {
        let rep = build_representation(n, &picks, &increments);
        let extractor = ExtractorBuilder::new()
            .with_min_clusters(k_raw as usize % n + 1)
            .with_output_mode(OutputMode::PartialHierarchy)
            .build()
            .expect("configuration must be valid");
        let first = extractor.run(&rep).expect("extraction must succeed");
        let second = extractor.run(&rep).expect("extraction must succeed");
        prop_assert_eq!(first, second);
    }
}
