//! Result types for cluster extraction.
//!
//! A [`Clustering`] owns an arena of [`Cluster`] nodes addressed by stable
//! [`ClusterHandle`]s. Dendrogram extraction yields a single top-level root
//! whose child links span the tree; strict-partition extraction yields one
//! top-level handle per partition cell. Nodes are never mutated after they
//! are pushed into the arena: when a bottom-up merge supersedes a cluster,
//! a new node is pushed and the old node survives as its child.

use crate::distance::MergeDistance;

/// Stable handle addressing a [`Cluster`] within a [`Clustering`] arena.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ClusterHandle(usize);

impl ClusterHandle {
    /// Returns the arena index of the cluster.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single extracted cluster.
///
/// Merge nodes in a dendrogram may carry no direct members; raw leaf clusters
/// carry no linkage depth.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster<D> {
    name: String,
    members: Vec<usize>,
    depth: Option<D>,
    children: Vec<ClusterHandle>,
}

impl<D: MergeDistance> Cluster<D> {
    pub(crate) fn new(name: String, members: Vec<usize>, depth: Option<D>) -> Self {
        Self {
            name,
            members,
            depth,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_children(
        name: String,
        members: Vec<usize>,
        depth: Option<D>,
        children: Vec<ClusterHandle>,
    ) -> Self {
        Self {
            name,
            members,
            depth,
            children,
        }
    }

    /// Returns the human-readable cluster name.
    ///
    /// Names identify clusters for presentation only; they are not lookup
    /// keys.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the object ids directly attached to this cluster.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Returns the linkage depth, when one applies.
    ///
    /// Raw leaf clusters have no linkage depth.
    #[must_use]
    pub fn depth(&self) -> Option<&D> {
        self.depth.as_ref()
    }

    /// Returns the child clusters merged under this node (dendrogram mode).
    #[must_use]
    pub fn children(&self) -> &[ClusterHandle] {
        &self.children
    }
}

/// The output of an extraction call.
///
/// # Examples
/// ```
/// use ramus_core::{ExtractorBuilder, OutputMode, PointerRepresentation};
///
/// let rep = PointerRepresentation::new(vec![1, 1], vec![1.0, f64::INFINITY])?;
/// let extractor = ExtractorBuilder::new()
///     .with_min_clusters(1)
///     .with_output_mode(OutputMode::StrictPartitions)
///     .build()?;
/// let clustering = extractor.run(&rep)?;
/// assert_eq!(clustering.top_level().len(), 1);
/// let cell = clustering.get(clustering.top_level()[0]).expect("valid handle");
/// assert_eq!(cell.members(), [1, 0]);
/// # Ok::<(), ramus_core::ExtractionError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Clustering<D> {
    clusters: Vec<Cluster<D>>,
    top_level: Vec<ClusterHandle>,
}

impl<D: MergeDistance> Clustering<D> {
    pub(crate) fn new() -> Self {
        Self {
            clusters: Vec::new(),
            top_level: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, cluster: Cluster<D>) -> ClusterHandle {
        let handle = ClusterHandle(self.clusters.len());
        self.clusters.push(cluster);
        handle
    }

    pub(crate) fn add_top_level(&mut self, handle: ClusterHandle) {
        self.top_level.push(handle);
    }

    /// Returns the top-level clusters.
    ///
    /// Dendrogram extraction yields exactly one entry; strict-partition
    /// extraction yields one entry per partition cell.
    #[must_use]
    pub fn top_level(&self) -> &[ClusterHandle] {
        &self.top_level
    }

    /// Returns the dendrogram root when there is exactly one top-level
    /// cluster.
    #[must_use]
    pub fn root(&self) -> Option<ClusterHandle> {
        match self.top_level.as_slice() {
            [root] => Some(*root),
            _ => None,
        }
    }

    /// Resolves a handle into its cluster.
    #[must_use]
    pub fn get(&self, handle: ClusterHandle) -> Option<&Cluster<D>> {
        self.clusters.get(handle.0)
    }

    /// Returns the total number of clusters in the arena, including interior
    /// dendrogram nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns whether the arena holds no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Iterates over every cluster in the arena with its handle.
    pub fn iter(&self) -> impl Iterator<Item = (ClusterHandle, &Cluster<D>)> {
        self.clusters
            .iter()
            .enumerate()
            .map(|(index, cluster)| (ClusterHandle(index), cluster))
    }
}
