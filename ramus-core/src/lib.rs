//! Ramus core library.
//!
//! Extracts truncated dendrograms and strict flat partitions from the pointer
//! representation of a hierarchical clustering: per object, the object it
//! merges into next (`parent`) and the distance at which that merge occurs
//! (`merge_distance`). The cut is driven by a stopping rule expressed as a
//! desired minimum number of clusters, a distance threshold, or no threshold
//! at all (full hierarchy).
//!
//! Producing the pointer representation is the job of an upstream
//! hierarchical clustering algorithm; this crate only consumes it.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod clustering;
mod distance;
mod error;
mod extract;
mod extractor;
mod observer;
mod pointer;

pub use crate::{
    builder::{ExtractorBuilder, OutputMode, ThresholdRule},
    clustering::{Cluster, ClusterHandle, Clustering},
    distance::MergeDistance,
    error::{ExtractionError, ExtractionErrorCode, Result},
    extractor::Extractor,
    observer::{ExtractionPass, NoopObserver, ProgressObserver},
    pointer::{PointerHierarchy, PointerRepresentation},
};
