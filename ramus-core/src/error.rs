//! Error types for the Ramus core library.
//!
//! Defines the error enum exposed by the public API, a parallel set of
//! stable machine-readable codes, and a convenient result alias.

use thiserror::Error;

/// Errors produced while configuring or running cluster extraction.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// The pointer hierarchy contained no objects.
    #[error("pointer hierarchy contains no objects")]
    EmptyHierarchy,
    /// The minimum number of clusters must be greater than zero.
    #[error("min_clusters must be at least 1 (got {got})")]
    InvalidMinClusters {
        /// The invalid cluster count supplied by the caller.
        got: usize,
    },
    /// Both a minimum cluster count and a distance threshold were configured.
    #[error("min_clusters and threshold are mutually exclusive stopping rules")]
    ConflictingStoppingRule,
    /// The parent and distance arrays had different lengths.
    #[error("parent array has {parents} entries but distance array has {distances}")]
    LengthMismatch {
        /// Number of parent pointers supplied.
        parents: usize,
        /// Number of merge distances supplied.
        distances: usize,
    },
    /// A parent pointer referenced an object outside the id universe.
    #[error("object {id} has parent {parent} outside the id range 0..{len}")]
    ParentOutOfBounds {
        /// Object whose parent pointer is invalid.
        id: usize,
        /// The out-of-range parent value.
        parent: usize,
        /// Size of the id universe.
        len: usize,
    },
    /// No self-loop root was found in the pointer hierarchy.
    #[error("pointer hierarchy has no self-loop root")]
    MissingRoot,
    /// More than one self-loop root was found in the pointer hierarchy.
    #[error("pointer hierarchy has a second self-loop root {second} (first was {first})")]
    SecondRoot {
        /// First self-loop encountered.
        first: usize,
        /// Offending second self-loop.
        second: usize,
    },
}

impl ExtractionError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> ExtractionErrorCode {
        match self {
            Self::EmptyHierarchy => ExtractionErrorCode::EmptyHierarchy,
            Self::InvalidMinClusters { .. } => ExtractionErrorCode::InvalidMinClusters,
            Self::ConflictingStoppingRule => ExtractionErrorCode::ConflictingStoppingRule,
            Self::LengthMismatch { .. } => ExtractionErrorCode::LengthMismatch,
            Self::ParentOutOfBounds { .. } => ExtractionErrorCode::ParentOutOfBounds,
            Self::MissingRoot => ExtractionErrorCode::MissingRoot,
            Self::SecondRoot { .. } => ExtractionErrorCode::SecondRoot,
        }
    }
}

/// Machine-readable error codes for [`ExtractionError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExtractionErrorCode {
    /// The pointer hierarchy contained no objects.
    EmptyHierarchy,
    /// The minimum number of clusters was zero.
    InvalidMinClusters,
    /// Two stopping rules were configured at once.
    ConflictingStoppingRule,
    /// Parent and distance arrays disagreed on length.
    LengthMismatch,
    /// A parent pointer fell outside the id universe.
    ParentOutOfBounds,
    /// No self-loop root was found.
    MissingRoot,
    /// A second self-loop root was found.
    SecondRoot,
}

impl ExtractionErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyHierarchy => "EMPTY_HIERARCHY",
            Self::InvalidMinClusters => "INVALID_MIN_CLUSTERS",
            Self::ConflictingStoppingRule => "CONFLICTING_STOPPING_RULE",
            Self::LengthMismatch => "LENGTH_MISMATCH",
            Self::ParentOutOfBounds => "PARENT_OUT_OF_BOUNDS",
            Self::MissingRoot => "MISSING_ROOT",
            Self::SecondRoot => "SECOND_ROOT",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ExtractionError>;
