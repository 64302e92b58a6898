//! Builder utilities for configuring cluster extraction.
//!
//! Exposes the stopping-rule and output-mode surface and the validation
//! performed before constructing [`Extractor`] instances.

use std::num::NonZeroUsize;

use tracing::warn;

use crate::{
    Result,
    distance::MergeDistance,
    error::ExtractionError,
    extractor::Extractor,
};

/// Output shape of an extraction call.
///
/// # Examples
/// ```
/// use ramus_core::OutputMode;
///
/// let mode = OutputMode::StrictPartitions;
/// assert!(matches!(mode, OutputMode::StrictPartitions));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputMode {
    /// Emit a single-rooted, truncated dendrogram.
    PartialHierarchy,
    /// Emit a flat, non-overlapping partition of the id set.
    StrictPartitions,
}

/// Stopping rule selecting where the hierarchy is cut.
#[derive(Clone, Debug, PartialEq)]
pub enum ThresholdRule<D> {
    /// Stop once at least this many base clusters remain. Exact ties at the
    /// stop distance are never split, so the final count may exceed the
    /// requested minimum.
    MinClusters(NonZeroUsize),
    /// Cut at the given merge distance: merges below it are applied, merges
    /// at or above it are retained as upper hierarchy.
    Threshold(D),
    /// Retain the full hierarchy. Forces [`OutputMode::PartialHierarchy`].
    FullHierarchy,
}

/// Configures and constructs [`Extractor`] instances.
///
/// The two stopping parameters are mutually exclusive; configuring neither
/// selects the full hierarchy.
///
/// # Examples
/// ```
/// use ramus_core::{ExtractorBuilder, OutputMode, ThresholdRule};
///
/// let extractor = ExtractorBuilder::<f64>::new()
///     .with_min_clusters(3)
///     .with_output_mode(OutputMode::StrictPartitions)
///     .build()?;
/// assert!(matches!(extractor.rule(), ThresholdRule::MinClusters(k) if k.get() == 3));
/// assert_eq!(extractor.output_mode(), OutputMode::StrictPartitions);
/// # Ok::<(), ramus_core::ExtractionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ExtractorBuilder<D = f64> {
    min_clusters: Option<usize>,
    threshold: Option<D>,
    output_mode: OutputMode,
}

impl<D> Default for ExtractorBuilder<D> {
    fn default() -> Self {
        Self {
            min_clusters: None,
            threshold: None,
            output_mode: OutputMode::PartialHierarchy,
        }
    }
}

impl<D: MergeDistance> ExtractorBuilder<D> {
    /// Creates a builder with no stopping rule and a partial-hierarchy
    /// output.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::{ExtractorBuilder, OutputMode};
    ///
    /// let builder = ExtractorBuilder::<f64>::new();
    /// assert_eq!(builder.output_mode(), OutputMode::PartialHierarchy);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a cut that leaves at least `min_clusters` base clusters.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::ExtractorBuilder;
    ///
    /// let builder = ExtractorBuilder::<f64>::new().with_min_clusters(4);
    /// assert_eq!(builder.min_clusters(), Some(4));
    /// ```
    #[must_use]
    pub fn with_min_clusters(mut self, min_clusters: usize) -> Self {
        self.min_clusters = Some(min_clusters);
        self
    }

    /// Returns the configured minimum cluster count, when one is set.
    #[must_use]
    pub fn min_clusters(&self) -> Option<usize> {
        self.min_clusters
    }

    /// Requests a cut at the given merge distance.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::ExtractorBuilder;
    ///
    /// let builder = ExtractorBuilder::new().with_threshold(0.5);
    /// assert_eq!(builder.threshold(), Some(&0.5));
    /// ```
    #[must_use]
    pub fn with_threshold(mut self, threshold: D) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Returns the configured distance threshold, when one is set.
    #[must_use]
    pub fn threshold(&self) -> Option<&D> {
        self.threshold.as_ref()
    }

    /// Selects the output shape.
    #[must_use]
    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    /// Returns the currently configured output mode.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Validates the configuration and constructs an [`Extractor`].
    ///
    /// With no stopping rule configured the full hierarchy is retained,
    /// which forces the partial-hierarchy output mode.
    ///
    /// # Errors
    /// Returns [`ExtractionError::ConflictingStoppingRule`] when both a
    /// minimum cluster count and a threshold are set, and
    /// [`ExtractionError::InvalidMinClusters`] when the minimum cluster
    /// count is zero.
    pub fn build(self) -> Result<Extractor<D>> {
        match (self.min_clusters, self.threshold) {
            (Some(_), Some(_)) => Err(ExtractionError::ConflictingStoppingRule),
            (Some(got), None) => {
                let min_clusters = NonZeroUsize::new(got)
                    .ok_or(ExtractionError::InvalidMinClusters { got })?;
                Ok(Extractor::new(
                    ThresholdRule::MinClusters(min_clusters),
                    self.output_mode,
                ))
            }
            (None, Some(threshold)) => Ok(Extractor::new(
                ThresholdRule::Threshold(threshold),
                self.output_mode,
            )),
            (None, None) => {
                if self.output_mode == OutputMode::StrictPartitions {
                    warn!(
                        "full hierarchy extraction forces a partial hierarchy, \
                         overriding the strict-partition output mode"
                    );
                }
                Ok(Extractor::new(
                    ThresholdRule::FullHierarchy,
                    OutputMode::PartialHierarchy,
                ))
            }
        }
    }
}
