//! Extraction orchestration for the Ramus core library.
//!
//! Provides the [`Extractor`] entry point that drives the sort, split,
//! base-cluster, and hierarchy passes over a pointer representation.

use tracing::{instrument, warn};

use crate::{
    Result,
    builder::{OutputMode, ThresholdRule},
    clustering::Clustering,
    distance::MergeDistance,
    error::ExtractionError,
    extract,
    observer::{NoopObserver, ProgressObserver},
    pointer::PointerHierarchy,
};

/// Entry point for extracting clusterings from pointer hierarchies.
///
/// # Examples
/// ```
/// use ramus_core::{ExtractorBuilder, OutputMode, PointerRepresentation};
///
/// // A --1--> B --2--> C --3--> D (root).
/// let rep = PointerRepresentation::new(
///     vec![1, 2, 3, 3],
///     vec![1.0, 2.0, 3.0, f64::INFINITY],
/// )?;
/// let extractor = ExtractorBuilder::new()
///     .with_min_clusters(2)
///     .with_output_mode(OutputMode::StrictPartitions)
///     .build()?;
/// let clustering = extractor.run(&rep)?;
/// assert_eq!(clustering.top_level().len(), 2);
/// # Ok::<(), ramus_core::ExtractionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Extractor<D: MergeDistance> {
    rule: ThresholdRule<D>,
    output_mode: OutputMode,
}

impl<D: MergeDistance> Extractor<D> {
    pub(crate) fn new(rule: ThresholdRule<D>, output_mode: OutputMode) -> Self {
        Self { rule, output_mode }
    }

    /// Returns the stopping rule this extractor cuts with.
    #[must_use]
    pub fn rule(&self) -> &ThresholdRule<D> {
        &self.rule
    }

    /// Returns the output mode this extractor emits.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Extracts a clustering from the given pointer hierarchy.
    ///
    /// # Errors
    /// Returns [`ExtractionError::EmptyHierarchy`] when the hierarchy holds
    /// no objects, and [`ExtractionError::MissingRoot`] or
    /// [`ExtractionError::SecondRoot`] when the pointer representation does
    /// not contain exactly one self-loop.
    pub fn run<H>(&self, hierarchy: &H) -> Result<Clustering<D>>
    where
        H: PointerHierarchy<Distance = D>,
    {
        self.run_with_observer(hierarchy, &mut NoopObserver)
    }

    /// Extracts a clustering, reporting one progress event per processed id
    /// in each pass.
    ///
    /// The observer is advisory; results are identical under
    /// [`NoopObserver`].
    ///
    /// # Errors
    /// As for [`Extractor::run`].
    pub fn run_with_observer<H, O>(&self, hierarchy: &H, observer: &mut O) -> Result<Clustering<D>>
    where
        H: PointerHierarchy<Distance = D>,
        O: ProgressObserver,
    {
        let items = hierarchy.len();
        self.run_inner(hierarchy, items, observer)
    }

    #[instrument(
        name = "extract.run",
        err,
        skip(self, hierarchy, observer),
        fields(
            items = items,
            rule = ?self.rule,
            output_mode = ?self.output_mode,
        ),
    )]
    fn run_inner<H, O>(
        &self,
        hierarchy: &H,
        items: usize,
        observer: &mut O,
    ) -> Result<Clustering<D>>
    where
        H: PointerHierarchy<Distance = D>,
        O: ProgressObserver,
    {
        if items == 0 {
            warn!("pointer hierarchy is empty, returning error");
            return Err(ExtractionError::EmptyHierarchy);
        }
        extract::extract_clusters(hierarchy, &self.rule, self.output_mode, observer)
    }
}
