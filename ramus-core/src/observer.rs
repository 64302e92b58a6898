//! Progress observation hooks for the extraction passes.
//!
//! The pipeline reports one event per processed id in each pass. Observers
//! are purely advisory: the extraction result is identical under a no-op
//! observer.

/// Identifies which extraction pass produced a progress event.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExtractionPass {
    /// The decreasing-distance pass assembling base clusters.
    BaseClusters,
    /// The increasing-distance pass building the upper hierarchy.
    UpperHierarchy,
}

/// Receives one event per id processed by an extraction pass.
///
/// # Examples
/// ```
/// use ramus_core::{ExtractionPass, ProgressObserver};
///
/// #[derive(Default)]
/// struct Counter(usize);
///
/// impl ProgressObserver for Counter {
///     fn processed(&mut self, _pass: ExtractionPass) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = Counter::default();
/// counter.processed(ExtractionPass::BaseClusters);
/// assert_eq!(counter.0, 1);
/// ```
pub trait ProgressObserver {
    /// Called after each id is processed by the named pass.
    fn processed(&mut self, pass: ExtractionPass);
}

/// Observer that discards all progress events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn processed(&mut self, _pass: ExtractionPass) {}
}
