//! Driven port for uniform random choices.
//!
//! Visitors that pick values at random ask this port for an index instead of
//! reaching for a global generator, so tests can script the outcome.

/// Source of uniformly distributed indices.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. `len` is always non-zero.
    fn pick(&self, len: usize) -> usize;
}

/// Deterministic source that always returns the same index.
///
/// # Examples
/// ```
/// use courier::domain::ports::{FixedRandomSource, RandomSource};
///
/// let source = FixedRandomSource::new(1);
/// assert_eq!(source.pick(4), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRandomSource {
    index: usize,
}

impl FixedRandomSource {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RandomSource for FixedRandomSource {
    fn pick(&self, _len: usize) -> usize {
        self.index
    }
}
