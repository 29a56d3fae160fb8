//! Batch prefix/suffix stripping with optional parallelism.
//!
//! The typical use is removing a known header and footer from many files
//! that have been split into lines.

use crate::slice::{strip_prefix, strip_suffix};
use serde::Serialize;

/// Result of stripping a single sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripResult<T> {
    /// The remaining elements
    pub elements: Vec<T>,
    /// Whether the prefix matched (always true for an empty prefix)
    pub prefix_matched: bool,
    /// Whether the suffix matched what was left after the prefix
    pub suffix_matched: bool,
    /// Number of elements removed
    pub removed: usize,
}

impl<T> StripResult<T> {
    /// Returns true if anything was removed.
    #[inline]
    pub fn is_changed(&self) -> bool {
        self.removed > 0
    }
}

/// Strip `prefix` then `suffix`, each at most once, from every sequence.
///
/// Results keep the input order. With the `parallel` feature the sequences
/// are processed on the rayon pool; the output is identical either way.
///
/// # Example
/// ```
/// use foodshare_slice::strip_all;
///
/// let files = vec![vec!["// header", "a", "// end"], vec!["b"]];
/// let results = strip_all(&files, &["// header"], &["// end"]);
///
/// assert_eq!(results[0].elements, vec!["a"]);
/// assert_eq!(results[1].elements, vec!["b"]);
/// assert!(!results[1].is_changed());
/// ```
pub fn strip_all<T, S>(sequences: &[S], prefix: &[T], suffix: &[T]) -> Vec<StripResult<T>>
where
    T: Clone + PartialEq + Send + Sync,
    S: AsRef<[T]> + Sync,
{
    #[cfg(feature = "parallel")]
    let results: Vec<StripResult<T>> = {
        use rayon::prelude::*;
        sequences
            .par_iter()
            .map(|sequence| strip_one(sequence.as_ref(), prefix, suffix))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<StripResult<T>> = sequences
        .iter()
        .map(|sequence| strip_one(sequence.as_ref(), prefix, suffix))
        .collect();

    tracing::trace!(
        sequences = results.len(),
        changed = results.iter().filter(|r| r.is_changed()).count(),
        "strip_all finished"
    );

    results
}

/// Strip a single sequence.
#[inline]
fn strip_one<T: Clone + PartialEq>(sequence: &[T], prefix: &[T], suffix: &[T]) -> StripResult<T> {
    let (rest, prefix_matched) = match strip_prefix(sequence, prefix) {
        Some(rest) => (rest, true),
        None => (sequence, false),
    };
    let (rest, suffix_matched) = match strip_suffix(rest, suffix) {
        Some(rest) => (rest, true),
        None => (rest, false),
    };

    StripResult {
        elements: rest.to_vec(),
        prefix_matched,
        suffix_matched,
        removed: sequence.len() - rest.len(),
    }
}
