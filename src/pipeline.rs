//! Filter-transform pipeline over numeric sequences
//!
//! A single order-preserving pass: drop elements not strictly greater than
//! an optional threshold, then double the survivors unless doubling is
//! switched off. The input slice is never mutated; output goes into a
//! fresh vector.

use crate::num::Numeric;
use serde::{Deserialize, Serialize};

/// Options for [`process`].
///
/// Defaults match the common call shape: no threshold, doubling on.
///
/// ```
/// use tally::ProcessOptions;
///
/// let opts = ProcessOptions::<i64>::default();
/// assert_eq!(opts.threshold, None);
/// assert!(opts.double);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessOptions<T> {
    /// Strict cutoff: elements must exceed it to survive. Elements equal
    /// to the threshold are dropped. `None` disables filtering.
    pub threshold: Option<T>,
    /// Double each surviving element before emitting it.
    pub double: bool,
}

impl<T> Default for ProcessOptions<T> {
    fn default() -> Self {
        Self {
            threshold: None,
            double: true,
        }
    }
}

/// Scan `data` once and build the filtered, optionally doubled output.
///
/// The threshold test is strict greater-than, so an element equal to the
/// threshold is excluded — as is any element whose ordering against the
/// threshold is undefined (a NaN operand fails the comparison).
///
/// Output length is at most the input length and surviving elements keep
/// their relative order. The result may be empty.
pub fn process<T: Numeric>(data: &[T], options: &ProcessOptions<T>) -> Vec<T> {
    let result: Vec<T> = data
        .iter()
        .copied()
        .filter(|item| match options.threshold {
            Some(threshold) => *item > threshold,
            None => true,
        })
        .map(|item| if options.double { item * T::TWO } else { item })
        .collect();
    tracing::trace!(input = data.len(), output = result.len(), "processed sequence");
    result
}
