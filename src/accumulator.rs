//! Running-total container
//!
//! An [`Accumulator`] owns a single numeric value and evolves it in place
//! through [`add`](Accumulator::add) and [`subtract`](Accumulator::subtract).
//! Mutation requires `&mut self`, so callers sharing one across threads
//! must serialize access themselves.

use crate::num::Numeric;
use serde::{Deserialize, Serialize};

/// A mutable running numeric total.
///
/// Starts at the value given to [`new`](Self::new), or at zero via
/// `Default`. Both operations return the new total, so call chains read
/// like a tape: `Accumulator::new(5).add(3)` is `8`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Accumulator<T> {
    value: T,
}

impl<T: Numeric> Accumulator<T> {
    /// Create an accumulator starting at `initial`. No validation.
    pub fn new(initial: T) -> Self {
        Self { value: initial }
    }

    /// Add `x` to the total and return the new total.
    pub fn add(&mut self, x: T) -> T {
        self.value = self.value + x;
        self.value
    }

    /// Subtract `x` from the total and return the new total.
    pub fn subtract(&mut self, x: T) -> T {
        self.value = self.value - x;
        self.value
    }

    /// The current total.
    pub fn value(&self) -> T {
        self.value
    }
}
