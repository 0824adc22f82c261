//! # tally - Numeric Accumulation Primitives
//!
//! Three small, independent building blocks for working with numbers:
//! a pure [`sum`] function, a mutable running-total [`Accumulator`], and
//! an order-preserving filter-transform pipeline ([`process`]).
//!
//! All three are generic over [`Numeric`], implemented for the primitive
//! integer and float types. Sequences that mix integers and floats at
//! runtime use [`Number`], a tagged union with int-to-float promotion.
//!
//! ## Quick Start
//!
//! ```
//! use tally::{process, sum, Accumulator, ProcessOptions};
//!
//! assert_eq!(sum(2, 3), 5);
//!
//! let mut total = Accumulator::new(5);
//! assert_eq!(total.add(3), 8);
//! assert_eq!(total.subtract(2), 6);
//!
//! // Keep values above 2, then double them.
//! let out = process(
//!     &[1, 2, 3, 4],
//!     &ProcessOptions { threshold: Some(2), double: true },
//! );
//! assert_eq!(out, vec![6, 8]);
//! ```
//!
//! ## Mixed integer/float sequences
//!
//! ```
//! use tally::{process, Number, ProcessOptions};
//!
//! let data = [Number::Int(1), Number::Float(2.5), Number::Int(3)];
//! let out = process(
//!     &data,
//!     &ProcessOptions { threshold: Some(Number::Int(2)), double: true },
//! );
//! assert_eq!(out, vec![Number::Float(5.0), Number::Int(6)]);
//! ```

pub mod accumulator;
pub mod num;
pub mod pipeline;

pub use accumulator::Accumulator;
pub use num::{sum, Number, Numeric, ParseNumberError};
pub use pipeline::{process, ProcessOptions};
