//! Lazily-evaluated sequences with deferred transformation chains.
//!
//! This module provides the lazy sequence abstraction:
//!
//! - [`LazySequence`]: an ordered collection whose `map` and `filter`
//!   transformations are deferred until a terminal operation runs
//! - [`lazy`]: a convenience constructor wrapping any compatible collection
//!
//! # Examples
//!
//! ## Deferred Evaluation
//!
//! ```rust
//! use lazyseq::sequence::lazy;
//!
//! let sequence = lazy(vec![1, 2, 3])
//!     .map(|element, _index| element + 1);
//! // Nothing has been computed yet.
//!
//! assert_eq!(sequence.to_vec(), vec![2, 3, 4]);
//! // The transform ran once per element during `to_vec`.
//! ```
//!
//! ## Branching Chains
//!
//! ```rust
//! use lazyseq::sequence::lazy;
//!
//! let base = lazy(vec![1, 2, 3, 4]);
//! let doubled = base.map(|element, _index| element * 2);
//! let odd = base.filter(|element| element % 2 == 1);
//!
//! assert_eq!(doubled.to_vec(), vec![2, 4, 6, 8]);
//! assert_eq!(odd.to_vec(), vec![1, 3]);
//! ```

mod lazy;
mod lazy_sequence;

pub use lazy::lazy;
pub use lazy_sequence::LazySequence;
