//! # lazyseq
//!
//! A lazily-evaluated sequence library providing deferred map and filter
//! chains over in-memory collections.
//!
//! ## Overview
//!
//! This library brings the lazy transformation pipeline familiar from
//! functional collection APIs to Rust. It includes:
//!
//! - **Lazy Sequences**: [`LazySequence`] wraps an ordered collection and
//!   defers every transformation until a terminal operation runs
//! - **Chainable Stages**: `map` and `filter` build a linked chain of
//!   transformation stages without materializing intermediate collections
//! - **Structural Sharing**: stages share their predecessors, so a chain
//!   may branch into independent pipelines over the same source
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize support for sequences
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let sequence = lazy(vec![1, 2, 3, 4, 5])
//!     .map(|element, _index| element * 10)
//!     .filter(|element| *element > 20);
//!
//! assert_eq!(sequence.to_vec(), vec![30, 40, 50]);
//! ```
//!
//! [`LazySequence`]: sequence::LazySequence

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {

    pub use crate::sequence::*;
}

pub mod sequence;
