//! Call-site convenience for building lazy sequences.
//!
//! This module provides [`lazy`], a free function that wraps a collection
//! as the base of a new transformation chain without naming the sequence
//! type at the call site.

use super::lazy_sequence::LazySequence;

/// Wraps a collection as a lazy sequence.
///
/// Accepts anything convertible into a [`LazySequence`]: an owned vector
/// (moved in, leaving no alias behind) or a slice of cloneable elements
/// (copied in). The result is the base of a new chain.
///
/// # Arguments
///
/// * `collection` - The collection to wrap
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::lazy;
///
/// let shouting = lazy(vec!["some", "elements", "go", "here"])
///     .map(|word, _index| word.to_uppercase())
///     .filter(|word| word.len() > 2);
///
/// assert_eq!(shouting.to_vec(), vec!["SOME", "ELEMENTS", "HERE"]);
/// ```
#[inline]
#[must_use]
pub fn lazy<T, C>(collection: C) -> LazySequence<T>
where
    C: Into<LazySequence<T>>,
{
    collection.into()
}
