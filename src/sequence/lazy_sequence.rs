//! Lazily-evaluated sequences with composable transformation stages.
//!
//! This module provides the `LazySequence<T>` type for deferring `map` and
//! `filter` transformations over an ordered collection. Transformations
//! build a singly-linked chain of stages; nothing is computed until a
//! terminal operation (`len`, `for_each`, `to_vec`) traverses the chain.
//!
//! # Motivation
//!
//! Chaining eager `map`/`filter` calls over a `Vec` allocates one
//! intermediate collection per step. A `LazySequence` records the steps
//! instead and replays them in a single pass per terminal operation, so a
//! pipeline of arbitrary depth touches each element once and allocates at
//! most once.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::LazySequence;
//!
//! let names = LazySequence::from_vec(vec!["ada", "grace", "alan"])
//!     .map(|name, _index| name.to_uppercase())
//!     .filter(|name| name.len() > 3);
//! // No transform or predicate has run yet.
//!
//! assert_eq!(names.to_vec(), vec!["GRACE", "ALAN"]);
//! assert_eq!(names.len(), 2);
//! ```

use std::fmt;
use std::rc::Rc;

/// Internal trait for type erasure in map stages.
///
/// A map stage's predecessor produces elements of a different type than
/// the stage itself emits, so storing the stage inside `Node<T>` requires
/// erasing the predecessor's element type. This trait exposes exactly the
/// operations a traversal needs from an erased stage.
trait MapLink<T> {
    /// The element count reported by the predecessor chain.
    fn length(&self) -> usize;

    /// The element count when it is known without running any stored function.
    fn length_hint(&self) -> Option<usize>;

    /// Emits each transformed element with its pass-through index.
    fn emit(&self, visit: &mut dyn FnMut(T, usize));
}

/// A node in a transformation chain.
///
/// Stage variants hold their predecessor behind a `LazySequence` handle,
/// so one node may serve as the predecessor of several chains at once.
enum Node<T> {
    /// The root of a chain. Owns the backing collection.
    Base(Vec<T>),
    /// A deferred transform whose predecessor element type is erased
    /// behind `MapLink`.
    Map(Box<dyn MapLink<T>>),
    /// A deferred predicate over a predecessor of the same element type.
    Filter {
        /// The chain this stage draws elements from.
        predecessor: LazySequence<T>,
        /// Decides which elements pass through.
        should_include: Box<dyn Fn(&T) -> bool>,
    },
}

/// A lazily-evaluated sequence over an ordered collection.
///
/// `LazySequence<T>` wraps a collection and defers `map` and `filter`
/// transformations until a terminal operation (`len`, `for_each`,
/// `to_vec`) runs. Each transformation adds a stage to a singly-linked
/// chain; no stage stores computed output, and every terminal operation
/// recomputes the chain from the base collection.
///
/// Cloning a sequence is cheap: handles share chain nodes through
/// reference counting, so one sequence may serve as the predecessor of
/// any number of independent chains built from it.
///
/// # Time Complexity
///
/// | Operation  | Complexity                       |
/// |------------|----------------------------------|
/// | `new`      | O(1)                             |
/// | `from_vec` | O(1)                             |
/// | `map`      | O(1)                             |
/// | `filter`   | O(1)                             |
/// | `len`      | O(1) unfiltered, O(n) filtered   |
/// | `for_each` | O(n)                             |
/// | `to_vec`   | O(n)                             |
///
/// # Thread Safety
///
/// This type is NOT thread-safe: chains share nodes via `Rc` and the
/// traversal model is single-threaded and fully synchronous.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::LazySequence;
///
/// let sequence = LazySequence::from_vec(vec![5, 4, 3, 2, 1])
///     .map(|element, _index| element * 10)
///     .filter(|element| *element >= 30);
///
/// assert_eq!(sequence.to_vec(), vec![50, 40, 30]);
/// assert_eq!(sequence.len(), 3);
/// ```
pub struct LazySequence<T> {
    /// The chain node this handle designates.
    node: Rc<Node<T>>,
}

impl<T> LazySequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let sequence: LazySequence<i32> = LazySequence::new();
    /// assert_eq!(sequence.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates a base sequence that takes ownership of the given vector.
    ///
    /// Because the vector is moved in, no alias of the backing storage
    /// remains in caller hands; later mutation of the caller's data can
    /// never reach the chain.
    ///
    /// # Arguments
    ///
    /// * `elements` - The collection to wrap
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let sequence = LazySequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_node(Node::Base(elements))
    }

    /// Wraps a freshly built node in a handle.
    #[inline]
    fn from_node(node: Node<T>) -> Self {
        Self {
            node: Rc::new(node),
        }
    }
}

impl<T: Clone> LazySequence<T> {
    /// Creates a base sequence holding a copy of the given slice.
    ///
    /// # Arguments
    ///
    /// * `elements` - The elements to copy into the sequence
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let mut source = vec![1, 2, 3];
    /// let sequence = LazySequence::from_slice(&source);
    ///
    /// source.push(4);
    /// assert_eq!(sequence.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }

    /// Returns the number of elements the chain produces.
    ///
    /// Always equals `to_vec().len()`. For a base sequence this reads the
    /// stored count. A map stage never changes the count, so the query
    /// passes straight to its predecessor without running the transform.
    /// A filter stage must traverse the chain and apply its predicate,
    /// which makes the call O(n) and re-runs stored functions on every
    /// invocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let sequence = LazySequence::from_vec(vec![1, 2, 3, 4]);
    /// assert_eq!(sequence.len(), 4);
    ///
    /// let even = sequence.filter(|element| element % 2 == 0);
    /// assert_eq!(even.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        match self.node.as_ref() {
            Node::Base(elements) => elements.len(),
            Node::Map(stage) => stage.length(),
            Node::Filter { .. } => {
                let mut count = 0;
                self.emit(&mut |_element, _index| count += 1);
                count
            }
        }
    }

    /// Returns `true` if the chain produces no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let empty: LazySequence<i32> = LazySequence::new();
    /// assert!(empty.is_empty());
    ///
    /// let populated = LazySequence::from_vec(vec![1]);
    /// assert!(!populated.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes `visit(element, index)` for every element the chain
    /// produces, in order.
    ///
    /// Runs synchronously to completion, recomputing the chain from the
    /// base collection. `index` is the element's position in the base
    /// collection, passed through every stage unchanged, so the visited
    /// indices are sparse downstream of a `filter`.
    ///
    /// # Arguments
    ///
    /// * `visit` - Callback receiving each element and its index
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let sequence = LazySequence::from_vec(vec!["a", "b"]);
    /// let mut seen = Vec::new();
    ///
    /// sequence.for_each(|element, index| seen.push((index, element)));
    /// assert_eq!(seen, vec![(0, "a"), (1, "b")]);
    /// ```
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(T, usize),
    {
        self.emit(&mut visit);
    }

    /// Materializes the chain into a fresh vector.
    ///
    /// Elements are appended in encounter order. The returned vector is
    /// independent storage: mutating it cannot affect the chain, and a
    /// later `to_vec` recomputes from the base collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let sequence = LazySequence::from_vec(vec![1, 2, 3]);
    /// let mut materialized = sequence.to_vec();
    /// materialized.push(4);
    ///
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let mut elements = self.length_hint().map_or_else(Vec::new, Vec::with_capacity);
        self.emit(&mut |element, _index| elements.push(element));
        elements
    }

    /// Drives the chain, pushing each surviving element and its index
    /// into `visit`.
    ///
    /// Dispatches on the node variant and recurses into the predecessor;
    /// each stage applies its transform or predicate as elements flow
    /// back out toward the chain's end.
    fn emit(&self, visit: &mut dyn FnMut(T, usize)) {
        match self.node.as_ref() {
            Node::Base(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    visit(element.clone(), index);
                }
            }
            Node::Map(stage) => stage.emit(visit),
            Node::Filter {
                predecessor,
                should_include,
            } => {
                predecessor.emit(&mut |element, index| {
                    if should_include(&element) {
                        visit(element, index);
                    }
                });
            }
        }
    }

    /// The chain's element count when it is known without running any
    /// stored function.
    ///
    /// `None` as soon as a filter stage is in the chain. Used by `to_vec`
    /// to pre-reserve capacity; sizing never runs predicates.
    fn length_hint(&self) -> Option<usize> {
        match self.node.as_ref() {
            Node::Base(elements) => Some(elements.len()),
            Node::Map(stage) => stage.length_hint(),
            Node::Filter { .. } => None,
        }
    }
}

// =============================================================================
// Stage Builders
// =============================================================================

impl<T: Clone + 'static> LazySequence<T> {
    /// Returns a sequence that applies `transform` to every element.
    ///
    /// The transform is not invoked here. During each terminal operation
    /// it receives every element together with that element's index in
    /// the base collection's emission order. Indices are never
    /// renumbered: downstream of a `filter`, the surviving indices keep
    /// their gaps.
    ///
    /// The receiver is unaffected and remains usable as the predecessor
    /// of further chains.
    ///
    /// # Arguments
    ///
    /// * `transform` - Pure function from `(element, index)` to the new element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let sequence = LazySequence::from_vec(vec![1, 2, 3]);
    /// let doubled = sequence.map(|element, _index| element * 2);
    ///
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    ///
    /// Indices pass through filtering unchanged:
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let indices = LazySequence::from_vec(vec![10, 20, 30])
    ///     .filter(|element| *element != 20)
    ///     .map(|_element, index| index);
    ///
    /// assert_eq!(indices.to_vec(), vec![0, 2]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, transform: F) -> LazySequence<U>
    where
        U: 'static,
        F: Fn(T, usize) -> U + 'static,
    {
        LazySequence::from_node(Node::Map(Box::new(MapStage {
            predecessor: self.clone(),
            transform,
        })))
    }
}

impl<T: 'static> LazySequence<T> {
    /// Returns a sequence that keeps only elements satisfying
    /// `should_include`.
    ///
    /// The predicate is not invoked here. It runs once per candidate
    /// element during each terminal operation, so it should be pure;
    /// `len` in particular re-runs it on every call.
    ///
    /// The receiver is unaffected and remains usable as the predecessor
    /// of further chains.
    ///
    /// # Arguments
    ///
    /// * `should_include` - Pure predicate deciding which elements pass
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let sequence = LazySequence::from_vec(vec![1, 2, 3, 4]);
    /// let odd = sequence.filter(|element| element % 2 == 1);
    ///
    /// assert_eq!(odd.to_vec(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, should_include: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::from_node(Node::Filter {
            predecessor: self.clone(),
            should_include: Box::new(should_include),
        })
    }
}

/// Internal structure for an erased map stage.
///
/// Captures the predecessor chain and the transform to apply to each
/// element the predecessor emits. `S` is the predecessor's element type,
/// invisible to the `Node` holding the stage.
struct MapStage<S, F> {
    predecessor: LazySequence<S>,
    transform: F,
}

impl<S: Clone + 'static, T: 'static, F> MapLink<T> for MapStage<S, F>
where
    F: Fn(S, usize) -> T + 'static,
{
    fn length(&self) -> usize {
        self.predecessor.len()
    }

    fn length_hint(&self) -> Option<usize> {
        self.predecessor.length_hint()
    }

    fn emit(&self, visit: &mut dyn FnMut(T, usize)) {
        self.predecessor.emit(&mut |element, index| {
            visit((self.transform)(element, index), index);
        });
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for LazySequence<T> {
    /// Returns a new handle to the same chain node.
    ///
    /// This is a reference-count increment; the chain itself is never
    /// copied. Implemented by hand so handles stay cloneable for
    /// non-`Clone` element types.
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T> Default for LazySequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let sequence: LazySequence<i32> = LazySequence::default();
    /// assert!(sequence.is_empty());
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.as_ref() {
            Node::Base(elements) => formatter
                .debug_tuple("LazySequence")
                .field(elements)
                .finish(),
            Node::Map(_) => formatter
                .debug_tuple("LazySequence")
                .field(&"<map stage>")
                .finish(),
            Node::Filter { .. } => formatter
                .debug_tuple("LazySequence")
                .field(&"<filter stage>")
                .finish(),
        }
    }
}

impl<T> From<Vec<T>> for LazySequence<T> {
    /// Wraps a vector as a base sequence, taking ownership of it.
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Clone> From<&[T]> for LazySequence<T> {
    /// Copies a slice into a new base sequence.
    #[inline]
    fn from(elements: &[T]) -> Self {
        Self::from_slice(elements)
    }
}

impl<T> FromIterator<T> for LazySequence<T> {
    /// Collects an iterator into a base sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::LazySequence;
    ///
    /// let sequence: LazySequence<i32> = (1..=3).collect();
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_vec(iterable.into_iter().collect())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize + Clone> serde::Serialize for LazySequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        // Serialization is a terminal operation: the chain runs once.
        let elements = self.to_vec();
        let mut seq = serializer.serialize_seq(Some(elements.len()))?;
        for element in &elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct LazySequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> LazySequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LazySequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = LazySequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(LazySequence::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LazySequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LazySequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
