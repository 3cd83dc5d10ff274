//! Property-based tests for lazy sequence chains.
//!
//! These tests verify the equivalence laws between lazy chains and their
//! eager counterparts: wrapping, mapping, filtering, and arbitrary
//! compositions of both must always materialize to what the same
//! operations produce eagerly.

use lazyseq::sequence::{LazySequence, lazy};
use proptest::prelude::*;

// =============================================================================
// Step vocabulary for generated pipelines
// =============================================================================

/// One step of a transformation pipeline, drawn from a small vocabulary
/// of pure operations so the lazy and eager applications can be compared
/// exactly. Arithmetic wraps to keep every step total.
#[derive(Debug, Clone, Copy)]
enum ChainStep {
    Add(i64),
    Scale(i64),
    KeepAbove(i64),
    KeepEven,
}

/// Applies the steps lazily, stacking one stage per step onto `base`.
fn apply_lazy(base: &LazySequence<i64>, steps: &[ChainStep]) -> LazySequence<i64> {
    let mut current = base.clone();
    for step in steps {
        current = match *step {
            ChainStep::Add(amount) => {
                current.map(move |element, _index| element.wrapping_add(amount))
            }
            ChainStep::Scale(factor) => {
                current.map(move |element, _index| element.wrapping_mul(factor))
            }
            ChainStep::KeepAbove(threshold) => current.filter(move |&element| element > threshold),
            ChainStep::KeepEven => current.filter(|element| element % 2 == 0),
        };
    }
    current
}

/// Applies the steps eagerly, materializing one vector per step.
fn apply_eager(collection: &[i64], steps: &[ChainStep]) -> Vec<i64> {
    let mut current = collection.to_vec();
    for step in steps {
        current = match *step {
            ChainStep::Add(amount) => current
                .into_iter()
                .map(|element| element.wrapping_add(amount))
                .collect(),
            ChainStep::Scale(factor) => current
                .into_iter()
                .map(|element| element.wrapping_mul(factor))
                .collect(),
            ChainStep::KeepAbove(threshold) => current
                .into_iter()
                .filter(|&element| element > threshold)
                .collect(),
            ChainStep::KeepEven => current
                .into_iter()
                .filter(|element| element % 2 == 0)
                .collect(),
        };
    }
    current
}

// =============================================================================
// Strategies
// =============================================================================

/// Generates a base collection with up to 64 elements.
fn base_collection() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..64)
}

/// Generates one pipeline step.
fn chain_step() -> impl Strategy<Value = ChainStep> {
    prop_oneof![
        any::<i64>().prop_map(ChainStep::Add),
        any::<i64>().prop_map(ChainStep::Scale),
        any::<i64>().prop_map(ChainStep::KeepAbove),
        Just(ChainStep::KeepEven),
    ]
}

/// Generates a pipeline of up to 8 chained steps.
fn chain() -> impl Strategy<Value = Vec<ChainStep>> {
    prop::collection::vec(chain_step(), 0..8)
}

proptest! {
    // =========================================================================
    // Identity Law
    // =========================================================================

    #[test]
    fn prop_wrapping_preserves_the_collection(collection in base_collection()) {
        let sequence = lazy(collection.clone());
        prop_assert_eq!(sequence.to_vec(), collection);
    }

    #[test]
    fn prop_wrapping_preserves_length(collection in base_collection()) {
        let sequence = lazy(collection.clone());
        prop_assert_eq!(sequence.len(), collection.len());
    }

    // =========================================================================
    // Single-Stage Equivalence Laws
    // =========================================================================

    #[test]
    fn prop_map_matches_eager_map(collection in base_collection(), amount: i64) {
        let lazy_result = lazy(collection.clone())
            .map(move |element, _index| element.wrapping_add(amount))
            .to_vec();
        let eager_result: Vec<i64> = collection
            .into_iter()
            .map(|element| element.wrapping_add(amount))
            .collect();
        prop_assert_eq!(lazy_result, eager_result);
    }

    #[test]
    fn prop_filter_matches_eager_filter(collection in base_collection(), threshold: i64) {
        let lazy_result = lazy(collection.clone())
            .filter(move |&element| element > threshold)
            .to_vec();
        let eager_result: Vec<i64> = collection
            .into_iter()
            .filter(|&element| element > threshold)
            .collect();
        prop_assert_eq!(lazy_result, eager_result);
    }

    // =========================================================================
    // Composition Equivalence
    // =========================================================================

    #[test]
    fn prop_arbitrary_chains_match_eager_pipelines(
        collection in base_collection(),
        steps in chain(),
    ) {
        let sequence = apply_lazy(&lazy(collection.clone()), &steps);
        prop_assert_eq!(sequence.to_vec(), apply_eager(&collection, &steps));
    }

    #[test]
    fn prop_stage_stacking_matches_one_shot_application(
        collection in base_collection(),
        first in chain(),
        second in chain(),
    ) {
        // Splitting a pipeline into two chained halves changes nothing.
        let halves = apply_lazy(&apply_lazy(&lazy(collection.clone()), &first), &second);
        let mut combined = first.clone();
        combined.extend_from_slice(&second);
        let one_shot = apply_lazy(&lazy(collection), &combined);
        prop_assert_eq!(halves.to_vec(), one_shot.to_vec());
    }

    // =========================================================================
    // Length Consistency
    // =========================================================================

    #[test]
    fn prop_length_matches_materialized_length(
        collection in base_collection(),
        steps in chain(),
    ) {
        let sequence = apply_lazy(&lazy(collection), &steps);
        prop_assert_eq!(sequence.len(), sequence.to_vec().len());
    }

    // =========================================================================
    // Iteration Completeness
    // =========================================================================

    #[test]
    fn prop_for_each_agrees_with_to_vec(
        collection in base_collection(),
        steps in chain(),
    ) {
        let sequence = apply_lazy(&lazy(collection), &steps);
        let mut visited = Vec::new();
        sequence.for_each(|element, _index| visited.push(element));
        prop_assert_eq!(visited, sequence.to_vec());
    }

    // =========================================================================
    // Idempotence
    // =========================================================================

    #[test]
    fn prop_materialization_is_idempotent(
        collection in base_collection(),
        steps in chain(),
    ) {
        let sequence = apply_lazy(&lazy(collection), &steps);
        prop_assert_eq!(sequence.to_vec(), sequence.to_vec());
    }

    // =========================================================================
    // Branching Independence
    // =========================================================================

    #[test]
    fn prop_branching_does_not_disturb_the_predecessor(
        collection in base_collection(),
        first_steps in chain(),
        second_steps in chain(),
    ) {
        let base = lazy(collection.clone());
        let before = base.to_vec();

        let first = apply_lazy(&base, &first_steps);
        let second = apply_lazy(&base, &second_steps);

        prop_assert_eq!(first.to_vec(), apply_eager(&collection, &first_steps));
        prop_assert_eq!(second.to_vec(), apply_eager(&collection, &second_steps));
        prop_assert_eq!(base.to_vec(), before);
    }
}
