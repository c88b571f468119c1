//! Generator contract compliance test helpers.
//!
//! These functions verify that a generator backend satisfies the
//! invariants required by the [`Generator`] contract. Reused across all
//! backend test modules (line, array, grid, spiral, lissajous, static).

use crate::generator::Generator;
use indexmap::IndexSet;
use scangen_core::Point;

/// Assert that `size()` equals the number of points a traversal emits,
/// and that the iterator reports the same size up front.
pub(crate) fn assert_size_matches_iteration(gen: &dyn Generator) {
    let iter = gen.iter_points();
    assert_eq!(
        iter.size(),
        Some(gen.size()),
        "iterator size disagrees with generator size"
    );
    let count = iter.count() as u64;
    assert_eq!(
        count,
        gen.size(),
        "traversal emitted {count} points, size() promised {}",
        gen.size()
    );
}

/// Assert that overall indices are dense: `0, 1, 2, ...` in emission order.
pub(crate) fn assert_overall_indices_dense(gen: &dyn Generator) {
    for (k, point) in gen.iter_points().enumerate() {
        assert_eq!(
            point.index(),
            k as u64,
            "overall index must increase by one per emitted point"
        );
    }
}

/// Assert that every point drives exactly the generator's declared axes,
/// in declaration order.
pub(crate) fn assert_axes_match_declaration(gen: &dyn Generator) {
    let declared: Vec<&str> = gen.axis_names().iter().map(String::as_str).collect();
    for point in gen.iter_points() {
        let actual: Vec<&str> = point.axis_names().collect();
        assert_eq!(
            actual, declared,
            "point axes must match the generator's declared axes"
        );
    }
}

/// Assert that every coordinate value is finite.
pub(crate) fn assert_values_finite(gen: &dyn Generator) {
    for point in gen.iter_points() {
        for (name, pos) in point.axes() {
            assert!(
                pos.value.is_finite(),
                "axis '{name}' produced non-finite value {} at point {}",
                pos.value,
                point.index()
            );
        }
    }
}

/// Assert that two full traversals from fresh iterators are identical.
pub(crate) fn assert_replay_deterministic(gen: &dyn Generator) {
    let a: Vec<Point> = gen.iter_points().collect();
    let b: Vec<Point> = gen.iter_points().collect();
    assert_eq!(a, b, "repeated traversals must be identical");
}

/// Assert that concurrently live iterators do not disturb each other.
pub(crate) fn assert_fresh_iterators_independent(gen: &dyn Generator) {
    let mut first = gen.iter_points();
    let head = first.next();
    // Starting a second traversal must not affect the first.
    let replay: Vec<Point> = gen.iter_points().collect();
    let mut rest: Vec<Point> = Vec::new();
    if let Some(p) = head {
        rest.push(p);
    }
    rest.extend(first);
    assert_eq!(rest, replay, "iterators must hold independent cursors");
}

/// Assert that axis coordinate/index pairs repeat consistently: the same
/// per-axis index always maps to the same coordinate value on that axis.
pub(crate) fn assert_axis_indices_consistent(gen: &dyn Generator) {
    for axis in gen.axis_names() {
        let mut seen: IndexSet<(u64, u64)> = IndexSet::new();
        for point in gen.iter_points() {
            let index = point.axis_index(axis).expect("declared axis present");
            let value = point.value(axis).expect("declared axis present");
            seen.insert((index, value.to_bits()));
        }
        let mut indices: Vec<u64> = seen.iter().map(|&(i, _)| i).collect();
        indices.sort_unstable();
        indices.dedup();
        // Snake grids map one fast-axis index to two coordinates, so an
        // index may carry at most two distinct values.
        for index in indices {
            let values = seen.iter().filter(|&&(i, _)| i == index).count();
            assert!(
                values <= 2,
                "axis '{axis}' index {index} maps to {values} distinct coordinates"
            );
        }
    }
}

/// Run all compliance checks on a generator.
pub(crate) fn run_full_compliance(gen: &dyn Generator) {
    assert_size_matches_iteration(gen);
    assert_overall_indices_dense(gen);
    assert_axes_match_declaration(gen);
    assert_values_finite(gen);
    assert_replay_deterministic(gen);
    assert_fresh_iterators_independent(gen);
    assert_axis_indices_consistent(gen);
}
