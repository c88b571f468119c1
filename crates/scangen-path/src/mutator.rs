//! Order-preserving per-point transformations.
//!
//! Mutators run against the flattened compound sequence after region
//! filtering and index assignment. They must preserve emission count and
//! ordering; they may adjust coordinate values or inject axes.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use scangen_core::Point;
use serde::{Deserialize, Serialize};

/// An order-preserving transformation applied to each emitted point.
///
/// Implementations must be pure functions of the incoming point (plus
/// their own immutable configuration): the engine's replay guarantee —
/// repeated full traversals are identical — extends through every mutator.
pub trait Mutator: Send + Sync {
    /// Short name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Transform one point. Must not depend on prior calls.
    fn mutate(&self, point: Point) -> Point;
}

/// Injects a constant coordinate for an axis the scan does not move.
///
/// Typical use: a compound scan over `x` and `y` whose data files must
/// also record a stationary `z`. The injected axis gets per-axis index 0
/// on every point. Injecting an axis a child already produces overwrites
/// that child's value (last write wins).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedValueMutator {
    /// Axis to inject.
    pub axis_name: String,
    /// Coordinate value for every point.
    pub value: f64,
}

impl Mutator for FixedValueMutator {
    fn name(&self) -> &str {
        "fixed_value"
    }

    fn mutate(&self, mut point: Point) -> Point {
        point.insert_axis(self.axis_name.as_str(), self.value, 0);
        point
    }
}

/// Maximum random offset for one axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisOffset {
    /// Axis to perturb.
    pub axis_name: String,
    /// Offsets are drawn uniformly from `[-max, +max]`.
    pub max: f64,
}

/// Perturbs named axes by a deterministic pseudo-random offset.
///
/// Used to break up the sampling regularity of raster scans. The RNG is
/// seeded per point from `seed XOR overall-index`, so a point's offset
/// depends only on the configuration and its position in the sequence:
/// replay is deterministic, and partial traversals see the same offsets
/// as full ones. Axes the point does not drive are left untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomOffsetMutator {
    /// Base RNG seed.
    pub seed: u64,
    /// Per-axis maximum offsets.
    pub offsets: Vec<AxisOffset>,
}

impl Mutator for RandomOffsetMutator {
    fn name(&self) -> &str {
        "random_offset"
    }

    fn mutate(&self, mut point: Point) -> Point {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ point.index());
        for offset in &self.offsets {
            let delta = (rng.random::<f64>() * 2.0 - 1.0) * offset.max;
            if let Some(value) = point.value(&offset.axis_name) {
                point.set_value(&offset.axis_name, value + delta);
            }
        }
        point
    }
}

/// Helper for tests: collect a generator's full traversal through a
/// mutator chain.
#[cfg(test)]
pub(crate) fn mutated_points(
    gen: &dyn crate::generator::Generator,
    mutators: &[&dyn Mutator],
) -> Vec<Point> {
    gen.iter_points()
        .map(|mut p| {
            for m in mutators {
                p = m.mutate(p);
            }
            p
        })
        .collect()
}
