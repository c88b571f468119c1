//! The core `Generator` and `PointIterator` traits, with `dyn Generator`
//! downcast support.

use scangen_core::Point;
use std::any::Any;
use std::fmt::Debug;

/// A lazy, forward-only, finite sequence of scan points.
///
/// Implementations are cursors over arithmetic, not collections: pulling
/// the next point is in-memory computation that returns immediately, and
/// nothing materializes the full sequence. A single iterator is a stateful
/// cursor and is not safe for concurrent consumption — concurrent scans
/// each obtain their own iterator from the owning generator.
///
/// Exhaustion is signalled by `None` from [`Iterator::next`]; there is no
/// cancellation primitive — a consumer simply stops pulling and drops the
/// iterator.
pub trait PointIterator: Iterator<Item = Point> {
    /// Total number of points a full traversal of this sequence emits,
    /// when statically computable without materializing it.
    ///
    /// Returns `None` when region filtering makes the count unknowable up
    /// front; the sequence is still finite and must be driven to
    /// exhaustion.
    fn size(&self) -> Option<u64>;
}

/// A validated scan-path model that produces point iterators.
///
/// A generator owns exactly one model that was validated at construction:
/// concrete backends expose `new(model) -> Result<Self, ValidationError>`,
/// so an iterator can never be obtained from an unvalidated or invalid
/// model. Generators are reusable — every [`iter_points`](Self::iter_points)
/// call starts a fresh traversal from the beginning, and for a fixed model
/// repeated full traversals are identical.
///
/// # Thread Safety
///
/// `Send + Sync` is required because a generator holds only immutable
/// model data and acts as an iterator factory; sharing one read-only
/// across threads is safe. The iterators it hands out are not.
///
/// # Object Safety
///
/// Designed for use as `dyn Generator`; use `downcast_ref` for opt-in
/// access to a concrete backend.
pub trait Generator: Any + Send + Sync + Debug {
    /// Short display name, for UI only.
    fn label(&self) -> &str;

    /// Longer human-readable description, for UI only.
    fn description(&self) -> &str;

    /// Path to a display icon, for UI only.
    fn icon_path(&self) -> &str;

    /// The axis names this generator drives, outermost first. Empty for
    /// axis-less backends.
    fn axis_names(&self) -> &[String];

    /// Number of points one full traversal emits.
    ///
    /// Always known for a single backend; only compound scans with regions
    /// have unknown sizes.
    fn size(&self) -> u64;

    /// Start a fresh traversal from the beginning.
    fn iter_points(&self) -> Box<dyn PointIterator + '_>;
}

impl dyn Generator {
    /// Attempt to downcast a trait object to a concrete generator type.
    pub fn downcast_ref<T: Generator>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
