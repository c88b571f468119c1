//! Compound scans: nested composition of generators, regions, and
//! mutators into one flattened point sequence.

use crate::generator::{Generator, PointIterator};
use crate::mutator::Mutator;
use indexmap::IndexSet;
use scangen_core::{CompositionError, Point, Region};
use std::fmt;

/// One child of a compound scan: a generator plus the regions attached to
/// it.
///
/// Region attachment is positional bookkeeping only — at iteration time
/// every region is evaluated against the fully merged point, so a region
/// may span axes contributed by different children.
pub struct CompoundEntry {
    /// The child generator.
    pub generator: Box<dyn Generator>,
    /// Regions attached at this level.
    pub regions: Vec<Region>,
}

impl CompoundEntry {
    /// An entry with no regions.
    pub fn bare(generator: Box<dyn Generator>) -> Self {
        Self {
            generator,
            regions: Vec::new(),
        }
    }

    /// An entry with regions.
    pub fn with_regions(generator: Box<dyn Generator>, regions: Vec<Region>) -> Self {
        Self { generator, regions }
    }
}

/// An ordered composition of child generators into one flattened,
/// filtered point sequence.
///
/// # Traversal order
///
/// Standard nested order: the first child is outermost, the last child
/// innermost. For each position of child `i`, the product of children
/// `i+1..` is fully exhausted before child `i` advances — the odometer
/// pattern, rightmost digit fastest. Exhausted inner children restart
/// with a fresh iterator from their (reusable) generator.
///
/// # Filtering and indices
///
/// Each raw composite point merges the children's coordinate maps
/// (outermost axes first). Points failing any region are skipped and do
/// not consume an index slot: emitted overall indices are dense, while
/// per-axis indices keep each child's full enumeration.
///
/// # Invariants checked at construction
///
/// - at least one child;
/// - axis names disjoint across children;
/// - every region structurally valid and referencing only produced axes;
/// - the size product fits in `u64`.
///
/// All failures surface as [`CompositionError`] before any point flows.
/// A compound whose regions exclude every point is a valid empty
/// sequence, not an error.
pub struct CompoundGenerator {
    entries: Vec<CompoundEntry>,
    mutators: Vec<Box<dyn Mutator>>,
    axes: Vec<String>,
    size: Option<u64>,
}

impl CompoundGenerator {
    /// Compose `entries` without mutators.
    pub fn new(entries: Vec<CompoundEntry>) -> Result<Self, CompositionError> {
        Self::with_mutators(entries, Vec::new())
    }

    /// Compose `entries`, applying `mutators` in order to each emitted
    /// point.
    pub fn with_mutators(
        entries: Vec<CompoundEntry>,
        mutators: Vec<Box<dyn Mutator>>,
    ) -> Result<Self, CompositionError> {
        if entries.is_empty() {
            return Err(CompositionError::Empty);
        }

        // Axis names must be disjoint across children.
        let mut axes: IndexSet<String> = IndexSet::new();
        for entry in &entries {
            for axis in entry.generator.axis_names() {
                if !axes.insert(axis.clone()) {
                    return Err(CompositionError::AxisCollision { axis: axis.clone() });
                }
            }
        }

        // Regions must be well-formed and reference produced axes only.
        for entry in &entries {
            for region in &entry.regions {
                region
                    .validate()
                    .map_err(|reason| CompositionError::InvalidRegion { reason })?;
                for axis in region.axis_names() {
                    if !axes.contains(axis) {
                        return Err(CompositionError::UnknownRegionAxis {
                            axis: axis.to_string(),
                        });
                    }
                }
            }
        }

        // The flattened size is the child product when nothing filters;
        // with regions attached it is unknown until exhaustion.
        let has_regions = entries.iter().any(|e| !e.regions.is_empty());
        let size = if has_regions {
            None
        } else {
            let mut total: u64 = 1;
            for entry in &entries {
                total = total
                    .checked_mul(entry.generator.size())
                    .ok_or(CompositionError::SizeOverflow)?;
            }
            Some(total)
        };

        Ok(Self {
            entries,
            mutators,
            axes: axes.into_iter().collect(),
            size,
        })
    }

    /// The union of the children's axis names, outermost first.
    pub fn axis_names(&self) -> &[String] {
        &self.axes
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: construction rejects empty compounds.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Total emitted points for a full traversal, when statically
    /// computable: the product of the child sizes with no region
    /// attached, unknown (`None`) otherwise.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Start a fresh traversal from the beginning.
    ///
    /// Iterators are independent: any number may run concurrently over
    /// one shared compound, each seeing the identical sequence.
    pub fn iter_points(&self) -> Box<dyn PointIterator + '_> {
        Box::new(CompoundIterator::new(self))
    }
}

impl fmt::Debug for CompoundGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundGenerator")
            .field("children", &self.entries.len())
            .field("axes", &self.axes)
            .field("mutators", &self.mutators.len())
            .field("size", &self.size)
            .finish()
    }
}

/// Odometer cursor over the children's nested product.
struct CompoundIterator<'a> {
    compound: &'a CompoundGenerator,
    iters: Vec<Box<dyn PointIterator + 'a>>,
    /// Current position of each child; `None` until primed, and the
    /// whole iterator is done once any child turns up empty.
    current: Vec<Point>,
    next_index: u64,
    done: bool,
}

impl<'a> CompoundIterator<'a> {
    fn new(compound: &'a CompoundGenerator) -> Self {
        let mut iters: Vec<Box<dyn PointIterator + 'a>> = Vec::new();
        let mut current = Vec::new();
        let mut done = false;
        for entry in &compound.entries {
            let mut iter = entry.generator.iter_points();
            match iter.next() {
                Some(point) => current.push(point),
                // An empty child empties the whole product.
                None => done = true,
            }
            iters.push(iter);
        }
        Self {
            compound,
            iters,
            current,
            next_index: 0,
            done,
        }
    }

    /// Advance the odometer one step: innermost child first, restarting
    /// exhausted children from a fresh iterator and carrying outward.
    fn advance(&mut self) {
        for i in (0..self.iters.len()).rev() {
            if let Some(point) = self.iters[i].next() {
                self.current[i] = point;
                return;
            }
            let mut fresh = self.compound.entries[i].generator.iter_points();
            match fresh.next() {
                Some(point) => {
                    self.current[i] = point;
                    self.iters[i] = fresh;
                }
                // A generator that was non-empty at start cannot restart
                // empty; terminate defensively rather than panic.
                None => {
                    self.done = true;
                    return;
                }
            }
        }
        // Outermost child carried: the traversal is complete.
        self.done = true;
    }

    fn passes_regions(&self, point: &Point) -> bool {
        self.compound
            .entries
            .iter()
            .flat_map(|entry| entry.regions.iter())
            .all(|region| region.contains(point))
    }
}

impl Iterator for CompoundIterator<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if self.done {
                return None;
            }
            let candidate = Point::merged(0, self.current.iter());
            self.advance();
            if !self.passes_regions(&candidate) {
                continue;
            }
            let mut point = candidate;
            point.set_index(self.next_index);
            self.next_index += 1;
            for mutator in &self.compound.mutators {
                point = mutator.mutate(point);
            }
            return Some(point);
        }
    }
}

impl PointIterator for CompoundIterator<'_> {
    fn size(&self) -> Option<u64> {
        self.compound.size()
    }
}
