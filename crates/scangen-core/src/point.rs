//! Scan points: named coordinate tuples with per-axis and overall indices.

use indexmap::IndexMap;
use std::fmt;

/// One axis's position within a [`Point`]: the coordinate value and the
/// index of that coordinate within the axis's own enumeration.
///
/// For a grid scan the fast axis's `index` counts `0..fast_points` in
/// traversal order on every row, even when snake mode reverses the spatial
/// direction — downstream index bookkeeping relies on it staying monotonic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPosition {
    /// Coordinate value. Always finite for points produced by the engine.
    pub value: f64,
    /// 0-based index of this coordinate within its axis's enumeration.
    pub index: u64,
}

/// One position in a scan path.
///
/// A point is an ordered mapping from axis name to [`AxisPosition`], plus a
/// single flattened sequence index. Axis order is significant: outermost
/// axes come first (for a grid, the slow axis precedes the fast axis), and
/// equality compares order as well as content.
///
/// The overall `index` is dense in the emitted stream: region filtering
/// skips points without consuming an index slot, so consumers may treat the
/// index as a strictly increasing 0-based counter.
///
/// # Examples
///
/// ```
/// use scangen_core::Point;
///
/// let p = Point::new(0).with_axis("y", 1.5, 0).with_axis("x", 2.0, 3);
/// assert_eq!(p.value("x"), Some(2.0));
/// assert_eq!(p.axis_index("x"), Some(3));
/// assert_eq!(p.axis_names().collect::<Vec<_>>(), vec!["y", "x"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    index: u64,
    axes: IndexMap<String, AxisPosition>,
}

impl Point {
    /// Create an empty point with the given overall sequence index.
    pub fn new(index: u64) -> Self {
        Self {
            index,
            axes: IndexMap::new(),
        }
    }

    /// Builder-style variant of [`insert_axis`](Self::insert_axis).
    pub fn with_axis(mut self, name: impl Into<String>, value: f64, axis_index: u64) -> Self {
        self.insert_axis(name, value, axis_index);
        self
    }

    /// Insert an axis position, replacing any existing entry for `name`.
    ///
    /// A replaced entry keeps its original position in the axis order.
    pub fn insert_axis(&mut self, name: impl Into<String>, value: f64, axis_index: u64) {
        self.axes.insert(
            name.into(),
            AxisPosition {
                value,
                index: axis_index,
            },
        );
    }

    /// Overwrite the coordinate value for an existing axis, keeping its
    /// per-axis index. Returns `false` if the axis is not present.
    pub fn set_value(&mut self, name: &str, value: f64) -> bool {
        match self.axes.get_mut(name) {
            Some(pos) => {
                pos.value = value;
                true
            }
            None => false,
        }
    }

    /// The flattened overall sequence index.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Reassign the overall sequence index.
    ///
    /// Used by compound iteration, which renumbers points densely after
    /// region filtering.
    pub fn set_index(&mut self, index: u64) {
        self.index = index;
    }

    /// Coordinate value for a named axis.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.axes.get(name).map(|pos| pos.value)
    }

    /// Per-axis enumeration index for a named axis.
    pub fn axis_index(&self, name: &str) -> Option<u64> {
        self.axes.get(name).map(|pos| pos.index)
    }

    /// Axis names in order, outermost first.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    /// Axis name / position pairs in order.
    pub fn axes(&self) -> impl Iterator<Item = (&str, AxisPosition)> {
        self.axes.iter().map(|(name, pos)| (name.as_str(), *pos))
    }

    /// Number of axes this point drives.
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// `true` if the point drives no axes (a static placeholder position).
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Merge the axis maps of several points into one, in iteration order.
    ///
    /// This is the compound-composition merge: an explicit field-by-field
    /// union of the children's coordinate maps. Callers guarantee the axis
    /// names are disjoint; a duplicate name would be overwritten by the
    /// later part, keeping its original position in the order.
    pub fn merged<'a>(index: u64, parts: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut out = Point::new(index);
        for part in parts {
            for (name, pos) in &part.axes {
                out.axes.insert(name.clone(), *pos);
            }
        }
        out
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)?;
        for (name, pos) in &self.axes {
            write!(f, " {}={}[{}]", name, pos.value, pos.index)?;
        }
        Ok(())
    }
}
