//! Declarative scan-path models.
//!
//! A model is the plain value data describing one axis-generator's
//! parameters: axis names, counts, bounds, flags. Models carry no behavior
//! beyond accessors and field equality, so they can cross a process or
//! transport boundary unchanged. Validation lives with the generators that
//! consume them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Rectangular extent driven by a two-axis model.
///
/// Lengths are signed: a negative length scans the axis in the descending
/// direction. Positions are spaced inclusively over the extent, so a
/// 3-point axis starting at 0 with length 2 visits 0, 1, 2.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Fast-axis coordinate of the first column.
    pub fast_axis_start: f64,
    /// Slow-axis coordinate of the first row.
    pub slow_axis_start: f64,
    /// Signed fast-axis extent, end minus start.
    pub fast_axis_length: f64,
    /// Signed slow-axis extent, end minus start.
    pub slow_axis_length: f64,
}

/// Evenly spaced positions along a single axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineModel {
    /// Motor name for the scanned axis.
    pub axis_name: String,
    /// First position, always included.
    pub start: f64,
    /// Last position, included whenever `points > 1`.
    pub stop: f64,
    /// Number of positions. A single-point line sits at `start`.
    pub points: u64,
}

/// Explicit, caller-supplied positions along a single axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayModel {
    /// Motor name for the scanned axis.
    pub axis_name: String,
    /// Positions emitted verbatim, in order.
    pub positions: Vec<f64>,
}

/// A two-axis raster grid, optionally with snake (bidirectional) traversal.
///
/// The fast axis varies every point; the slow axis varies every
/// `fast_axis_points` points. In snake mode the fast-axis *coordinate*
/// direction reverses on every other row while its logical index still
/// counts upward in traversal order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridModel {
    /// Motor name for the fast (inner) axis.
    pub fast_axis_name: String,
    /// Motor name for the slow (outer) axis.
    pub slow_axis_name: String,
    /// Number of columns along the fast axis.
    pub fast_axis_points: u64,
    /// Number of rows along the slow axis.
    pub slow_axis_points: u64,
    /// Spatial extent of the grid.
    pub bounding_box: BoundingBox,
    /// Reverse the fast-axis direction on odd rows.
    pub snake: bool,
}

/// An outward Archimedean spiral around a centre point.
///
/// Step `i` sits at angle `phi = sqrt(4*pi) * sqrt(i + 0.5)` and radius
/// `(scale / (2*pi)) * phi`, so `scale` is approximately the radial
/// distance between successive spiral arms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpiralModel {
    /// Motor name for the fast axis (the sine component).
    pub fast_axis_name: String,
    /// Motor name for the slow axis (the cosine component).
    pub slow_axis_name: String,
    /// Fast-axis coordinate of the spiral centre.
    pub fast_axis_centre: f64,
    /// Slow-axis coordinate of the spiral centre.
    pub slow_axis_centre: f64,
    /// Approximate radial distance between successive arms. Must be positive.
    pub scale: f64,
    /// Explicit number of steps. Required when `radius` is absent.
    pub points: Option<u64>,
    /// Bounding radius: emit however many steps fit inside it. Takes
    /// precedence over `points` when both are given. A radius too small
    /// for even the first step yields a valid empty sequence.
    pub radius: Option<f64>,
}

/// A two-axis Lissajous curve inside a width × height window.
///
/// Step `i` sits at `theta = 2*pi * i / points` with frequencies
/// `a = lobes` on the fast axis and `b = lobes + 1` on the slow axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LissajousModel {
    /// Motor name for the fast axis.
    pub fast_axis_name: String,
    /// Motor name for the slow axis.
    pub slow_axis_name: String,
    /// Fast-axis coordinate of the window centre.
    pub fast_axis_centre: f64,
    /// Slow-axis coordinate of the window centre.
    pub slow_axis_centre: f64,
    /// Full fast-axis extent of the window. Must be positive.
    pub width: f64,
    /// Full slow-axis extent of the window. Must be positive.
    pub height: f64,
    /// Number of lobes; the fast-axis frequency. Must be at least 1.
    pub lobes: u32,
    /// Number of positions along the curve.
    pub points: u64,
}

/// A fixed number of axis-less placeholder positions.
///
/// Composed into a compound scan, a static model repeats its inner scans
/// without moving anything — useful for exposure repeats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticModel {
    /// Number of placeholder positions.
    pub points: u64,
}

/// A scan-path model: one variant per supported path shape.
///
/// This is a closed set of tagged variants dispatched through the service
/// registry by [`kind()`](ScanModel::kind); new shapes are added by
/// registering a builder for a new tag rather than by subclassing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScanModel {
    /// Evenly spaced single-axis positions.
    Line(LineModel),
    /// Explicit single-axis positions.
    Array(ArrayModel),
    /// Two-axis raster grid.
    Grid(GridModel),
    /// Archimedean spiral.
    Spiral(SpiralModel),
    /// Lissajous curve.
    Lissajous(LissajousModel),
    /// Axis-less placeholder positions.
    Static(StaticModel),
}

impl ScanModel {
    /// Stable snake_case tag identifying the shape, used as the registry
    /// key and as the serialized `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Array(_) => "array",
            Self::Grid(_) => "grid",
            Self::Spiral(_) => "spiral",
            Self::Lissajous(_) => "lissajous",
            Self::Static(_) => "static",
        }
    }

    /// The axis names this model drives, outermost first. Empty for
    /// axis-less models.
    pub fn axis_names(&self) -> SmallVec<[&str; 2]> {
        match self {
            Self::Line(m) => SmallVec::from_slice(&[m.axis_name.as_str()]),
            Self::Array(m) => SmallVec::from_slice(&[m.axis_name.as_str()]),
            Self::Grid(m) => {
                SmallVec::from_slice(&[m.slow_axis_name.as_str(), m.fast_axis_name.as_str()])
            }
            Self::Spiral(m) => {
                SmallVec::from_slice(&[m.slow_axis_name.as_str(), m.fast_axis_name.as_str()])
            }
            Self::Lissajous(m) => {
                SmallVec::from_slice(&[m.slow_axis_name.as_str(), m.fast_axis_name.as_str()])
            }
            Self::Static(_) => SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> ScanModel {
        ScanModel::Grid(GridModel {
            fast_axis_name: "x".into(),
            slow_axis_name: "y".into(),
            fast_axis_points: 3,
            slow_axis_points: 2,
            bounding_box: BoundingBox {
                fast_axis_start: 0.0,
                slow_axis_start: 0.0,
                fast_axis_length: 2.0,
                slow_axis_length: 1.0,
            },
            snake: false,
        })
    }

    #[test]
    fn kind_tags_are_stable() {
        assert_eq!(grid().kind(), "grid");
        assert_eq!(ScanModel::Static(StaticModel { points: 2 }).kind(), "static");
    }

    #[test]
    fn axis_names_outermost_first() {
        assert_eq!(grid().axis_names().as_slice(), &["y", "x"]);
        assert!(ScanModel::Static(StaticModel { points: 1 })
            .axis_names()
            .is_empty());
    }

    #[test]
    fn equality_is_field_equality() {
        assert_eq!(grid(), grid());
        let other = ScanModel::Line(LineModel {
            axis_name: "x".into(),
            start: 0.0,
            stop: 1.0,
            points: 2,
        });
        assert_ne!(grid(), other);
    }

    // ── Serde round trips (transport boundary contract) ─────────

    #[test]
    fn grid_round_trips_through_json() {
        let model = grid();
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"type\":\"grid\""));
        let back: ScanModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn spiral_round_trips_with_optional_fields() {
        let model = ScanModel::Spiral(SpiralModel {
            fast_axis_name: "x".into(),
            slow_axis_name: "y".into(),
            fast_axis_centre: 1.0,
            slow_axis_centre: -1.0,
            scale: 0.5,
            points: None,
            radius: Some(3.0),
        });
        let json = serde_json::to_string(&model).unwrap();
        let back: ScanModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
