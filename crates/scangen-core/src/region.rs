//! Regions of interest: geometric inclusion predicates over named axes.
//!
//! A region masks points out of a scan: a candidate point survives only if
//! every region attached to its scan contains it. Containment is a pure
//! function of the point's coordinate values for the region's bound axes —
//! no side effects and no dependency on iteration order, so filtering is
//! idempotent and order-independent.

use crate::point::Point;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A geometric inclusion predicate bound to one or two named axes.
///
/// Regions are plain value data like the models; the structural checks in
/// [`validate`](Region::validate) run at compound construction, before any
/// point flows. Boundary points count as inside.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Region {
    /// A filled circle.
    Circle {
        /// Axis providing the x coordinate.
        x_axis_name: String,
        /// Axis providing the y coordinate.
        y_axis_name: String,
        /// Centre x coordinate.
        x_centre: f64,
        /// Centre y coordinate.
        y_centre: f64,
        /// Radius. Must be positive.
        radius: f64,
    },
    /// A filled rectangle, optionally rotated about its origin corner.
    Rectangle {
        /// Axis providing the x coordinate.
        x_axis_name: String,
        /// Axis providing the y coordinate.
        y_axis_name: String,
        /// X coordinate of the origin corner.
        x_start: f64,
        /// Y coordinate of the origin corner.
        y_start: f64,
        /// Extent along the rectangle's own x direction. Must be positive.
        width: f64,
        /// Extent along the rectangle's own y direction. Must be positive.
        height: f64,
        /// Counter-clockwise rotation about the origin corner, in radians.
        angle: f64,
    },
    /// A filled simple polygon, tested with the even-odd crossing rule.
    Polygon {
        /// Axis providing the x coordinate.
        x_axis_name: String,
        /// Axis providing the y coordinate.
        y_axis_name: String,
        /// Vertex x coordinates, in order around the boundary.
        x_vertices: Vec<f64>,
        /// Vertex y coordinates, matching `x_vertices` index for index.
        y_vertices: Vec<f64>,
    },
    /// A closed interval on a single axis.
    Span {
        /// Axis the interval constrains.
        axis_name: String,
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound, inclusive.
        max: f64,
    },
}

impl Region {
    /// The axis names this region constrains.
    pub fn axis_names(&self) -> SmallVec<[&str; 2]> {
        match self {
            Self::Circle {
                x_axis_name,
                y_axis_name,
                ..
            }
            | Self::Rectangle {
                x_axis_name,
                y_axis_name,
                ..
            }
            | Self::Polygon {
                x_axis_name,
                y_axis_name,
                ..
            } => SmallVec::from_slice(&[x_axis_name.as_str(), y_axis_name.as_str()]),
            Self::Span { axis_name, .. } => SmallVec::from_slice(&[axis_name.as_str()]),
        }
    }

    /// Check structural invariants: positive extents, finite parameters,
    /// matching vertex lists with at least three vertices, `min < max`.
    ///
    /// Returns a human-readable reason on failure; the compound wraps it
    /// in a composition error.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Circle {
                x_centre,
                y_centre,
                radius,
                ..
            } => {
                if !x_centre.is_finite() || !y_centre.is_finite() {
                    return Err("circle centre must be finite".to_string());
                }
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(format!("circle radius must be positive, got {radius}"));
                }
                Ok(())
            }
            Self::Rectangle {
                x_start,
                y_start,
                width,
                height,
                angle,
                ..
            } => {
                if !x_start.is_finite() || !y_start.is_finite() || !angle.is_finite() {
                    return Err("rectangle origin and angle must be finite".to_string());
                }
                if !width.is_finite() || *width <= 0.0 {
                    return Err(format!("rectangle width must be positive, got {width}"));
                }
                if !height.is_finite() || *height <= 0.0 {
                    return Err(format!("rectangle height must be positive, got {height}"));
                }
                Ok(())
            }
            Self::Polygon {
                x_vertices,
                y_vertices,
                ..
            } => {
                if x_vertices.len() != y_vertices.len() {
                    return Err(format!(
                        "polygon vertex lists differ in length ({} vs {})",
                        x_vertices.len(),
                        y_vertices.len()
                    ));
                }
                if x_vertices.len() < 3 {
                    return Err(format!(
                        "polygon needs at least 3 vertices, got {}",
                        x_vertices.len()
                    ));
                }
                if x_vertices
                    .iter()
                    .chain(y_vertices.iter())
                    .any(|v| !v.is_finite())
                {
                    return Err("polygon vertices must be finite".to_string());
                }
                Ok(())
            }
            Self::Span { min, max, .. } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err("span bounds must be finite".to_string());
                }
                if min >= max {
                    return Err(format!("span min ({min}) must be below max ({max})"));
                }
                Ok(())
            }
        }
    }

    /// Whether `point` falls inside this region.
    ///
    /// Evaluated against the point's coordinates for the bound axes only.
    /// A point missing a bound axis is not contained; compound construction
    /// rejects such configurations before iteration, so this only arises
    /// when a region is evaluated in isolation.
    pub fn contains(&self, point: &Point) -> bool {
        match self {
            Self::Circle {
                x_axis_name,
                y_axis_name,
                x_centre,
                y_centre,
                radius,
            } => {
                let (Some(x), Some(y)) = (point.value(x_axis_name), point.value(y_axis_name))
                else {
                    return false;
                };
                let dx = x - x_centre;
                let dy = y - y_centre;
                dx * dx + dy * dy <= radius * radius
            }
            Self::Rectangle {
                x_axis_name,
                y_axis_name,
                x_start,
                y_start,
                width,
                height,
                angle,
            } => {
                let (Some(x), Some(y)) = (point.value(x_axis_name), point.value(y_axis_name))
                else {
                    return false;
                };
                // Rotate the candidate into the rectangle's own frame.
                let dx = x - x_start;
                let dy = y - y_start;
                let (sin, cos) = angle.sin_cos();
                let u = dx * cos + dy * sin;
                let v = -dx * sin + dy * cos;
                (0.0..=*width).contains(&u) && (0.0..=*height).contains(&v)
            }
            Self::Polygon {
                x_axis_name,
                y_axis_name,
                x_vertices,
                y_vertices,
            } => {
                let (Some(x), Some(y)) = (point.value(x_axis_name), point.value(y_axis_name))
                else {
                    return false;
                };
                point_in_polygon(x, y, x_vertices, y_vertices)
            }
            Self::Span {
                axis_name,
                min,
                max,
            } => match point.value(axis_name) {
                Some(v) => (*min..=*max).contains(&v),
                None => false,
            },
        }
    }
}

/// Even-odd crossing test: cast a ray in +x and count boundary crossings.
fn point_in_polygon(x: f64, y: f64, xs: &[f64], ys: &[f64]) -> bool {
    let n = xs.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (xs[i], ys[i]);
        let (xj, yj) = (xs[j], ys[j]);
        if (yi > y) != (yj > y) {
            let x_cross = (xj - xi) * (y - yi) / (yj - yi) + xi;
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(0).with_axis("x", x, 0).with_axis("y", y, 0)
    }

    // ── Circle ──────────────────────────────────────────────────

    #[test]
    fn circle_contains_interior_and_boundary() {
        let c = Region::Circle {
            x_axis_name: "x".into(),
            y_axis_name: "y".into(),
            x_centre: 1.0,
            y_centre: 1.0,
            radius: 1.0,
        };
        assert!(c.contains(&p(1.0, 1.0)));
        assert!(c.contains(&p(2.0, 1.0))); // on the boundary
        assert!(!c.contains(&p(2.1, 1.0)));
        assert!(!c.contains(&p(0.0, 0.0)));
    }

    #[test]
    fn circle_missing_axis_is_outside() {
        let c = Region::Circle {
            x_axis_name: "x".into(),
            y_axis_name: "missing".into(),
            x_centre: 0.0,
            y_centre: 0.0,
            radius: 10.0,
        };
        assert!(!c.contains(&p(0.0, 0.0)));
    }

    // ── Rectangle ───────────────────────────────────────────────

    #[test]
    fn rectangle_axis_aligned() {
        let r = Region::Rectangle {
            x_axis_name: "x".into(),
            y_axis_name: "y".into(),
            x_start: 0.0,
            y_start: 0.0,
            width: 2.0,
            height: 1.0,
            angle: 0.0,
        };
        assert!(r.contains(&p(0.0, 0.0)));
        assert!(r.contains(&p(2.0, 1.0)));
        assert!(!r.contains(&p(2.5, 0.5)));
        assert!(!r.contains(&p(-0.1, 0.5)));
    }

    #[test]
    fn rectangle_rotated_quarter_turn() {
        // Unit-width rectangle rotated 90 degrees CCW about the origin:
        // occupies x in [-1, 0], y in [0, 2].
        let r = Region::Rectangle {
            x_axis_name: "x".into(),
            y_axis_name: "y".into(),
            x_start: 0.0,
            y_start: 0.0,
            width: 2.0,
            height: 1.0,
            angle: std::f64::consts::FRAC_PI_2,
        };
        assert!(r.contains(&p(-0.5, 1.0)));
        assert!(!r.contains(&p(0.5, 0.5)));
    }

    // ── Polygon ─────────────────────────────────────────────────

    #[test]
    fn polygon_concave_shape() {
        // An L shape: the notch at (1.5, 1.5) is outside.
        let poly = Region::Polygon {
            x_axis_name: "x".into(),
            y_axis_name: "y".into(),
            x_vertices: vec![0.0, 2.0, 2.0, 1.0, 1.0, 0.0],
            y_vertices: vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0],
        };
        assert!(poly.contains(&p(0.5, 0.5)));
        assert!(poly.contains(&p(0.5, 1.5)));
        assert!(!poly.contains(&p(1.5, 1.5)));
        assert!(!poly.contains(&p(3.0, 0.5)));
    }

    // ── Span ────────────────────────────────────────────────────

    #[test]
    fn span_is_inclusive() {
        let s = Region::Span {
            axis_name: "x".into(),
            min: 0.0,
            max: 1.0,
        };
        assert!(s.contains(&p(0.0, 9.9)));
        assert!(s.contains(&p(1.0, 9.9)));
        assert!(!s.contains(&p(1.01, 9.9)));
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn validate_rejects_degenerate_shapes() {
        let zero_radius = Region::Circle {
            x_axis_name: "x".into(),
            y_axis_name: "y".into(),
            x_centre: 0.0,
            y_centre: 0.0,
            radius: 0.0,
        };
        assert!(zero_radius.validate().is_err());

        let two_vertices = Region::Polygon {
            x_axis_name: "x".into(),
            y_axis_name: "y".into(),
            x_vertices: vec![0.0, 1.0],
            y_vertices: vec![0.0, 1.0],
        };
        assert!(two_vertices.validate().is_err());

        let inverted = Region::Span {
            axis_name: "x".into(),
            min: 2.0,
            max: 1.0,
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn validate_accepts_well_formed_shapes() {
        let r = Region::Rectangle {
            x_axis_name: "x".into(),
            y_axis_name: "y".into(),
            x_start: -1.0,
            y_start: -1.0,
            width: 2.0,
            height: 2.0,
            angle: 0.3,
        };
        assert!(r.validate().is_ok());
    }

    // ── Serde round trip ────────────────────────────────────────

    #[test]
    fn region_round_trips_through_json() {
        let r = Region::Span {
            axis_name: "x".into(),
            min: 0.0,
            max: 1.5,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"type\":\"span\""));
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
