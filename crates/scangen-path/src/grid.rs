//! Two-axis raster grid, with optional snake (bidirectional) traversal.

use crate::check::{
    linspace, require_axis_name, require_distinct_axes, require_finite, require_positive_count,
};
use crate::generator::{Generator, PointIterator};
use scangen_core::{GridModel, Point, ScanModel, ValidationError};

/// Generator for [`GridModel`]: `slow_axis_points × fast_axis_points`
/// points in row-major order, fast axis varying every point.
///
/// In snake mode the fast-axis coordinate direction reverses on every odd
/// row while the fast-axis *logical* index still counts `0..fast_points`
/// in traversal order, so downstream index bookkeeping stays monotonic.
///
/// # Examples
///
/// ```
/// use scangen_core::{BoundingBox, GridModel};
/// use scangen_path::{Generator, GridGenerator};
///
/// let gen = GridGenerator::new(GridModel {
///     fast_axis_name: "x".into(),
///     slow_axis_name: "y".into(),
///     fast_axis_points: 3,
///     slow_axis_points: 2,
///     bounding_box: BoundingBox {
///         fast_axis_start: 0.0,
///         slow_axis_start: 0.0,
///         fast_axis_length: 2.0,
///         slow_axis_length: 1.0,
///     },
///     snake: false,
/// })
/// .unwrap();
/// assert_eq!(gen.size(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct GridGenerator {
    model: GridModel,
    axes: [String; 2],
    size: u64,
}

impl GridGenerator {
    /// Validate `model` and build a generator for it.
    ///
    /// Fails if an axis name is empty, the axes share a name, a point
    /// count is zero, the grid size overflows `u64`, or a bounding-box
    /// field is not finite.
    pub fn new(model: GridModel) -> Result<Self, ValidationError> {
        let as_model = ScanModel::Grid(model.clone());
        require_axis_name(&model.fast_axis_name, "fast_axis_name", &as_model)?;
        require_axis_name(&model.slow_axis_name, "slow_axis_name", &as_model)?;
        require_distinct_axes(
            &model.fast_axis_name,
            &model.slow_axis_name,
            "slow_axis_name",
            &as_model,
        )?;
        require_positive_count(model.fast_axis_points, "fast_axis_points", &as_model)?;
        require_positive_count(model.slow_axis_points, "slow_axis_points", &as_model)?;
        let bb = &model.bounding_box;
        require_finite(bb.fast_axis_start, "bounding_box.fast_axis_start", &as_model)?;
        require_finite(bb.slow_axis_start, "bounding_box.slow_axis_start", &as_model)?;
        require_finite(bb.fast_axis_length, "bounding_box.fast_axis_length", &as_model)?;
        require_finite(bb.slow_axis_length, "bounding_box.slow_axis_length", &as_model)?;
        let size = model
            .slow_axis_points
            .checked_mul(model.fast_axis_points)
            .ok_or_else(|| {
                ValidationError::new(
                    "fast_axis_points",
                    "slow_axis_points × fast_axis_points overflows u64",
                    as_model.clone(),
                )
            })?;
        let axes = [model.slow_axis_name.clone(), model.fast_axis_name.clone()];
        Ok(Self { model, axes, size })
    }

    /// The validated model.
    pub fn model(&self) -> &GridModel {
        &self.model
    }
}

impl Generator for GridGenerator {
    fn label(&self) -> &str {
        "Grid"
    }

    fn description(&self) -> &str {
        "Creates a grid scan over a fast and a slow axis.\n\
         The scan supports bidirectional or 'snake' mode."
    }

    fn icon_path(&self) -> &str {
        "icons/scanner--grid.png"
    }

    fn axis_names(&self) -> &[String] {
        &self.axes
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn iter_points(&self) -> Box<dyn PointIterator + '_> {
        Box::new(GridIterator { gen: self, i: 0 })
    }
}

struct GridIterator<'a> {
    gen: &'a GridGenerator,
    i: u64,
}

impl Iterator for GridIterator<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.i >= self.gen.size {
            return None;
        }
        let i = self.i;
        self.i += 1;

        let m = &self.gen.model;
        let row = i / m.fast_axis_points;
        let col = i % m.fast_axis_points;
        // Snake rows visit columns in reverse spatial order; the logical
        // fast-axis index stays `col` (traversal order).
        let spatial_col = if m.snake && row % 2 == 1 {
            m.fast_axis_points - 1 - col
        } else {
            col
        };

        let bb = &m.bounding_box;
        let fast_value = linspace(
            bb.fast_axis_start,
            bb.fast_axis_start + bb.fast_axis_length,
            m.fast_axis_points,
            spatial_col,
        );
        let slow_value = linspace(
            bb.slow_axis_start,
            bb.slow_axis_start + bb.slow_axis_length,
            m.slow_axis_points,
            row,
        );

        Some(
            Point::new(i)
                .with_axis(m.slow_axis_name.as_str(), slow_value, row)
                .with_axis(m.fast_axis_name.as_str(), fast_value, col),
        )
    }
}

impl PointIterator for GridIterator<'_> {
    fn size(&self) -> Option<u64> {
        Some(self.gen.size)
    }
}
