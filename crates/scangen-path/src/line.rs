//! Evenly spaced single-axis positions.

use crate::check::{linspace, require_axis_name, require_finite, require_positive_count};
use crate::generator::{Generator, PointIterator};
use scangen_core::{LineModel, Point, ScanModel, ValidationError};

/// Generator for [`LineModel`]: `points` positions spaced evenly across
/// `[start, stop]`, both endpoints included.
///
/// # Examples
///
/// ```
/// use scangen_core::LineModel;
/// use scangen_path::{Generator, LineGenerator};
///
/// let gen = LineGenerator::new(LineModel {
///     axis_name: "stage_x".into(),
///     start: 0.0,
///     stop: 2.0,
///     points: 3,
/// })
/// .unwrap();
///
/// let values: Vec<f64> = gen.iter_points().map(|p| p.value("stage_x").unwrap()).collect();
/// assert_eq!(values, vec![0.0, 1.0, 2.0]);
/// ```
#[derive(Debug, Clone)]
pub struct LineGenerator {
    model: LineModel,
    axes: [String; 1],
}

impl LineGenerator {
    /// Validate `model` and build a generator for it.
    ///
    /// Fails if the axis name is empty, the point count is zero, or a
    /// bound is not finite.
    pub fn new(model: LineModel) -> Result<Self, ValidationError> {
        let as_model = ScanModel::Line(model.clone());
        require_axis_name(&model.axis_name, "axis_name", &as_model)?;
        require_positive_count(model.points, "points", &as_model)?;
        require_finite(model.start, "start", &as_model)?;
        require_finite(model.stop, "stop", &as_model)?;
        let axes = [model.axis_name.clone()];
        Ok(Self { model, axes })
    }

    /// The validated model.
    pub fn model(&self) -> &LineModel {
        &self.model
    }
}

impl Generator for LineGenerator {
    fn label(&self) -> &str {
        "Line"
    }

    fn description(&self) -> &str {
        "Creates evenly spaced points along one axis, including both endpoints."
    }

    fn icon_path(&self) -> &str {
        "icons/scanner--line.png"
    }

    fn axis_names(&self) -> &[String] {
        &self.axes
    }

    fn size(&self) -> u64 {
        self.model.points
    }

    fn iter_points(&self) -> Box<dyn PointIterator + '_> {
        Box::new(LineIterator { gen: self, i: 0 })
    }
}

struct LineIterator<'a> {
    gen: &'a LineGenerator,
    i: u64,
}

impl Iterator for LineIterator<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let m = &self.gen.model;
        if self.i >= m.points {
            return None;
        }
        let i = self.i;
        self.i += 1;
        let value = linspace(m.start, m.stop, m.points, i);
        Some(Point::new(i).with_axis(m.axis_name.as_str(), value, i))
    }
}

impl PointIterator for LineIterator<'_> {
    fn size(&self) -> Option<u64> {
        Some(self.gen.model.points)
    }
}
