//! Axis-less placeholder positions.

use crate::generator::{Generator, PointIterator};
use scangen_core::{Point, ScanModel, StaticModel, ValidationError};

/// Generator for [`StaticModel`]: `points` positions that drive no axes.
///
/// Composed as the outermost child of a compound scan this repeats the
/// inner scans without moving anything; as the innermost child it takes
/// repeated exposures at each outer position.
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    model: StaticModel,
}

impl StaticGenerator {
    /// Validate `model` and build a generator for it.
    ///
    /// Fails if the point count is zero.
    pub fn new(model: StaticModel) -> Result<Self, ValidationError> {
        if model.points == 0 {
            return Err(ValidationError::new(
                "points",
                "must be a positive number of points",
                ScanModel::Static(model.clone()),
            ));
        }
        Ok(Self { model })
    }

    /// The validated model.
    pub fn model(&self) -> &StaticModel {
        &self.model
    }
}

impl Generator for StaticGenerator {
    fn label(&self) -> &str {
        "Static"
    }

    fn description(&self) -> &str {
        "Creates a fixed number of placeholder points that move no axes."
    }

    fn icon_path(&self) -> &str {
        "icons/scanner--static.png"
    }

    fn axis_names(&self) -> &[String] {
        &[]
    }

    fn size(&self) -> u64 {
        self.model.points
    }

    fn iter_points(&self) -> Box<dyn PointIterator + '_> {
        Box::new(StaticIterator {
            points: self.model.points,
            i: 0,
        })
    }
}

struct StaticIterator {
    points: u64,
    i: u64,
}

impl Iterator for StaticIterator {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.i >= self.points {
            return None;
        }
        let i = self.i;
        self.i += 1;
        Some(Point::new(i))
    }
}

impl PointIterator for StaticIterator {
    fn size(&self) -> Option<u64> {
        Some(self.points)
    }
}
