//! Explicit caller-supplied positions along a single axis.

use crate::check::require_axis_name;
use crate::generator::{Generator, PointIterator};
use scangen_core::{ArrayModel, Point, ScanModel, ValidationError};

/// Generator for [`ArrayModel`]: emits the model's positions verbatim,
/// in order.
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    model: ArrayModel,
    axes: [String; 1],
}

impl ArrayGenerator {
    /// Validate `model` and build a generator for it.
    ///
    /// Fails if the axis name is empty, the position list is empty, or
    /// any position is not finite.
    pub fn new(model: ArrayModel) -> Result<Self, ValidationError> {
        let as_model = ScanModel::Array(model.clone());
        require_axis_name(&model.axis_name, "axis_name", &as_model)?;
        if model.positions.is_empty() {
            return Err(ValidationError::new(
                "positions",
                "must contain at least one position",
                as_model,
            ));
        }
        if let Some(bad) = model.positions.iter().find(|v| !v.is_finite()) {
            return Err(ValidationError::new(
                "positions",
                format!("every position must be finite, got {bad}"),
                as_model,
            ));
        }
        let axes = [model.axis_name.clone()];
        Ok(Self { model, axes })
    }

    /// The validated model.
    pub fn model(&self) -> &ArrayModel {
        &self.model
    }
}

impl Generator for ArrayGenerator {
    fn label(&self) -> &str {
        "Array"
    }

    fn description(&self) -> &str {
        "Creates points at explicit, caller-supplied positions along one axis."
    }

    fn icon_path(&self) -> &str {
        "icons/scanner--array.png"
    }

    fn axis_names(&self) -> &[String] {
        &self.axes
    }

    fn size(&self) -> u64 {
        self.model.positions.len() as u64
    }

    fn iter_points(&self) -> Box<dyn PointIterator + '_> {
        Box::new(ArrayIterator { gen: self, i: 0 })
    }
}

struct ArrayIterator<'a> {
    gen: &'a ArrayGenerator,
    i: usize,
}

impl Iterator for ArrayIterator<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let value = *self.gen.model.positions.get(self.i)?;
        let i = self.i as u64;
        self.i += 1;
        Some(Point::new(i).with_axis(self.gen.model.axis_name.as_str(), value, i))
    }
}

impl PointIterator for ArrayIterator<'_> {
    fn size(&self) -> Option<u64> {
        Some(self.gen.size())
    }
}
