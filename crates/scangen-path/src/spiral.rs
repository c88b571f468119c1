//! Outward Archimedean spiral around a centre point.

use crate::check::{
    require_axis_name, require_distinct_axes, require_finite, require_positive,
    require_positive_count,
};
use crate::generator::{Generator, PointIterator};
use scangen_core::{Point, ScanModel, SpiralModel, ValidationError};

/// Angle scale factor: successive steps advance `phi` by roughly one arm.
const ALPHA: f64 = 3.544_907_701_811_032; // sqrt(4 * pi)

/// Generator for [`SpiralModel`]: step `i` sits at angle
/// `phi = ALPHA * sqrt(i + 0.5)` and radius `beta * phi` with
/// `beta = scale / (2 * pi)`, giving near-constant point density along an
/// outward Archimedean spiral.
///
/// The point count is either the model's explicit `points`, or — when a
/// bounding `radius` is supplied — however many steps fall inside that
/// radius. A radius too small for even the first step yields a valid
/// empty sequence, not an error.
#[derive(Debug, Clone)]
pub struct SpiralGenerator {
    model: SpiralModel,
    axes: [String; 2],
    size: u64,
}

impl SpiralGenerator {
    /// Validate `model` and build a generator for it.
    ///
    /// Fails if an axis name is empty or shared, `scale` is not positive,
    /// a centre coordinate is not finite, a supplied `radius` is not
    /// positive, a supplied `points` is zero, or neither `points` nor
    /// `radius` is given.
    pub fn new(model: SpiralModel) -> Result<Self, ValidationError> {
        let as_model = ScanModel::Spiral(model.clone());
        require_axis_name(&model.fast_axis_name, "fast_axis_name", &as_model)?;
        require_axis_name(&model.slow_axis_name, "slow_axis_name", &as_model)?;
        require_distinct_axes(
            &model.fast_axis_name,
            &model.slow_axis_name,
            "slow_axis_name",
            &as_model,
        )?;
        require_finite(model.fast_axis_centre, "fast_axis_centre", &as_model)?;
        require_finite(model.slow_axis_centre, "slow_axis_centre", &as_model)?;
        require_positive(model.scale, "scale", &as_model)?;

        let size = match (model.radius, model.points) {
            (Some(radius), _) => {
                // Radius bound takes precedence over an explicit count.
                require_positive(radius, "radius", &as_model)?;
                steps_within(radius, model.scale)
            }
            (None, Some(points)) => {
                require_positive_count(points, "points", &as_model)?;
                points
            }
            (None, None) => {
                return Err(ValidationError::new(
                    "points",
                    "either points or radius must be supplied",
                    as_model,
                ));
            }
        };

        let axes = [model.slow_axis_name.clone(), model.fast_axis_name.clone()];
        Ok(Self { model, axes, size })
    }

    /// The validated model.
    pub fn model(&self) -> &SpiralModel {
        &self.model
    }
}

/// Number of spiral steps whose radius `beta * ALPHA * sqrt(i + 0.5)`
/// stays within `radius`.
fn steps_within(radius: f64, scale: f64) -> u64 {
    let beta = scale / (2.0 * std::f64::consts::PI);
    let k = (radius / (ALPHA * beta)).powi(2) - 0.5;
    if k < 0.0 {
        0
    } else {
        k as u64 + 1
    }
}

impl Generator for SpiralGenerator {
    fn label(&self) -> &str {
        "Spiral"
    }

    fn description(&self) -> &str {
        "Creates points along an outward spiral from a centre,\n\
         with density controlled by the scale parameter."
    }

    fn icon_path(&self) -> &str {
        "icons/scanner--spiral.png"
    }

    fn axis_names(&self) -> &[String] {
        &self.axes
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn iter_points(&self) -> Box<dyn PointIterator + '_> {
        Box::new(SpiralIterator { gen: self, i: 0 })
    }
}

struct SpiralIterator<'a> {
    gen: &'a SpiralGenerator,
    i: u64,
}

impl Iterator for SpiralIterator<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.i >= self.gen.size {
            return None;
        }
        let i = self.i;
        self.i += 1;

        let m = &self.gen.model;
        let beta = m.scale / (2.0 * std::f64::consts::PI);
        let phi = ALPHA * ((i as f64) + 0.5).sqrt();
        let r = beta * phi;
        let fast = m.fast_axis_centre + r * phi.sin();
        let slow = m.slow_axis_centre + r * phi.cos();

        Some(
            Point::new(i)
                .with_axis(m.slow_axis_name.as_str(), slow, i)
                .with_axis(m.fast_axis_name.as_str(), fast, i),
        )
    }
}

impl PointIterator for SpiralIterator<'_> {
    fn size(&self) -> Option<u64> {
        Some(self.gen.size)
    }
}
