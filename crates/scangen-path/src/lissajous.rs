//! Two-axis Lissajous curve inside a width × height window.

use crate::check::{
    require_axis_name, require_distinct_axes, require_finite, require_positive,
    require_positive_count,
};
use crate::generator::{Generator, PointIterator};
use scangen_core::{LissajousModel, Point, ScanModel, ValidationError};

/// Generator for [`LissajousModel`]: step `i` sits at
/// `theta = 2*pi * i / points`, with the fast axis at
/// `centre + (width/2) * sin(lobes * theta)` and the slow axis at
/// `centre + (height/2) * sin((lobes + 1) * theta)`.
///
/// The frequency ratio `lobes : lobes + 1` keeps the curve closed and
/// non-degenerate for every lobe count.
#[derive(Debug, Clone)]
pub struct LissajousGenerator {
    model: LissajousModel,
    axes: [String; 2],
}

impl LissajousGenerator {
    /// Validate `model` and build a generator for it.
    ///
    /// Fails if an axis name is empty or shared, the window extents are
    /// not positive, a centre coordinate is not finite, `lobes` is zero,
    /// or the point count is zero.
    pub fn new(model: LissajousModel) -> Result<Self, ValidationError> {
        let as_model = ScanModel::Lissajous(model.clone());
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
        require_positive(model.width, "width", &as_model)?;
        require_positive(model.height, "height", &as_model)?;
        if model.lobes == 0 {
            return Err(ValidationError::new(
                "lobes",
                "must be at least 1",
                as_model,
            ));
        }
        require_positive_count(model.points, "points", &as_model)?;
        let axes = [model.slow_axis_name.clone(), model.fast_axis_name.clone()];
        Ok(Self { model, axes })
    }

    /// The validated model.
    pub fn model(&self) -> &LissajousModel {
        &self.model
    }
}

impl Generator for LissajousGenerator {
    fn label(&self) -> &str {
        "Lissajous"
    }

    fn description(&self) -> &str {
        "Creates points along a Lissajous curve inside a rectangular window."
    }

    fn icon_path(&self) -> &str {
        "icons/scanner--lissajous.png"
    }

    fn axis_names(&self) -> &[String] {
        &self.axes
    }

    fn size(&self) -> u64 {
        self.model.points
    }

    fn iter_points(&self) -> Box<dyn PointIterator + '_> {
        Box::new(LissajousIterator { gen: self, i: 0 })
    }
}

struct LissajousIterator<'a> {
    gen: &'a LissajousGenerator,
    i: u64,
}

impl Iterator for LissajousIterator<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let m = &self.gen.model;
        if self.i >= m.points {
            return None;
        }
        let i = self.i;
        self.i += 1;

        let theta = 2.0 * std::f64::consts::PI * (i as f64) / (m.points as f64);
        let a = f64::from(m.lobes);
        let b = a + 1.0;
        let fast = m.fast_axis_centre + (m.width / 2.0) * (a * theta).sin();
        let slow = m.slow_axis_centre + (m.height / 2.0) * (b * theta).sin();

        Some(
            Point::new(i)
                .with_axis(m.slow_axis_name.as_str(), slow, i)
                .with_axis(m.fast_axis_name.as_str(), fast, i),
        )
    }
}

impl PointIterator for LissajousIterator<'_> {
    fn size(&self) -> Option<u64> {
        Some(self.gen.model.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn model(lobes: u32, points: u64) -> LissajousModel {
        LissajousModel {
            fast_axis_name: "x".into(),
            slow_axis_name: "y".into(),
            fast_axis_centre: 0.0,
            slow_axis_centre: 0.0,
            width: 2.0,
            height: 2.0,
            lobes,
            points,
        }
    }

    // ── Geometry ────────────────────────────────────────────────

    #[test]
    fn starts_at_window_centre() {
        let gen = LissajousGenerator::new(model(3, 100)).unwrap();
        let first = gen.iter_points().next().unwrap();
        assert_eq!(first.value("x"), Some(0.0));
        assert_eq!(first.value("y"), Some(0.0));
    }

    #[test]
    fn stays_inside_window() {
        let gen = LissajousGenerator::new(LissajousModel {
            fast_axis_centre: 5.0,
            slow_axis_centre: -5.0,
            width: 4.0,
            height: 2.0,
            ..model(2, 500)
        })
        .unwrap();
        for p in gen.iter_points() {
            let x = p.value("x").unwrap();
            let y = p.value("y").unwrap();
            assert!((3.0..=7.0).contains(&x));
            assert!((-6.0..=-4.0).contains(&y));
        }
    }

    #[test]
    fn fast_axis_reaches_window_edge() {
        // With lobes = 1 and points divisible by 4, theta hits pi/2 where
        // sin(theta) = 1, so the fast axis touches centre + width/2.
        let gen = LissajousGenerator::new(model(1, 4)).unwrap();
        let xs: Vec<f64> = gen.iter_points().map(|p| p.value("x").unwrap()).collect();
        assert!(xs.iter().any(|&x| (x - 1.0).abs() < 1e-12));
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn rejects_zero_lobes() {
        let err = LissajousGenerator::new(model(0, 10)).unwrap_err();
        assert_eq!(err.field, "lobes");
    }

    #[test]
    fn rejects_non_positive_window() {
        let err = LissajousGenerator::new(LissajousModel {
            width: 0.0,
            ..model(2, 10)
        })
        .unwrap_err();
        assert_eq!(err.field, "width");
        let err = LissajousGenerator::new(LissajousModel {
            height: -1.0,
            ..model(2, 10)
        })
        .unwrap_err();
        assert_eq!(err.field, "height");
    }

    #[test]
    fn rejects_zero_points() {
        let err = LissajousGenerator::new(model(2, 0)).unwrap_err();
        assert_eq!(err.field, "points");
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_lissajous() {
        let gen = LissajousGenerator::new(model(3, 60)).unwrap();
        compliance::run_full_compliance(&gen);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn size_matches_iteration(lobes in 1u32..6, points in 1u64..200) {
            let gen = LissajousGenerator::new(model(lobes, points)).unwrap();
            prop_assert_eq!(gen.iter_points().count() as u64, gen.size());
        }
    }
}
