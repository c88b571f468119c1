//! Benchmark profiles for the scangen point generator engine.
//!
//! Provides pre-built scan configurations shared by the benches:
//!
//! - [`dense_grid`]: an n × n raster grid
//! - [`masked_grid`]: an n × n grid filtered by a centred circle
//! - [`nested_scan`]: grid outer, line inner, three axes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use scangen_core::{BoundingBox, GridModel, LineModel, Region, ScanModel};
use scangen_path::CompoundGenerator;
use scangen_service::PointGeneratorService;

/// An n × n raster grid over the unit square.
pub fn dense_grid(n: u64) -> ScanModel {
    ScanModel::Grid(GridModel {
        fast_axis_name: "x".into(),
        slow_axis_name: "y".into(),
        fast_axis_points: n,
        slow_axis_points: n,
        bounding_box: BoundingBox {
            fast_axis_start: 0.0,
            slow_axis_start: 0.0,
            fast_axis_length: 1.0,
            slow_axis_length: 1.0,
        },
        snake: true,
    })
}

/// An n × n grid masked by a circle inscribed in the unit square,
/// keeping roughly pi/4 of the points.
pub fn masked_grid(n: u64) -> CompoundGenerator {
    let roi = Region::Circle {
        x_axis_name: "x".into(),
        y_axis_name: "y".into(),
        x_centre: 0.5,
        y_centre: 0.5,
        radius: 0.5,
    };
    PointGeneratorService::new()
        .create_scan(&dense_grid(n), vec![roi])
        .expect("benchmark profile is valid")
}

/// Grid outer, line inner: `n * n * depth` points over three axes.
pub fn nested_scan(n: u64, depth: u64) -> CompoundGenerator {
    let line = ScanModel::Line(LineModel {
        axis_name: "z".into(),
        start: 0.0,
        stop: 1.0,
        points: depth,
    });
    PointGeneratorService::new()
        .create_compound(vec![(dense_grid(n), Vec::new()), (line, Vec::new())])
        .expect("benchmark profile is valid")
}
