//! End-to-end scan scenarios driven through the service, the way
//! orchestration code uses the engine.

use scangen_core::{
    BoundingBox, CompositionError, GridModel, LineModel, Point, Region, ScanModel,
};
use scangen_service::{BuildError, PointGeneratorService};

fn grid(snake: bool) -> GridModel {
    GridModel {
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
        snake,
    }
}

fn grid_model(snake: bool) -> ScanModel {
    ScanModel::Grid(grid(snake))
}

fn line_model(axis: &str, points: u64) -> ScanModel {
    ScanModel::Line(LineModel {
        axis_name: axis.into(),
        start: 0.0,
        stop: (points - 1) as f64,
        points,
    })
}

fn coords(points: &[Point]) -> Vec<(f64, f64)> {
    points
        .iter()
        .map(|p| (p.value("x").unwrap(), p.value("y").unwrap()))
        .collect()
}

#[test]
fn raster_grid_emits_six_points_in_order() {
    let service = PointGeneratorService::new();
    let scan = service.create_scan(&grid_model(false), Vec::new()).unwrap();
    let points: Vec<Point> = scan.iter_points().collect();

    assert_eq!(
        coords(&points),
        vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (0.0, 1.0),
            (1.0, 1.0),
            (2.0, 1.0),
        ]
    );
    assert_eq!(
        points.iter().map(Point::index).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4, 5]
    );
}

#[test]
fn snake_grid_reverses_second_row_spatially_only() {
    let service = PointGeneratorService::new();
    let scan = service.create_scan(&grid_model(true), Vec::new()).unwrap();
    let points: Vec<Point> = scan.iter_points().collect();

    assert_eq!(
        coords(&points)[3..],
        [(2.0, 1.0), (1.0, 1.0), (0.0, 1.0)]
    );
    // Logical fast-axis indices still run 0, 1, 2 on the reversed row.
    let fast: Vec<u64> = points[3..]
        .iter()
        .map(|p| p.axis_index("x").unwrap())
        .collect();
    assert_eq!(fast, vec![0, 1, 2]);
}

#[test]
fn zero_fast_axis_points_cites_the_field() {
    let service = PointGeneratorService::new();
    let model = ScanModel::Grid(GridModel {
        fast_axis_points: 0,
        ..grid(false)
    });
    match service.validate(&model) {
        Err(BuildError::Validation(e)) => {
            assert_eq!(e.field, "fast_axis_points");
            assert_eq!(e.model, model);
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn circular_region_drops_points_and_reindexes_densely() {
    let service = PointGeneratorService::new();
    // Radius 1.5 about the origin excludes (2,0) and (2,1).
    let region = Region::Circle {
        x_axis_name: "x".into(),
        y_axis_name: "y".into(),
        x_centre: 0.0,
        y_centre: 0.0,
        radius: 1.5,
    };
    let scan = service.create_scan(&grid_model(false), vec![region]).unwrap();
    assert_eq!(scan.size(), None);

    let points: Vec<Point> = scan.iter_points().collect();
    assert_eq!(points.len(), 4);
    assert_eq!(
        coords(&points),
        vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
    );
    assert_eq!(
        points.iter().map(Point::index).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn compound_of_grid_and_line_nests_disjoint_axes() {
    let service = PointGeneratorService::new();
    let outer = ScanModel::Grid(GridModel {
        fast_axis_points: 2,
        slow_axis_points: 2,
        ..grid(false)
    });
    let scan = service
        .create_compound(vec![(outer, Vec::new()), (line_model("z", 3), Vec::new())])
        .unwrap();
    assert_eq!(scan.size(), Some(12));
    assert_eq!(
        scan.axis_names(),
        &["y".to_string(), "x".to_string(), "z".to_string()]
    );

    let points: Vec<Point> = scan.iter_points().collect();
    assert_eq!(points.len(), 12);
    // The grid holds position while the inner line sweeps.
    assert_eq!(points[0].value("z"), Some(0.0));
    assert_eq!(points[2].value("z"), Some(2.0));
    assert_eq!(points[0].value("x"), points[2].value("x"));
    assert_ne!(points[2].value("x"), points[3].value("x"));
}

#[test]
fn shared_axis_between_children_is_a_composition_error() {
    let service = PointGeneratorService::new();
    let result = service.create_compound(vec![
        (grid_model(false), Vec::new()),
        (line_model("x", 3), Vec::new()),
    ]);
    match result {
        Err(BuildError::Composition(CompositionError::AxisCollision { axis })) => {
            assert_eq!(axis, "x");
        }
        other => panic!("expected AxisCollision, got {other:?}"),
    }
}

#[test]
fn repeated_traversals_are_identical() {
    let service = PointGeneratorService::new();
    let region = Region::Span {
        axis_name: "z".into(),
        min: 0.5,
        max: 2.0,
    };
    let scan = service
        .create_compound(vec![
            (grid_model(true), Vec::new()),
            (line_model("z", 3), vec![region]),
        ])
        .unwrap();
    let first: Vec<Point> = scan.iter_points().collect();
    let second: Vec<Point> = scan.iter_points().collect();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}
