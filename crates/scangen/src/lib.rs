//! Scangen: scan-path point generation for instrument data acquisition.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all scangen sub-crates. For most users, adding `scangen` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use scangen::prelude::*;
//!
//! // Describe a 3 x 2 snake grid over stage motors.
//! let model = ScanModel::Grid(GridModel {
//!     fast_axis_name: "stage_x".into(),
//!     slow_axis_name: "stage_y".into(),
//!     fast_axis_points: 3,
//!     slow_axis_points: 2,
//!     bounding_box: BoundingBox {
//!         fast_axis_start: 0.0,
//!         slow_axis_start: 0.0,
//!         fast_axis_length: 2.0,
//!         slow_axis_length: 1.0,
//!     },
//!     snake: true,
//! });
//!
//! // Keep only points inside a circular region of interest.
//! let roi = Region::Circle {
//!     x_axis_name: "stage_x".into(),
//!     y_axis_name: "stage_y".into(),
//!     x_centre: 1.0,
//!     y_centre: 0.5,
//!     radius: 1.2,
//! };
//!
//! // Resolve, validate, and pull points on demand.
//! let service = PointGeneratorService::new();
//! let scan = service.create_scan(&model, vec![roi]).unwrap();
//! for point in scan.iter_points() {
//!     let x = point.value("stage_x").unwrap();
//!     let y = point.value("stage_y").unwrap();
//!     assert!((x - 1.0).powi(2) + (y - 0.5).powi(2) <= 1.2f64.powi(2));
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `scangen-core` | Models, regions, points, error types |
//! | [`path`] | `scangen-path` | Generator backends, compound scans, mutators |
//! | [`service`] | `scangen-service` | Registry and factory service |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Models, regions, points, and error types (`scangen-core`).
pub use scangen_core as types;

/// Generator backends, compound composition, and mutators (`scangen-path`).
pub use scangen_path as path;

/// The generator registry and factory service (`scangen-service`).
pub use scangen_service as service;

/// The most commonly used types, re-exported for glob import.
pub mod prelude {
    pub use scangen_core::{
        ArrayModel, BoundingBox, CompositionError, GridModel, LineModel, LissajousModel, Point,
        Region, ScanModel, SpiralModel, StaticModel, ValidationError,
    };
    pub use scangen_path::{
        CompoundEntry, CompoundGenerator, Generator, Mutator, PointIterator,
    };
    pub use scangen_service::{BuildError, GeneratorRegistry, PointGeneratorService};
}
