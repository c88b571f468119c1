//! Core value types for the scangen scan-path engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the plain value data that crosses the transport boundary — scan
//! models, regions of interest — together with the [`Point`] type
//! emitted by generators and the engine's error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod point;
pub mod region;

pub use error::{CompositionError, ValidationError};
pub use model::{
    ArrayModel, BoundingBox, GridModel, LineModel, LissajousModel, ScanModel, SpiralModel,
    StaticModel,
};
pub use point::{AxisPosition, Point};
pub use region::Region;
