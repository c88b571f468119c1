//! Stateless factory service for the scangen point generator engine.
//!
//! [`PointGeneratorService`] is the sole entry point external
//! collaborators use: it resolves a [`ScanModel`](scangen_core::ScanModel)
//! to its generator through an explicit [`GeneratorRegistry`], validates
//! it, and assembles [`CompoundGenerator`](scangen_path::CompoundGenerator)s
//! from ordered (model, regions) lists.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod service;

pub use error::BuildError;
pub use registry::{BuilderFn, GeneratorRegistry};
pub use service::PointGeneratorService;
