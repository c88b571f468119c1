//! Explicit registry mapping scan model kinds to generator builders.

use crate::error::BuildError;
use indexmap::IndexMap;
use scangen_core::ScanModel;
use scangen_path::{
    ArrayGenerator, Generator, GridGenerator, LineGenerator, LissajousGenerator, SpiralGenerator,
    StaticGenerator,
};
use std::fmt;

/// A builder for one model kind: validates the model and produces its
/// generator.
pub type BuilderFn = fn(&ScanModel) -> Result<Box<dyn Generator>, BuildError>;

/// Maps [`ScanModel::kind`] tags to [`BuilderFn`]s.
///
/// The model variants are a closed set, but the registry keeps dispatch
/// extensible: embedding applications can register builders for
/// additional tags, or replace a standard builder, without touching the
/// engine. Registration order is preserved for deterministic listing.
#[derive(Clone)]
pub struct GeneratorRegistry {
    builders: IndexMap<&'static str, BuilderFn>,
}

impl GeneratorRegistry {
    /// An empty registry with no builders.
    pub fn empty() -> Self {
        Self {
            builders: IndexMap::new(),
        }
    }

    /// The standard registry with every built-in shape registered.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register("line", build_line);
        registry.register("array", build_array);
        registry.register("grid", build_grid);
        registry.register("spiral", build_spiral);
        registry.register("lissajous", build_lissajous);
        registry.register("static", build_static);
        registry
    }

    /// Register (or replace) the builder for a kind tag.
    pub fn register(&mut self, kind: &'static str, builder: BuilderFn) {
        self.builders.insert(kind, builder);
    }

    /// The registered kind tags, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builders.keys().copied()
    }

    /// Resolve `model` to its builder and run it.
    pub fn build(&self, model: &ScanModel) -> Result<Box<dyn Generator>, BuildError> {
        let kind = model.kind();
        match self.builders.get(kind) {
            Some(builder) => builder(model),
            None => Err(BuildError::UnknownModelKind {
                kind: kind.to_string(),
            }),
        }
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("kinds", &self.builders.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn build_line(model: &ScanModel) -> Result<Box<dyn Generator>, BuildError> {
    match model {
        ScanModel::Line(m) => Ok(Box::new(LineGenerator::new(m.clone())?)),
        other => Err(mismatch("line", other)),
    }
}

fn build_array(model: &ScanModel) -> Result<Box<dyn Generator>, BuildError> {
    match model {
        ScanModel::Array(m) => Ok(Box::new(ArrayGenerator::new(m.clone())?)),
        other => Err(mismatch("array", other)),
    }
}

fn build_grid(model: &ScanModel) -> Result<Box<dyn Generator>, BuildError> {
    match model {
        ScanModel::Grid(m) => Ok(Box::new(GridGenerator::new(m.clone())?)),
        other => Err(mismatch("grid", other)),
    }
}

fn build_spiral(model: &ScanModel) -> Result<Box<dyn Generator>, BuildError> {
    match model {
        ScanModel::Spiral(m) => Ok(Box::new(SpiralGenerator::new(m.clone())?)),
        other => Err(mismatch("spiral", other)),
    }
}

fn build_lissajous(model: &ScanModel) -> Result<Box<dyn Generator>, BuildError> {
    match model {
        ScanModel::Lissajous(m) => Ok(Box::new(LissajousGenerator::new(m.clone())?)),
        other => Err(mismatch("lissajous", other)),
    }
}

fn build_static(model: &ScanModel) -> Result<Box<dyn Generator>, BuildError> {
    match model {
        ScanModel::Static(m) => Ok(Box::new(StaticGenerator::new(m.clone())?)),
        other => Err(mismatch("static", other)),
    }
}

fn mismatch(expected: &'static str, got: &ScanModel) -> BuildError {
    BuildError::KindMismatch {
        expected,
        got: got.kind(),
    }
}
