//! The stateless point generator factory service.

use crate::error::BuildError;
use crate::registry::GeneratorRegistry;
use scangen_core::{Region, ScanModel};
use scangen_path::{CompoundEntry, CompoundGenerator, Generator, Mutator};
use tracing::{debug, trace};

/// Stateless factory resolving scan models to generators and assembling
/// compound scans.
///
/// The service holds only an immutable [`GeneratorRegistry`] and retains
/// no per-call state, so one instance may be shared freely across threads
/// and callers. Every method validates fully before anything is built;
/// nothing is retried here — retry policy belongs to the orchestrating
/// caller.
///
/// # Examples
///
/// ```
/// use scangen_core::{LineModel, ScanModel};
/// use scangen_service::PointGeneratorService;
///
/// let service = PointGeneratorService::new();
/// let model = ScanModel::Line(LineModel {
///     axis_name: "stage_x".into(),
///     start: 0.0,
///     stop: 1.0,
///     points: 5,
/// });
/// let gen = service.create_generator(&model).unwrap();
/// assert_eq!(gen.size(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointGeneratorService {
    registry: GeneratorRegistry,
}

impl PointGeneratorService {
    /// A service over the standard registry.
    pub fn new() -> Self {
        Self {
            registry: GeneratorRegistry::standard(),
        }
    }

    /// A service over a caller-supplied registry.
    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        Self { registry }
    }

    /// The registry this service dispatches through.
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Validate `model` without keeping the generator.
    ///
    /// Deterministic: validating the same invalid model twice yields an
    /// error naming the same field both times.
    pub fn validate(&self, model: &ScanModel) -> Result<(), BuildError> {
        trace!(kind = model.kind(), "validating model");
        self.registry.build(model).map(|_| ())
    }

    /// Resolve and validate `model`, returning its generator.
    pub fn create_generator(&self, model: &ScanModel) -> Result<Box<dyn Generator>, BuildError> {
        trace!(kind = model.kind(), "resolving generator");
        let generator = self.registry.build(model)?;
        debug!(
            kind = model.kind(),
            size = generator.size(),
            "built generator"
        );
        Ok(generator)
    }

    /// Build a single-model scan with regions applied.
    ///
    /// Equivalent to a one-entry compound, which is where region
    /// filtering and dense re-indexing live.
    pub fn create_scan(
        &self,
        model: &ScanModel,
        regions: Vec<Region>,
    ) -> Result<CompoundGenerator, BuildError> {
        self.create_compound(vec![(model.clone(), regions)])
    }

    /// Build a compound scan from ordered (model, regions) pairs, first
    /// entry outermost.
    pub fn create_compound(
        &self,
        entries: Vec<(ScanModel, Vec<Region>)>,
    ) -> Result<CompoundGenerator, BuildError> {
        self.create_compound_with_mutators(entries, Vec::new())
    }

    /// Build a compound scan with mutators applied to the emitted stream.
    pub fn create_compound_with_mutators(
        &self,
        entries: Vec<(ScanModel, Vec<Region>)>,
        mutators: Vec<Box<dyn Mutator>>,
    ) -> Result<CompoundGenerator, BuildError> {
        let children = entries.len();
        let mut built = Vec::with_capacity(children);
        for (model, regions) in entries {
            let generator = self.create_generator(&model)?;
            built.push(CompoundEntry::with_regions(generator, regions));
        }
        let compound = CompoundGenerator::with_mutators(built, mutators)?;
        debug!(children, size = ?compound.size(), "built compound scan");
        Ok(compound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scangen_core::{LineModel, StaticModel};

    fn line(axis: &str, points: u64) -> ScanModel {
        ScanModel::Line(LineModel {
            axis_name: axis.into(),
            start: 0.0,
            stop: 1.0,
            points,
        })
    }

    #[test]
    fn validate_accepts_valid_and_rejects_invalid() {
        let service = PointGeneratorService::new();
        assert!(service.validate(&line("x", 3)).is_ok());
        match service.validate(&line("x", 0)) {
            Err(BuildError::Validation(e)) => assert_eq!(e.field, "points"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn validate_is_deterministic() {
        let service = PointGeneratorService::new();
        let bad = line("", 3);
        let first = service.validate(&bad).unwrap_err();
        let second = service.validate(&bad).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn create_scan_wraps_single_model() {
        let service = PointGeneratorService::new();
        let scan = service.create_scan(&line("x", 4), Vec::new()).unwrap();
        assert_eq!(scan.size(), Some(4));
        assert_eq!(scan.iter_points().count(), 4);
    }

    #[test]
    fn service_is_shareable_across_threads() {
        let service = std::sync::Arc::new(PointGeneratorService::new());
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                let service = std::sync::Arc::clone(&service);
                std::thread::spawn(move || {
                    let scan = service
                        .create_compound(vec![
                            (line("outer", i + 1), Vec::new()),
                            (line("inner", 3), Vec::new()),
                        ])
                        .unwrap();
                    scan.iter_points().count() as u64
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), (i as u64 + 1) * 3);
        }
    }

    #[test]
    fn compound_entries_validate_before_composition() {
        let service = PointGeneratorService::new();
        let result = service.create_compound(vec![
            (line("x", 2), Vec::new()),
            (ScanModel::Static(StaticModel { points: 0 }), Vec::new()),
        ]);
        assert!(matches!(result, Err(BuildError::Validation(_))));
    }
}
