//! Error types for the scan-path engine.
//!
//! Organized by phase: model validation (before a generator exists) and
//! compound composition (before any point flows). Iteration itself never
//! fails — geometry is total over the validated parameter domain, and a
//! configuration admitting zero points is a valid empty sequence rather
//! than an error.

use crate::model::ScanModel;
use std::error::Error;
use std::fmt;

/// A scan model failed a declared constraint.
///
/// Always detected before any iterator is constructed, and always carries
/// enough context to fix the input without inspecting internals: the
/// offending field name, a human-readable reason, and the invalid model
/// itself. Validating the same model twice yields an error naming the same
/// field both times.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
    /// Name of the offending model field.
    pub field: &'static str,
    /// Human-readable description of the violated constraint.
    pub reason: String,
    /// The invalid model, returned for display and correction.
    pub model: ScanModel,
}

impl ValidationError {
    /// Build a validation error for one field of `model`.
    pub fn new(field: &'static str, reason: impl Into<String>, model: ScanModel) -> Self {
        Self {
            field,
            reason: reason.into(),
            model,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} model, field '{}': {}",
            self.model.kind(),
            self.field,
            self.reason
        )
    }
}

impl Error for ValidationError {}

/// A compound scan could not be assembled from its children.
///
/// Detected at compound construction time, before any point is produced.
#[derive(Clone, Debug, PartialEq)]
pub enum CompositionError {
    /// The compound has no child generators.
    Empty,
    /// Two children drive the same axis.
    AxisCollision {
        /// The axis name produced by more than one child.
        axis: String,
    },
    /// A region references an axis no child produces.
    UnknownRegionAxis {
        /// The unmatched axis name.
        axis: String,
    },
    /// A region failed its structural checks.
    InvalidRegion {
        /// What went wrong.
        reason: String,
    },
    /// The product of the children's sizes overflows `u64`.
    SizeOverflow,
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "compound scan requires at least one generator"),
            Self::AxisCollision { axis } => {
                write!(f, "axis '{axis}' is produced by more than one generator")
            }
            Self::UnknownRegionAxis { axis } => {
                write!(f, "region references axis '{axis}', which no generator produces")
            }
            Self::InvalidRegion { reason } => write!(f, "invalid region: {reason}"),
            Self::SizeOverflow => write!(f, "compound scan size overflows u64"),
        }
    }
}

impl Error for CompositionError {}
