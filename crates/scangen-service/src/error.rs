//! The service-level build error, aggregating the engine's error types.

use scangen_core::{CompositionError, ValidationError};
use std::error::Error;
use std::fmt;

/// Errors surfaced while building generators or compound scans.
///
/// Wraps the engine's validation and composition errors so callers handle
/// one type at the service boundary; the `From` impls keep `?` ergonomic
/// inside the service.
#[derive(Clone, Debug, PartialEq)]
pub enum BuildError {
    /// A model failed validation.
    Validation(ValidationError),
    /// A compound scan could not be assembled.
    Composition(CompositionError),
    /// No builder is registered for the model's kind.
    UnknownModelKind {
        /// The unregistered kind tag.
        kind: String,
    },
    /// A registered builder received a model of a different kind.
    KindMismatch {
        /// The kind the builder was registered for.
        expected: &'static str,
        /// The kind of the model it received.
        got: &'static str,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::Composition(e) => write!(f, "composition: {e}"),
            Self::UnknownModelKind { kind } => {
                write!(f, "no generator registered for model kind '{kind}'")
            }
            Self::KindMismatch { expected, got } => {
                write!(
                    f,
                    "builder registered for '{expected}' received a '{got}' model"
                )
            }
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Composition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for BuildError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<CompositionError> for BuildError {
    fn from(e: CompositionError) -> Self {
        Self::Composition(e)
    }
}
