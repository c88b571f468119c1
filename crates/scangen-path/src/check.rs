//! Validation helpers shared by the generator backends.
//!
//! Each helper reports the precise offending field so callers can surface
//! field-level errors without inspecting internals.

use scangen_core::{ScanModel, ValidationError};

/// Reject an empty axis name.
pub(crate) fn require_axis_name(
    name: &str,
    field: &'static str,
    model: &ScanModel,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new(
            field,
            "axis name must not be empty; it is the motor name used for this axis",
            model.clone(),
        ));
    }
    Ok(())
}

/// Reject two-axis models whose axes share a name.
pub(crate) fn require_distinct_axes(
    fast: &str,
    slow: &str,
    field: &'static str,
    model: &ScanModel,
) -> Result<(), ValidationError> {
    if fast == slow {
        return Err(ValidationError::new(
            field,
            format!("slow axis '{slow}' must differ from the fast axis"),
            model.clone(),
        ));
    }
    Ok(())
}

/// Reject a zero point count.
pub(crate) fn require_positive_count(
    count: u64,
    field: &'static str,
    model: &ScanModel,
) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::new(
            field,
            "must be a positive number of points",
            model.clone(),
        ));
    }
    Ok(())
}

/// Reject NaN and infinite parameter values.
pub(crate) fn require_finite(
    value: f64,
    field: &'static str,
    model: &ScanModel,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(
            field,
            format!("must be finite, got {value}"),
            model.clone(),
        ));
    }
    Ok(())
}

/// Reject non-finite or non-positive parameter values.
pub(crate) fn require_positive(
    value: f64,
    field: &'static str,
    model: &ScanModel,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new(
            field,
            format!("must be positive and finite, got {value}"),
            model.clone(),
        ));
    }
    Ok(())
}

/// Evenly spaced position `i` of `points` across `[start, stop]`, both
/// endpoints included. A single-point spacing sits at `start`.
pub(crate) fn linspace(start: f64, stop: f64, points: u64, i: u64) -> f64 {
    if points <= 1 {
        return start;
    }
    start + (stop - start) * (i as f64) / ((points - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_endpoints() {
        assert_eq!(linspace(0.0, 2.0, 3, 0), 0.0);
        assert_eq!(linspace(0.0, 2.0, 3, 1), 1.0);
        assert_eq!(linspace(0.0, 2.0, 3, 2), 2.0);
    }

    #[test]
    fn linspace_single_point_sits_at_start() {
        assert_eq!(linspace(4.5, 9.0, 1, 0), 4.5);
    }

    #[test]
    fn linspace_descends_when_stop_below_start() {
        assert_eq!(linspace(1.0, 0.0, 2, 0), 1.0);
        assert_eq!(linspace(1.0, 0.0, 2, 1), 0.0);
    }
}
