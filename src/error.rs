//! Error types for curve evaluation and control point editing.

use thiserror::Error;

use crate::consts::MIN_CONTROL_POINTS;

/// Result type for curve operations.
pub type BezierResult<T> = Result<T, BezierError>;

/// Errors surfaced to the caller. Every operation checks its inputs before producing any output,
/// so a returned error never comes with partial results.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BezierError {
    /// Fewer control points than a curve needs.
    #[error("invalid input for {context}: need at least {required} control points, got {actual}")]
    InvalidInput {
        required: usize,
        actual: usize,
        context: &'static str,
    },

    /// A parameter (sampling step, range bound, t) that no curve operation can work with.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },

    /// The control point set already holds as many points as it allows.
    #[error("control point set is full ({capacity} points)")]
    CapacityExceeded { capacity: usize },

    #[error("control point index {index} is out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

impl BezierError {
    /// True for errors caused by the values handed to an evaluation call.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::InvalidParameter { .. })
    }
}

pub(crate) fn require_control_points(actual: usize, context: &'static str) -> BezierResult<()> {
    if actual < MIN_CONTROL_POINTS {
        return Err(BezierError::InvalidInput {
            required: MIN_CONTROL_POINTS,
            actual,
            context,
        });
    }
    Ok(())
}

pub(crate) fn require_finite(value: f64, parameter: &'static str) -> BezierResult<()> {
    if !value.is_finite() {
        return Err(BezierError::InvalidParameter {
            parameter,
            message: format!("expected a finite value, got {}", value),
        });
    }
    Ok(())
}
