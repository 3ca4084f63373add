//! Curve construction and sampling errors.

use flourish_params::ParamError;
use thiserror::Error;

/// Errors from building or sampling a curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),

    #[error("cannot normalize a degenerate curve (all values equal {value})")]
    DegenerateCurve { value: f64 },

    #[error("invalid symmetry tag '{0}' (expected N, X, Y or R)")]
    InvalidSymmetry(String),

    #[error("no symmetry choices given")]
    EmptySymmetryChoices,

    #[error("curve is incomplete: missing {0}")]
    IncompleteCurve(&'static str),

    #[error("invalid sampling: {0}")]
    InvalidSampling(String),

    #[error("too many pendulums: {count} (at most {max})")]
    TooManyPendulums { count: usize, max: usize },

    #[error("unknown style index {0}")]
    UnknownStyle(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_error_is_transparent() {
        let err: CurveError = ParamError::parse("xaf", "q", "not a number").into();
        assert_eq!(err.to_string(), ParamError::parse("xaf", "q", "not a number").to_string());
    }

    #[test]
    fn test_messages() {
        assert!(CurveError::UnknownDimension("z".into()).to_string().contains("'z'"));
        assert!(CurveError::InvalidSymmetry("Q".into()).to_string().contains("'Q'"));
        assert!(CurveError::IncompleteCurve("ramp").to_string().contains("ramp"));
        let err = CurveError::TooManyPendulums { count: 30, max: 26 };
        assert!(err.to_string().contains("30"));
    }
}
