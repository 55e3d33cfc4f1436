use thiserror::Error;

use super::roots::RootFindingError;
use super::NativeFloat;

/// Errors of operations that normalize by the total arc length of a curve.
/// Plain evaluation and quadrature never fail, they propagate NaN/Inf instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    /// The total arc length is too small to divide by, e.g. all control points coincide.
    #[error("degenerate curve: total arc length {length} is below {epsilon}")]
    DegenerateCurve {
        length: NativeFloat,
        epsilon: NativeFloat,
    },

    #[error("arc length fraction {0} is outside of [0, 1]")]
    FractionOutOfRange(NativeFloat),

    #[error("arc length inversion failed: {0}")]
    RootFinding(#[from] RootFindingError),
}
