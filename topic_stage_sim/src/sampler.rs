// Categorical sampling by inverse-CDF selection.
//
// `draw` accumulates the distribution's entries left to right and returns
// the first index whose running sum reaches the supplied uniform value. The
// uniform is passed in rather than drawn here, so the function is a pure
// mapping from `(distribution, uniform)` to an index — trivially testable
// and deterministic under a seeded `SceneRng`.
//
// Degenerate inputs (empty distribution, sum ≈ 0, uniform outside [0, 1))
// are `Sampling` errors: they indicate a configuration or programming
// defect, never a transient condition.

use crate::error::{Result, SceneError};
use crate::types::SUM_TOLERANCE;

/// Draw a single index from a probability vector using inverse-CDF
/// selection.
///
/// Returns the first index whose cumulative probability is >= `uniform`.
/// If accumulated floating error leaves the total just short of `uniform`,
/// the last index is returned rather than failing — the distribution has
/// already been validated to sum to 1 within tolerance.
pub fn draw(distribution: &[f64], uniform: f64) -> Result<usize> {
    if distribution.is_empty() {
        return Err(SceneError::Sampling("empty distribution".into()));
    }
    if !(0.0..1.0).contains(&uniform) {
        return Err(SceneError::Sampling(format!(
            "uniform value {uniform} outside [0, 1)"
        )));
    }
    let total: f64 = distribution.iter().sum();
    if !total.is_finite() || total <= SUM_TOLERANCE {
        return Err(SceneError::Sampling(format!(
            "distribution sum {total} is degenerate"
        )));
    }

    let mut cumulative = 0.0;
    for (index, p) in distribution.iter().enumerate() {
        cumulative += p;
        if cumulative >= uniform {
            return Ok(index);
        }
    }
    // Float accumulation fell just short of 1; the last index is the only
    // consistent answer.
    Ok(distribution.len() - 1)
}
