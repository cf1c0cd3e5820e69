//! Entropy, information-Lagrangian and transfer-function diagnostics.
//!
//! These are stateless scalar/elementwise helpers consumed around the solver,
//! not by the iteration loop itself.

use faer::{Mat, MatRef, Side, prelude::*};

use crate::error::{LcoError, LcoErrorKind};

/// Floor applied to transfer-function denominators to avoid division blow-up.
const DENOMINATOR_FLOOR: f64 = 1e-12;

/// Differential entropy (up to an additive constant) of a zero-mean Gaussian
/// with the given covariance: `0.5 * logdet(cov)`.
///
/// The log-determinant is computed from the eigenvalues of the symmetric
/// covariance. Fails with [`LcoError`] when `cov` is not square or not
/// positive definite (any eigenvalue <= 0).
pub fn entropy_gaussian(cov: MatRef<'_, f64>) -> Result<f64, LcoError> {
    if cov.nrows() != cov.ncols() {
        return Err(LcoErrorKind::DimensionMismatch {
            name: "cov",
            expected_rows: cov.nrows(),
            expected_cols: cov.nrows(),
            actual_rows: cov.nrows(),
            actual_cols: cov.ncols(),
        }
        .into());
    }

    let evd = cov
        .self_adjoint_eigen(Side::Lower)
        .map_err(|e| LcoError::from(LcoErrorKind::EvdError(e)))?;
    let eigenvalues = evd.S();

    let mut min_eigenvalue = f64::INFINITY;
    let mut logdet = 0.0;
    for i in 0..cov.nrows() {
        let lambda = eigenvalues[i];
        min_eigenvalue = min_eigenvalue.min(lambda);
        logdet += lambda.ln();
    }
    if min_eigenvalue <= 0.0 {
        return Err(LcoErrorKind::NotPositiveDefinite { min_eigenvalue }.into());
    }
    Ok(0.5 * logdet)
}

/// Scalar information Lagrangian `L_info = alpha * S_universe + beta * S_observer`.
pub fn information_lagrangian(s_universe: f64, s_observer: f64, alpha: f64, beta: f64) -> f64 {
    alpha * s_universe + beta * s_observer
}

/// Elementwise shadow transfer function `T_s = (P_obs - P_model) / P_model`.
///
/// Denominators smaller than `1e-12` in magnitude are replaced by `1e-12`
/// rather than failing; this is a deliberate stability choice. The two inputs
/// must have equal shape.
pub fn shadow_transfer(
    p_obs: MatRef<'_, f64>,
    p_model: MatRef<'_, f64>,
) -> Result<Mat<f64>, LcoError> {
    if p_obs.nrows() != p_model.nrows() || p_obs.ncols() != p_model.ncols() {
        return Err(LcoErrorKind::DimensionMismatch {
            name: "P_model",
            expected_rows: p_obs.nrows(),
            expected_cols: p_obs.ncols(),
            actual_rows: p_model.nrows(),
            actual_cols: p_model.ncols(),
        }
        .into());
    }

    Ok(Mat::from_fn(p_obs.nrows(), p_obs.ncols(), |i, j| {
        let model = p_model[(i, j)];
        let denom = if model.abs() < DENOMINATOR_FLOOR {
            DENOMINATOR_FLOOR
        } else {
            model
        };
        (p_obs[(i, j)] - model) / denom
    }))
}
