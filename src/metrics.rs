//! Dual-geometry metric-tensor helpers.
//!
//! Single-formula constructions pairing a physical (spacetime) metric with a
//! cognitive metric. None of these hold state or iterate; they supply matrices
//! to the surrounding pipeline.

use faer::{Mat, MatRef, prelude::*};

/// Default propagation speed used by [`void_refractivity_tensor`], in km/s.
pub const DEFAULT_PROPAGATION_SPEED: f64 = 3e5;

/// Scales a metric by the squared group index: `g_tilde = n_g^2 g`.
pub fn shadow_optical_metric(g: MatRef<'_, f64>, n_g: f64) -> Mat<f64> {
    g * Scale(n_g * n_g)
}

/// Builds the refractivity tensor `N_ij = delta_ij + (2 / c^2) Phi_,ij` from a
/// potential Hessian.
pub fn void_refractivity_tensor(phi_hessian: MatRef<'_, f64>, c: f64) -> Mat<f64> {
    let dim = phi_hessian.nrows();
    let factor = 2.0 / (c * c);
    Mat::from_fn(dim, dim, |i, j| {
        let eye = if i == j { 1.0 } else { 0.0 };
        eye + factor * phi_hessian[(i, j)]
    })
}

/// Combines a physical and a cognitive metric block-diagonally.
///
/// For `g_spacetime` of shape (p, p) and `g_cognition` of shape (q, q) the
/// result has shape (p+q, p+q) with exactly zero off-diagonal blocks.
pub fn dual_metric(g_spacetime: MatRef<'_, f64>, g_cognition: MatRef<'_, f64>) -> Mat<f64> {
    let (pr, pc) = (g_spacetime.nrows(), g_spacetime.ncols());
    let (qr, qc) = (g_cognition.nrows(), g_cognition.ncols());
    Mat::from_fn(pr + qr, pc + qc, |i, j| {
        if i < pr && j < pc {
            g_spacetime[(i, j)]
        } else if i >= pr && j >= pc {
            g_cognition[(i - pr, j - pc)]
        } else {
            0.0
        }
    })
}
