//! Closed-form proximal operator for the statistical-coherence tier.
//!
//! Because L3 is a quadratic form, its proximal map has an exact solution:
//! `prox(u) = (I + 2 tau_lambda3 Sinv)^{-1} u`, obtained from a single dense
//! linear solve. No general proximal-operator machinery is needed.
//!
//! The coefficient matrix `I + 2 tau_lambda3 Sinv` is guaranteed invertible
//! whenever `Sinv` is symmetric positive semi-definite and `tau_lambda3 >= 0`
//! (every eigenvalue is then at least 1). Passing a non-PSD `Sinv` is caller
//! misuse: the solve may produce an ill-conditioned result and is not guarded
//! against here.

use faer::{Mat, MatRef, prelude::*};

/// Applies the exact proximal step for the quadratic L3 term.
///
/// Solves `(I + 2 tau_lambda3 Sinv) u' = u` via LU with partial pivoting.
/// When `sinv` is absent or `tau_lambda3 <= 0` the map is the identity and
/// `u` is returned unchanged.
pub fn prox_coherence(
    u: MatRef<'_, f64>,
    sinv: Option<MatRef<'_, f64>>,
    tau_lambda3: f64,
) -> Mat<f64> {
    let Some(sinv) = sinv else {
        return u.to_owned();
    };
    if tau_lambda3 <= 0.0 {
        return u.to_owned();
    }

    let n = u.nrows();
    let coeff = Mat::from_fn(n, n, |i, j| {
        let eye = if i == j { 1.0 } else { 0.0 };
        eye + 2.0 * tau_lambda3 * sinv[(i, j)]
    });
    coeff.partial_piv_lu().solve(u)
}
