//! The four tier objectives L1..L4 and their gradients.
//!
//! Every objective is a quadratic form in the field estimate `u`, optionally
//! weighted by a caller-supplied operator:
//!
//! - **L1** (physical invariant): `u.u`, or `(D u).(D u)` with an invariant
//!   operator `D`.
//! - **L2** (data fidelity): squared residual `r.r` for `r = d - A u`, or
//!   `r^T Ninv r` with an inverse-noise-covariance weighting.
//! - **L3** (statistical coherence): `u.u`, or `u^T Sinv u`. Inside the solve
//!   loop this tier is handled exclusively through its proximal operator
//!   ([`crate::proximal::prox_coherence`]); its explicit gradient exists for
//!   diagnostics and testing only.
//! - **L4** (interpretive proxy): `u.u`, always unweighted.
//!
//! All functions here are stateless and infallible on well-formed finite
//! inputs. Operand shapes are the caller's responsibility; a mismatch panics
//! inside [`faer`]'s own dimension asserts rather than being translated here.
//!
//! Vectors are represented as n-by-1 [`faer`] column matrices throughout.

use faer::{Mat, MatRef, prelude::*};

/// Scalar product of two equal-length column vectors.
#[inline]
fn dot(a: MatRef<'_, f64>, b: MatRef<'_, f64>) -> f64 {
    (a.transpose() * b)[(0, 0)]
}

/// L1 physical-invariant penalty: `u.u`, or `(D u).(D u)` when `d_op` is supplied.
pub fn l1_value(u: MatRef<'_, f64>, d_op: Option<MatRef<'_, f64>>) -> f64 {
    match d_op {
        None => dot(u, u),
        Some(d) => {
            let v = d * u;
            dot(v.as_ref(), v.as_ref())
        }
    }
}

/// Gradient of L1: `2 u`, or `2 D^T D u` when `d_op` is supplied.
pub fn l1_gradient(u: MatRef<'_, f64>, d_op: Option<MatRef<'_, f64>>) -> Mat<f64> {
    match d_op {
        None => u * Scale(2.0),
        Some(d) => {
            let v = d * u;
            let g = d.transpose() * &v;
            &g * Scale(2.0)
        }
    }
}

/// L2 data-fidelity penalty for the residual `r = data - A u`: `r.r`, or
/// `r^T Ninv r` when an inverse-noise-covariance weighting is supplied.
pub fn l2_value(
    u: MatRef<'_, f64>,
    a: MatRef<'_, f64>,
    data: MatRef<'_, f64>,
    ninv: Option<MatRef<'_, f64>>,
) -> f64 {
    let au = a * u;
    let r = data - au.as_ref();
    match ninv {
        None => dot(r.as_ref(), r.as_ref()),
        Some(w) => {
            let wr = w * r.as_ref();
            dot(r.as_ref(), wr.as_ref())
        }
    }
}

/// Gradient of L2: `-2 A^T r`, or `-2 A^T Ninv r` when weighted.
pub fn l2_gradient(
    u: MatRef<'_, f64>,
    a: MatRef<'_, f64>,
    data: MatRef<'_, f64>,
    ninv: Option<MatRef<'_, f64>>,
) -> Mat<f64> {
    let au = a * u;
    let r = data - au.as_ref();
    let weighted = match ninv {
        None => r,
        Some(w) => w * r.as_ref(),
    };
    let g = a.transpose() * &weighted;
    &g * Scale(-2.0)
}

/// L3 statistical-coherence penalty: `u.u`, or `u^T Sinv u` when weighted.
pub fn l3_value(u: MatRef<'_, f64>, sinv: Option<MatRef<'_, f64>>) -> f64 {
    match sinv {
        None => dot(u, u),
        Some(s) => {
            let su = s * u;
            dot(u, su.as_ref())
        }
    }
}

/// Gradient of L3: `2 u`, or `2 Sinv u` when weighted.
///
/// The solve loop never calls this; the coherence tier is closed in exact form
/// by [`crate::proximal::prox_coherence`]. It is exposed for diagnostics.
pub fn l3_gradient(u: MatRef<'_, f64>, sinv: Option<MatRef<'_, f64>>) -> Mat<f64> {
    match sinv {
        None => u * Scale(2.0),
        Some(s) => {
            let su = s * u;
            &su * Scale(2.0)
        }
    }
}

/// L4 interpretive-proxy penalty: `u.u`. Always unweighted.
pub fn l4_value(u: MatRef<'_, f64>) -> f64 {
    dot(u, u)
}

/// Gradient of L4: `2 u`.
pub fn l4_gradient(u: MatRef<'_, f64>) -> Mat<f64> {
    u * Scale(2.0)
}
