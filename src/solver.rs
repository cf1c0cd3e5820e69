//! The Lexicographic Coherence Operator (LCO) solve loop.
//!
//! [`lco_solve`] reconstructs a field estimate `u` from noisy linear
//! observations `d = A u + n` under four prioritized objectives (tiers):
//! L1 physical invariant, L2 data fidelity, L3 statistical coherence and
//! L4 interpretive proxy, with L1 the least negotiable.
//!
//! Each iteration performs, in fixed order:
//! 1. A single combined gradient step over L1, L2 and L4
//!    (`grad = lambda1 g1 + lambda2 g2 + lambda4 g4`; L3 is skipped here).
//! 2. An exact proximal correction for the quadratic L3 term.
//! 3. A sequential projection cascade in strict tier order 1 -> 2 -> 3, each
//!    projection operating on the output of the previous one. This ordering is
//!    what encodes the lexicographic priority; tier 4 is never projected.
//!
//! The lexicographic discipline is enforced *only* through the projection
//! order, not through separate per-tier optimization passes. This matches the
//! reference formulation and is a known simplification, not an omission: no
//! lower tier is re-solved inside the null space of a higher one.
//!
//! The loop terminates on convergence (`||u_new - u|| < tol`) or when
//! `max_iters` is exhausted. Non-convergence is not an error; the outcome is
//! reported through [`SolveReport::converged`] and the caller decides what to
//! do with a non-converged estimate.

use faer::{Mat, MatRef, prelude::*};

use crate::config::LcoConfig;
use crate::error::{LcoError, LcoErrorKind};
use crate::projection::project_tier;
use crate::proximal::prox_coherence;
use crate::tiers::{l1_gradient, l1_value, l2_gradient, l2_value, l3_value, l4_gradient};

/// Optional weighting operators for a solve.
///
/// All members are read-only borrows; ownership stays with the caller for the
/// duration of the solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierOperators<'a> {
    /// Inverse noise covariance (m-by-m, symmetric PSD), weighting the L2 residual.
    pub ninv: Option<MatRef<'a, f64>>,
    /// Inverse coherence covariance (n-by-n, symmetric PSD), weighting L3.
    pub sinv: Option<MatRef<'a, f64>>,
    /// Physical-invariant operator (k-by-n), weighting L1.
    pub d: Option<MatRef<'a, f64>>,
}

/// Outcome of a solve.
///
/// The estimate is always returned, whether the loop converged or ran out of
/// iterations; divergence detection (e.g. a finiteness check) is left to the
/// caller.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The final field estimate, an n-by-1 column vector.
    pub u: Mat<f64>,
    /// Number of iterations actually performed.
    pub iterations: usize,
    /// Whether the successive-iterate distance dropped below `tol`.
    pub converged: bool,
}

/// Fails with a [`LcoErrorKind::DimensionMismatch`] unless `m` has the given shape.
fn check_shape(
    name: &'static str,
    m: MatRef<'_, f64>,
    rows: usize,
    cols: usize,
) -> Result<(), LcoError> {
    if m.nrows() != rows || m.ncols() != cols {
        return Err(LcoErrorKind::DimensionMismatch {
            name,
            expected_rows: rows,
            expected_cols: cols,
            actual_rows: m.nrows(),
            actual_cols: m.ncols(),
        }
        .into());
    }
    Ok(())
}

/// Runs the tiered proximal-gradient iteration to reconstruct `u` from `data`.
///
/// # Arguments
/// * `a`: The m-by-n forward operator.
/// * `data`: The observed data, an m-by-1 column vector.
/// * `config`: Tier weights, tolerances and iteration parameters.
/// * `ops`: Optional weighting operators (`Ninv`, `Sinv`, `D`).
/// * `u0`: Optional initial guess (n-by-1). Defaults to the zero vector.
///
/// # Returns
/// A [`SolveReport`] with the final estimate, the iteration count and the
/// convergence flag, or a [`LcoError`] if the configuration is invalid or an
/// operand shape is inconsistent with `a`.
///
/// The solve is deterministic: no random state is read or mutated anywhere in
/// the loop. Reproducible stochastic fixtures are built by the caller from
/// [`crate::utils::seeded_rng`] and `config.seed`.
pub fn lco_solve(
    a: MatRef<'_, f64>,
    data: MatRef<'_, f64>,
    config: &LcoConfig,
    ops: &TierOperators<'_>,
    u0: Option<MatRef<'_, f64>>,
) -> Result<SolveReport, LcoError> {
    config.validate()?;

    let m = a.nrows();
    let n = a.ncols();
    check_shape("d", data, m, 1)?;
    if let Some(u0) = u0 {
        check_shape("u0", u0, n, 1)?;
    }
    if let Some(ninv) = ops.ninv {
        check_shape("Ninv", ninv, m, m)?;
    }
    if let Some(sinv) = ops.sinv {
        check_shape("Sinv", sinv, n, n)?;
    }
    if let Some(d_op) = ops.d {
        // The invariant operator may have any number of rows, but must act on u.
        check_shape("D", d_op, d_op.nrows(), n)?;
    }

    let mut u = match u0 {
        Some(u0) => u0.to_owned(),
        None => Mat::zeros(n, 1),
    };

    let lam = config.lambdas;
    let eps = config.epsilons;
    let tau = config.step_size;

    log::debug!(
        "starting LCO solve: m={m}, n={n}, max_iters={}, tol={:e}",
        config.max_iters,
        config.tol
    );

    let mut iterations = 0;
    let mut converged = false;

    for it in 0..config.max_iters {
        // Combined descent direction over tiers 1, 2 and 4. The coherence
        // tier (L3) is deliberately absent: it enters through the proximal
        // correction below.
        let g1 = l1_gradient(u.as_ref(), ops.d);
        let g2 = l2_gradient(u.as_ref(), a, data, ops.ninv);
        let g4 = l4_gradient(u.as_ref());
        let wg1 = &g1 * Scale(lam[0]);
        let wg2 = &g2 * Scale(lam[1]);
        let wg4 = &g4 * Scale(lam[3]);
        let grad = &(&wg1 + &wg2) + &wg4;

        let step = &grad * Scale(tau);
        let mut u_new = &u - &step;

        u_new = prox_coherence(u_new.as_ref(), ops.sinv, tau * lam[2]);

        // Projection cascade, strictly in tier order. Each penalty is
        // recomputed on the output of the previous projection; this sequential
        // dependency is what makes L1 dominate L2 dominate L3. Tier 4 carries
        // no epsilon enforcement.
        let v1 = l1_value(u_new.as_ref(), ops.d);
        u_new = project_tier(u_new.as_ref(), v1, eps[0]);
        let v2 = l2_value(u_new.as_ref(), a, data, ops.ninv);
        u_new = project_tier(u_new.as_ref(), v2, eps[1]);
        let v3 = l3_value(u_new.as_ref(), ops.sinv);
        u_new = project_tier(u_new.as_ref(), v3, eps[2]);

        iterations = it + 1;
        let delta = (&u_new - &u).norm_l2();
        u = u_new;

        if delta < config.tol {
            converged = true;
            break;
        }
    }

    if converged {
        log::debug!("LCO solve converged after {iterations} iterations");
    } else {
        log::warn!(
            "LCO solve exhausted max_iters={} without reaching tol={:e}",
            config.max_iters,
            config.tol
        );
    }

    Ok(SolveReport {
        u,
        iterations,
        converged,
    })
}
