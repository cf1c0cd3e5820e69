//! Integration test suite for the helper modules surrounding the solver.
//!
//! # Test Methodology
//!
//! Every helper is a single closed-form expression, so each test verifies an
//! exact algebraic law of that formula (a scaling law, a block-structure law,
//! a zero property) rather than approximating against a numerical reference.
//! Random inputs are drawn from a seeded generator so the suite stays
//! deterministic.

use anyhow::{Result, ensure};
use faer::Mat;
use lco_solver::diagnostics::{entropy_gaussian, information_lagrangian, shadow_transfer};
use lco_solver::forward::{apply_forward_operator, gaussian_noise};
use lco_solver::metrics::{
    DEFAULT_PROPAGATION_SPEED, dual_metric, shadow_optical_metric, void_refractivity_tensor,
};
use lco_solver::utils::seeded_rng;
use rand::Rng;

/// Metric scaling law: `shadow_optical_metric(g, n_g) == n_g^2 * g` elementwise.
#[test]
fn test_optical_metric_scaling_law() -> Result<()> {
    let mut rng = seeded_rng(42);
    let g = Mat::from_fn(4, 4, |_, _| rng.random::<f64>() - 0.5);
    let n_g = 1.1;

    let gt = shadow_optical_metric(g.as_ref(), n_g);
    for i in 0..4 {
        for j in 0..4 {
            ensure!((gt[(i, j)] - n_g * n_g * g[(i, j)]).abs() < 1e-15);
        }
    }
    Ok(())
}

/// Block-diagonal shape law: (p,p) + (q,q) metrics combine into (p+q, p+q)
/// with exactly zero off-diagonal blocks.
#[test]
fn test_dual_metric_block_diagonal_law() -> Result<()> {
    let g1 = Mat::from_fn(2, 2, |i, j| if i == j { 1.0 } else { 0.0 });
    let g2 = Mat::from_fn(3, 3, |i, j| if i == j { 2.0 } else { 0.5 });

    let g = dual_metric(g1.as_ref(), g2.as_ref());
    ensure!((g.nrows(), g.ncols()) == (5, 5));

    for i in 0..2 {
        for j in 0..3 {
            ensure!(g[(i, 2 + j)] == 0.0, "upper-right block must be zero");
            ensure!(g[(2 + j, i)] == 0.0, "lower-left block must be zero");
        }
    }
    for i in 0..2 {
        for j in 0..2 {
            ensure!(g[(i, j)] == g1[(i, j)]);
        }
    }
    for i in 0..3 {
        for j in 0..3 {
            ensure!(g[(2 + i, 2 + j)] == g2[(i, j)]);
        }
    }
    Ok(())
}

#[test]
fn test_refractivity_tensor_shape() -> Result<()> {
    let hessian = Mat::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
    let n = void_refractivity_tensor(hessian.as_ref(), DEFAULT_PROPAGATION_SPEED);
    ensure!((n.nrows(), n.ncols()) == (3, 3));
    // The perturbation 2/c^2 is tiny for the default speed; the diagonal stays near 1.
    for i in 0..3 {
        ensure!((n[(i, i)] - 1.0).abs() < 1e-9);
    }
    Ok(())
}

/// Transfer-function zero property: `shadow_transfer(P, P)` vanishes
/// elementwise, including for steep power-law spectra.
#[test]
fn test_transfer_function_zero_when_equal() -> Result<()> {
    // P(k) = k^-3 over a small k-grid, as a 5x1 array.
    let p = Mat::from_fn(5, 1, |i, _| {
        let k = 0.01 + 0.0225 * i as f64;
        k.powi(-3)
    });

    let t = shadow_transfer(p.as_ref(), p.as_ref())?;
    for i in 0..5 {
        ensure!(t[(i, 0)] == 0.0, "T_s must vanish when P_obs == P_model");
    }
    Ok(())
}

#[test]
fn test_entropy_requires_positive_definite_covariance() -> Result<()> {
    let cov = Mat::from_fn(3, 3, |i, j| if i == j { 0.0 } else { 1.0 });
    let err = entropy_gaussian(cov.as_ref());
    ensure!(err.is_err(), "singular covariance must be rejected");
    Ok(())
}

#[test]
fn test_entropy_and_lagrangian_compose() -> Result<()> {
    // Two Gaussian subsystems with diagonal covariances; the information
    // Lagrangian is the alpha/beta-weighted sum of their entropies.
    let cov_universe = Mat::from_fn(2, 2, |i, j| if i == j { 4.0 } else { 0.0 });
    let cov_observer = Mat::from_fn(2, 2, |i, j| if i == j { 1.0 } else { 0.0 });

    let s_universe = entropy_gaussian(cov_universe.as_ref())?;
    let s_observer = entropy_gaussian(cov_observer.as_ref())?;
    ensure!((s_universe - 16.0_f64.ln() / 2.0).abs() < 1e-12);
    ensure!(s_observer.abs() < 1e-12);

    let l_info = information_lagrangian(s_universe, s_observer, 1.0, 1.0);
    ensure!((l_info - s_universe).abs() < 1e-12);
    Ok(())
}

/// The forward model composes with the noise fixture reproducibly: same seed,
/// same observations.
#[test]
fn test_forward_model_reproducible_observations() -> Result<()> {
    let n = 12;
    let a = Mat::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 });
    let u = Mat::from_fn(n, 1, |i, _| i as f64 / n as f64);

    let mut rng_a = seeded_rng(123);
    let mut rng_b = seeded_rng(123);
    let noise_a = gaussian_noise(&mut rng_a, n, 0.1)?;
    let noise_b = gaussian_noise(&mut rng_b, n, 0.1)?;

    let d_a = apply_forward_operator(a.as_ref(), u.as_ref(), Some(noise_a.as_ref()));
    let d_b = apply_forward_operator(a.as_ref(), u.as_ref(), Some(noise_b.as_ref()));
    ensure!(d_a == d_b);

    // And without noise the observation is exactly A u.
    let clean = apply_forward_operator(a.as_ref(), u.as_ref(), None);
    ensure!(clean == u);
    Ok(())
}
