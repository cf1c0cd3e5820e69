//! The linear forward model `d = A u + n`.
//!
//! The solver never calls into this module; it exists to build observation
//! vectors for test fixtures and real pipelines feeding [`crate::lco_solve`].

use faer::{Mat, MatRef};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{LcoError, LcoErrorKind};

/// Applies the forward operator to a true field, optionally adding noise.
///
/// Computes `d = A u`, or `d = A u + noise` when a noise vector is supplied.
/// Shapes follow faer's own asserts: `u` must be n-by-1 for an m-by-n `a`,
/// and `noise` m-by-1.
pub fn apply_forward_operator(
    a: MatRef<'_, f64>,
    u: MatRef<'_, f64>,
    noise: Option<MatRef<'_, f64>>,
) -> Mat<f64> {
    let d = a * u;
    match noise {
        Some(n) => d.as_ref() + n,
        None => d,
    }
}

/// Draws an i.i.d. zero-mean Gaussian noise vector of the given length.
///
/// `sigma` is the standard deviation and must be finite and non-negative.
/// The generator is supplied by the caller, typically seeded through
/// [`crate::utils::seeded_rng`] so fixtures stay reproducible.
pub fn gaussian_noise<R: Rng>(rng: &mut R, len: usize, sigma: f64) -> Result<Mat<f64>, LcoError> {
    let normal = Normal::new(0.0, sigma).map_err(|e| {
        LcoErrorKind::InvalidConfig(format!("invalid noise standard deviation {sigma}: {e}"))
    })?;
    Ok(Mat::from_fn(len, 1, |_, _| normal.sample(rng)))
}
