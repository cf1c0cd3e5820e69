//! Solver configuration.
//!
//! [`LcoConfig`] collects the per-tier weights and tolerances together with the
//! gradient-descent parameters of the LCO iteration. The four-tier arity is
//! encoded in the field types (`[f64; 4]`), so the "four lambdas, four
//! epsilons" invariant cannot be violated at runtime.

use serde::{Deserialize, Serialize};

use crate::error::{LcoError, LcoErrorKind};

/// Number of objective tiers in the lexicographic ordering (L1..L4).
pub const NUM_TIERS: usize = 4;

/// Configuration for a single LCO solve.
///
/// The tiers are ordered by descending priority: L1 (physical invariant),
/// L2 (data fidelity), L3 (statistical coherence), L4 (interpretive proxy).
/// `lambdas[k]` weights tier k+1 in the combined gradient step and
/// `epsilons[k]` bounds its penalty in the projection cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcoConfig {
    /// Non-negative per-tier weights for the combined descent direction.
    pub lambdas: [f64; NUM_TIERS],
    /// Non-negative per-tier sublevel-set tolerances for the projection cascade.
    pub epsilons: [f64; NUM_TIERS],
    /// Gradient-descent step size tau. Must be positive.
    pub step_size: f64,
    /// Hard ceiling on the number of iterations.
    pub max_iters: usize,
    /// Convergence threshold on the Euclidean distance between successive iterates.
    pub tol: f64,
    /// Seed for reproducible stochastic fixtures (see [`crate::utils::seeded_rng`]).
    /// The solve loop itself is deterministic and never draws from a generator.
    pub seed: u64,
}

impl LcoConfig {
    /// Creates a configuration with the given tier weights and tolerances and
    /// default iteration parameters (`step_size = 1e-3`, `max_iters = 500`,
    /// `tol = 1e-6`, `seed = 42`).
    pub fn new(lambdas: [f64; NUM_TIERS], epsilons: [f64; NUM_TIERS]) -> Self {
        Self {
            lambdas,
            epsilons,
            step_size: 1e-3,
            max_iters: 500,
            tol: 1e-6,
            seed: 42,
        }
    }

    /// Validates the configuration, failing fast on any out-of-range field.
    ///
    /// Checks that every lambda and epsilon is finite and non-negative, that
    /// `step_size` is finite and strictly positive, that `max_iters` is at
    /// least one, and that `tol` is finite and non-negative.
    pub fn validate(&self) -> Result<(), LcoError> {
        for (k, &lambda) in self.lambdas.iter().enumerate() {
            if !lambda.is_finite() || lambda < 0.0 {
                return Err(LcoErrorKind::InvalidConfig(format!(
                    "lambdas[{k}] must be finite and non-negative, got {lambda}"
                ))
                .into());
            }
        }
        for (k, &eps) in self.epsilons.iter().enumerate() {
            if !eps.is_finite() || eps < 0.0 {
                return Err(LcoErrorKind::InvalidConfig(format!(
                    "epsilons[{k}] must be finite and non-negative, got {eps}"
                ))
                .into());
            }
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(LcoErrorKind::InvalidConfig(format!(
                "step_size must be finite and positive, got {}",
                self.step_size
            ))
            .into());
        }
        if self.max_iters == 0 {
            return Err(
                LcoErrorKind::InvalidConfig("max_iters must be at least 1".to_string()).into(),
            );
        }
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(LcoErrorKind::InvalidConfig(format!(
                "tol must be finite and non-negative, got {}",
                self.tol
            ))
            .into());
        }
        Ok(())
    }
}
