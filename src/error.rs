//! This module defines the custom error types for the library.
//!
//! This module centralizes all failure conditions of the LCO solver and its
//! diagnostic helpers into a single enum: [`LcoError`].
//!
//! Using the [`thiserror`] crate allows us to create idiomatic error types with minimal
//! boilerplate. Note that [`faer::linalg::evd::EvdError`] does not implement the standard
//! [`std::error::Error`] trait, so we wrap it manually to provide a compatible error type.
use thiserror::Error;

/// Represents all possible errors that can occur while setting up or running a solve.
///
#[derive(Error, Debug)]
#[error(transparent)]
pub struct LcoError(#[from] LcoErrorKind);

/// Private enum containing the distinct kinds of errors.
/// This separation allows for a clean `Display` implementation via [`thiserror`]
/// while handling non-standard error types manually.
#[derive(Error, Debug, PartialEq)]
pub(crate) enum LcoErrorKind {
    /// Indicates that the dimensions of two operands are incompatible, e.g. a
    /// weighting operator whose shape does not match the unknown or the data.
    #[error(
        "Dimension mismatch for {name}: expected {expected_rows}x{expected_cols} but got {actual_rows}x{actual_cols}."
    )]
    DimensionMismatch {
        name: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// Indicates that a [`crate::config::LcoConfig`] field has an invalid value.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),

    /// Raised by the Gaussian entropy diagnostic when the supplied covariance
    /// matrix is not positive definite.
    #[error("Covariance must be positive definite (smallest eigenvalue: {min_eigenvalue:e}).")]
    NotPositiveDefinite { min_eigenvalue: f64 },

    /// Wraps an error originating from [`faer`]'s eigendecomposition module.
    #[error("A numerical error occurred during an eigendecomposition: {0:?}")]
    EvdError(faer::linalg::evd::EvdError),
}

// Manually implement PartialEq for the public error type.
// We compare the inner `LcoErrorKind`.
impl PartialEq for LcoError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
