//! Tier projection by isotropic rescaling.
//!
//! Each tier constrains the estimate to the sublevel set `{u : Lk(u) <= eps_k}`.
//! Because every tier objective in this model is a quadratic form centered at
//! the origin (homogeneous of degree 2), the exact projection along the ray
//! through the origin is a simple rescale by `sqrt(eps / Lk(u))`, an O(n)
//! operation.
//!
//! This shortcut is valid *only* for degree-2 homogeneous objectives. If tier
//! objectives are ever extended beyond quadratic forms, this module must be
//! replaced by a true constrained-projection subroutine.

use faer::{Mat, MatRef, prelude::*};

/// Projects `u` onto the sublevel set of a tier objective.
///
/// `value` is the tier penalty `Lk(u)` evaluated by the caller and `eps` the
/// tier tolerance. When the constraint already holds (`value <= eps`) or the
/// penalty is non-positive, `u` is returned unchanged. Otherwise the estimate
/// is rescaled by `sqrt(eps / value)`, which lands exactly on the constraint
/// boundary for quadratic objectives.
pub fn project_tier(u: MatRef<'_, f64>, value: f64, eps: f64) -> Mat<f64> {
    if value <= eps || value <= 0.0 {
        return u.to_owned();
    }
    let scale = (eps / value).sqrt();
    u * Scale(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::l4_value;
    use faer::mat;

    #[test]
    fn test_projection_is_noop_when_constraint_holds() {
        let u: Mat<f64> = mat![[1.0], [2.0]];
        let value = l4_value(u.as_ref()); // 5.0
        let out = project_tier(u.as_ref(), value, 10.0);
        assert_eq!(out, u);
    }

    #[test]
    fn test_projection_is_noop_for_non_positive_value() {
        let u: Mat<f64> = mat![[1.0], [2.0]];
        assert_eq!(project_tier(u.as_ref(), 0.0, 0.0), u);
        assert_eq!(project_tier(u.as_ref(), -1.0, 0.5), u);
    }

    #[test]
    fn test_projection_lands_on_constraint_boundary() {
        // For a degree-2 homogeneous objective the rescale is exact: after
        // projecting, the penalty equals eps up to floating-point error.
        let u: Mat<f64> = mat![[3.0], [4.0]]; // L4(u) = 25
        let eps = 4.0;
        let value = l4_value(u.as_ref());
        assert!(value > eps);

        let projected = project_tier(u.as_ref(), value, eps);
        let new_value = l4_value(projected.as_ref());
        assert!((new_value - eps).abs() < 1e-12);
    }

    #[test]
    fn test_projection_preserves_direction() {
        let u: Mat<f64> = mat![[3.0], [4.0]];
        let projected = project_tier(u.as_ref(), l4_value(u.as_ref()), 4.0);
        // The rescale is isotropic, so the component ratio is unchanged.
        let ratio = projected[(0, 0)] / projected[(1, 0)];
        assert!((ratio - 0.75).abs() < 1e-12);
    }
}
