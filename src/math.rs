//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DMatrix, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors (points and field samples).
pub type R2 = Vector2<Scalar>;
/// Dense row-major view of a sampled quantity: row `j` is `y_j`, column `i` is `x_i`.
pub type Grid2 = DMatrix<Scalar>;

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(a: Scalar, b: Scalar, t: Scalar) -> Scalar {
    a + (b - a) * t
}

/// Squared Euclidean norm of `(x, y)` plus `floor`, square-rooted.
#[inline]
#[must_use]
pub fn floored_hypot(x: Scalar, y: Scalar, floor_sq: Scalar) -> Scalar {
    (x * x + y * y + floor_sq).sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn lerp_hits_endpoints() {
        assert_relative_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_relative_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_relative_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn floored_hypot_never_zero() {
        assert!(floored_hypot(0.0, 0.0, 1.0e-12) > 0.0);
        assert_relative_eq!(floored_hypot(3.0, 4.0, 0.0), 5.0, epsilon = 1.0e-12);
    }
}
