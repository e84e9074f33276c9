//! Physical constants and the numerical floors used by the field sampler.
//!
//! ## Units
//!
//! Scenes are expressed in relative units by default: the Coulomb constant is
//! `1.0`, charges are plain signed magnitudes and lengths are dimensionless.
//! [`COULOMB_CONSTANT_SI`] is provided for callers who want SI potentials
//! (volts) from charges in coulombs and positions in meters.

use crate::math::Scalar;

/// Coulomb constant in relative units, as used by the reference scene.
pub const COULOMB_CONSTANT_RELATIVE: Scalar = 1.0;

/// Coulomb constant `k = 1 / (4π ε₀)` in N·m²/C², with ε₀ from CODATA 2018.
pub const COULOMB_CONSTANT_SI: Scalar = 8.987_551_792_3e9;

/// Lower bound applied to charge distances before dividing.
///
/// A sample point sitting on a charge sees `r = DISTANCE_FLOOR` instead of zero,
/// which keeps the potential finite (and large) at the singularity.
pub const DISTANCE_FLOOR: Scalar = 1.0e-6;

/// Term added to `Ex² + Ey²` before the square root when normalizing directions.
///
/// Along symmetry lines the field can vanish exactly; this keeps the unit
/// direction well defined (it collapses towards zero length instead of NaN).
pub const FIELD_MAGNITUDE_FLOOR_SQ: Scalar = 1.0e-12;

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn si_constant_matches_codata_permittivity() {
        let eps0 = 8.854_187_812_8e-12;
        assert_relative_eq!(1.0 / (4.0 * PI * eps0), COULOMB_CONSTANT_SI, max_relative = 1.0e-9);
    }
}
