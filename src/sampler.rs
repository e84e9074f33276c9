//! Superposition of point-charge potentials and fields over a sample grid.

use tracing::debug;

use crate::constants::FIELD_MAGNITUDE_FLOOR_SQ;
use crate::errors::{FieldMapError, Result};
use crate::fields::{clamped_distance, PointCharge};
use crate::grid::SampleGrid;
use crate::math::{floored_hypot, Grid2, Scalar};

/// Potential and field components sampled on a grid. All three matrices share the grid's shape.
#[derive(Debug, Clone)]
pub struct SampledField {
    grid: SampleGrid,
    potential: Grid2,
    ex: Grid2,
    ey: Grid2,
}

/// Unit field directions on the sample grid, used only for arrows.
#[derive(Debug, Clone)]
pub struct DirectionField {
    /// x component of `E / |E|`.
    pub ux: Grid2,
    /// y component of `E / |E|`.
    pub uy: Grid2,
}

/// Accumulates the contributions of a fixed charge set with Coulomb constant `k`.
#[derive(Debug, Clone)]
pub struct FieldSampler {
    charges: Vec<PointCharge>,
    coulomb_constant: Scalar,
}

struct Accumulators {
    potential: Grid2,
    ex: Grid2,
    ey: Grid2,
}

impl Accumulators {
    fn zeros(grid: &SampleGrid) -> Self {
        Self { potential: grid.zeros(), ex: grid.zeros(), ey: grid.zeros() }
    }

    fn superpose(mut self, grid: &SampleGrid, charge: &PointCharge, k: Scalar) -> Self {
        for (j, i, p) in grid.points() {
            let r_vec = p - charge.position;
            let r = clamped_distance(p, charge.position);
            let kq = k * charge.charge;
            self.potential[(j, i)] += kq / r;
            let r3 = r * r * r;
            self.ex[(j, i)] += kq * r_vec.x / r3;
            self.ey[(j, i)] += kq * r_vec.y / r3;
        }
        self
    }
}

impl FieldSampler {
    /// Creates a sampler, rejecting non-finite charges or a bad Coulomb constant.
    pub fn new(charges: Vec<PointCharge>, coulomb_constant: Scalar) -> Result<Self> {
        if !(coulomb_constant.is_finite() && coulomb_constant > 0.0) {
            return Err(FieldMapError::invalid(format!(
                "coulomb constant must be positive and finite, got {coulomb_constant}"
            )));
        }
        if let Some((idx, bad)) = charges.iter().enumerate().find(|(_, c)| {
            !(c.charge.is_finite() && c.position.x.is_finite() && c.position.y.is_finite())
        }) {
            return Err(FieldMapError::invalid(format!("charge {} is not finite: {bad:?}", idx + 1)));
        }
        Ok(Self { charges, coulomb_constant })
    }

    /// Charges being superposed.
    #[must_use]
    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    /// Coulomb constant applied to every contribution.
    #[must_use]
    pub fn coulomb_constant(&self) -> Scalar {
        self.coulomb_constant
    }

    /// Samples V, Ex and Ey on `grid`, folding in one charge at a time.
    ///
    /// An empty charge list leaves every sample at zero.
    #[must_use]
    pub fn sample(&self, grid: &SampleGrid) -> SampledField {
        let (rows, cols) = grid.shape();
        debug!(rows, cols, charges = self.charges.len(), "sampling potential and field");
        let acc = self
            .charges
            .iter()
            .fold(Accumulators::zeros(grid), |acc, c| acc.superpose(grid, c, self.coulomb_constant));
        SampledField { grid: grid.clone(), potential: acc.potential, ex: acc.ex, ey: acc.ey }
    }
}

impl SampledField {
    /// Grid the field was sampled on.
    #[must_use]
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Potential V.
    #[must_use]
    pub fn potential(&self) -> &Grid2 {
        &self.potential
    }

    /// Field x component.
    #[must_use]
    pub fn ex(&self) -> &Grid2 {
        &self.ex
    }

    /// Field y component.
    #[must_use]
    pub fn ey(&self) -> &Grid2 {
        &self.ey
    }

    /// Field magnitude with the normalization floor applied.
    #[must_use]
    pub fn magnitude(&self) -> Grid2 {
        self.ex.zip_map(&self.ey, |x, y| floored_hypot(x, y, FIELD_MAGNITUDE_FLOOR_SQ))
    }

    /// Unit field directions `E / sqrt(|E|² + 1e-12)`.
    ///
    /// Where the field vanishes the result shrinks towards zero length instead of
    /// producing NaN.
    #[must_use]
    pub fn directions(&self) -> DirectionField {
        let magnitude = self.magnitude();
        DirectionField {
            ux: self.ex.component_div(&magnitude),
            uy: self.ey.component_div(&magnitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DISTANCE_FLOOR;
    use crate::fields::potential_from_point_charges;
    use crate::grid::{Domain, Resolution};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_sampler() -> FieldSampler {
        FieldSampler::new(
            vec![
                PointCharge::new(2.0, 0.0, 1.0),
                PointCharge::new(-1.0, -1.0, -0.5),
                PointCharge::new(-1.0, 1.0, -0.5),
            ],
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn shapes_match_grid() {
        let grid = SampleGrid::new(Domain::default(), Resolution::new(40, 25)).unwrap();
        let field = reference_sampler().sample(&grid);
        assert_eq!(field.potential().shape(), grid.shape());
        assert_eq!(field.ex().shape(), grid.shape());
        assert_eq!(field.ey().shape(), grid.shape());
        let dirs = field.directions();
        assert_eq!(dirs.ux.shape(), grid.shape());
        assert_eq!(dirs.uy.shape(), grid.shape());
    }

    #[test]
    fn empty_charge_list_yields_zero_fields() {
        let grid = SampleGrid::new(Domain::default(), Resolution::square(16)).unwrap();
        let field = FieldSampler::new(Vec::new(), 1.0).unwrap().sample(&grid);
        assert!(field.potential().iter().all(|v| *v == 0.0));
        assert!(field.ex().iter().all(|v| *v == 0.0));
        assert!(field.ey().iter().all(|v| *v == 0.0));
        assert!(field.directions().ux.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn grid_samples_agree_with_pointwise_superposition() {
        let sampler = reference_sampler();
        let grid = SampleGrid::new(Domain::default(), Resolution::new(31, 17)).unwrap();
        let field = sampler.sample(&grid);
        for (j, i, p) in grid.points() {
            let expected = potential_from_point_charges(p, sampler.charges(), 1.0);
            assert_relative_eq!(field.potential()[(j, i)], expected, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn grid_point_on_charge_stays_finite() {
        // 17 points over [-8, 8] puts a sample at x = -1 and x = 1; 17 over [-4, 4] hits y = -0.5.
        let grid = SampleGrid::new(Domain::default(), Resolution::new(17, 17)).unwrap();
        let field = reference_sampler().sample(&grid);
        assert!(field.potential().iter().all(|v| v.is_finite()));
        assert!(field.ex().iter().all(|v| v.is_finite()));
        assert!(field.ey().iter().all(|v| v.is_finite()));
        let j = grid.ys().iter().position(|y| *y == -0.5).unwrap();
        let i = grid.xs().iter().position(|x| *x == -1.0).unwrap();
        assert!(field.potential()[(j, i)] < -1.0e5);
    }

    #[test]
    fn directions_are_unit_where_field_is_nonzero() {
        let grid = SampleGrid::new(Domain::default(), Resolution::square(60)).unwrap();
        let field = reference_sampler().sample(&grid);
        let dirs = field.directions();
        for (j, i, _) in grid.points() {
            let e2 = field.ex()[(j, i)].powi(2) + field.ey()[(j, i)].powi(2);
            if e2 > 1.0e-6 {
                let n2 = dirs.ux[(j, i)].powi(2) + dirs.uy[(j, i)].powi(2);
                assert_abs_diff_eq!(n2, 1.0, epsilon = 1.0e-5);
            }
        }
    }

    #[test]
    fn vanishing_field_does_not_produce_nan() {
        // Midpoint of two equal charges: E = 0 exactly.
        let sampler = FieldSampler::new(
            vec![PointCharge::new(1.0, -1.0, 0.0), PointCharge::new(1.0, 1.0, 0.0)],
            1.0,
        )
        .unwrap();
        let grid = SampleGrid::new(Domain::square(2.0), Resolution::square(5)).unwrap();
        let dirs = sampler.sample(&grid).directions();
        assert_abs_diff_eq!(dirs.ux[(2, 2)], 0.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(dirs.uy[(2, 2)], 0.0, epsilon = 1.0e-12);
        assert!(dirs.ux.iter().chain(dirs.uy.iter()).all(|v| !v.is_nan()));
    }

    #[test]
    fn zero_magnitude_charge_contributes_nothing() {
        let sampler = FieldSampler::new(vec![PointCharge::new(0.0, -1.0, -0.5)], 1.0).unwrap();
        let grid = SampleGrid::new(Domain::default(), Resolution::square(17)).unwrap();
        let field = sampler.sample(&grid);
        assert!(field.potential().iter().all(|v| *v == 0.0));
        assert!(field.ex().iter().all(|v| *v == 0.0));
        assert!(field.ey().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn coincident_charges_stay_finite_and_superpose() {
        let sampler = FieldSampler::new(
            vec![PointCharge::new(1.0, -1.0, -0.5), PointCharge::new(1.0, -1.0, -0.5)],
            1.0,
        )
        .unwrap();
        // 17 points per axis put a grid node exactly on (-1, -0.5).
        let grid = SampleGrid::new(Domain::default(), Resolution::square(17)).unwrap();
        let field = sampler.sample(&grid);
        let dirs = field.directions();
        assert!(field.potential().iter().all(|v| v.is_finite()));
        assert!(field.ex().iter().chain(field.ey().iter()).all(|v| v.is_finite()));
        assert!(dirs.ux.iter().chain(dirs.uy.iter()).all(|v| v.is_finite()));

        let j = grid.ys().iter().position(|y| *y == -0.5).unwrap();
        let i = grid.xs().iter().position(|x| *x == -1.0).unwrap();
        assert_relative_eq!(field.potential()[(j, i)], 2.0 / DISTANCE_FLOOR, max_relative = 1.0e-12);
    }

    #[test]
    fn non_finite_charge_is_rejected() {
        let bad = FieldSampler::new(vec![PointCharge::new(Scalar::NAN, 0.0, 0.0)], 1.0);
        assert!(matches!(bad, Err(FieldMapError::InvalidConfig(_))));
        let bad_k = FieldSampler::new(Vec::new(), 0.0);
        assert!(matches!(bad_k, Err(FieldMapError::InvalidConfig(_))));
    }
}
