//! Resampling of unit field directions onto a coarse arrow lattice.
//!
//! The dense sample grid is regular, so each direction component is
//! interpolated bilinearly inside the grid cell that contains the arrow
//! point. Arrow points outside the sample rectangle (the convex hull of the
//! sample points) get no direction: the value is reported as missing instead
//! of being extrapolated.

use tracing::warn;

use crate::errors::Result;
use crate::grid::{Domain, Resolution, SampleGrid};
use crate::math::{lerp, Grid2, R2, Scalar};
use crate::sampler::DirectionField;

/// Relative slack used when deciding whether a point lies on the hull boundary.
const HULL_TOLERANCE: Scalar = 1.0e-9;

/// One arrow of the coarse lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Arrow anchor.
    pub position: R2,
    /// Interpolated direction, `None` outside the sampled region.
    pub direction: Option<R2>,
}

/// Arrows laid out row-major over a coarse lattice.
#[derive(Debug, Clone)]
pub struct ArrowField {
    lattice: SampleGrid,
    arrows: Vec<Arrow>,
}

impl ArrowField {
    /// Interpolates `directions` (sampled on `grid`) at every point of a
    /// `resolution` lattice spanning `domain`.
    pub fn resample(
        grid: &SampleGrid,
        directions: &DirectionField,
        domain: Domain,
        resolution: Resolution,
    ) -> Result<Self> {
        let lattice = SampleGrid::new(domain, resolution)?;
        let arrows: Vec<Arrow> = lattice
            .points()
            .map(|(_, _, p)| {
                let ux = interpolate(grid, &directions.ux, p);
                let uy = interpolate(grid, &directions.uy, p);
                let direction = ux.zip(uy).map(|(x, y)| R2::new(x, y));
                Arrow { position: p, direction }
            })
            .collect();
        let missing = arrows.iter().filter(|a| a.direction.is_none()).count();
        if missing > 0 {
            warn!(missing, total = arrows.len(), "arrow points outside the sampled region have no direction");
        }
        Ok(Self { lattice, arrows })
    }

    /// Coarse lattice the arrows sit on.
    #[must_use]
    pub fn lattice(&self) -> &SampleGrid {
        &self.lattice
    }

    /// All arrows in row-major order.
    #[must_use]
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    /// Arrow at row `j`, column `i` of the lattice.
    #[must_use]
    pub fn get(&self, j: usize, i: usize) -> &Arrow {
        &self.arrows[j * self.lattice.xs().len() + i]
    }

    /// Arrows whose direction is defined.
    pub fn defined(&self) -> impl Iterator<Item = (R2, R2)> + '_ {
        self.arrows.iter().filter_map(|a| a.direction.map(|d| (a.position, d)))
    }
}

/// Finds the cell `[axis[k], axis[k + 1]]` holding `v` and the fractional offset inside it.
fn locate(axis: &[Scalar], v: Scalar) -> Option<(usize, Scalar)> {
    let (first, last) = (*axis.first()?, *axis.last()?);
    if axis.len() < 2 || !v.is_finite() {
        return None;
    }
    let tol = HULL_TOLERANCE * (last - first).abs().max(1.0);
    if v < first - tol || v > last + tol {
        return None;
    }
    let v = v.clamp(first, last);
    let k = axis.partition_point(|a| *a <= v).saturating_sub(1).min(axis.len() - 2);
    let span = axis[k + 1] - axis[k];
    let t = if span > 0.0 { ((v - axis[k]) / span).clamp(0.0, 1.0) } else { 0.0 };
    Some((k, t))
}

/// Bilinear value of `values` (shaped like `grid`) at `p`, or `None` outside the grid.
#[must_use]
pub fn interpolate(grid: &SampleGrid, values: &Grid2, p: R2) -> Option<Scalar> {
    let (i, tx) = locate(grid.xs(), p.x)?;
    let (j, ty) = locate(grid.ys(), p.y)?;
    let bottom = lerp(values[(j, i)], values[(j, i + 1)], tx);
    let top = lerp(values[(j + 1, i)], values[(j + 1, i + 1)], tx);
    Some(lerp(bottom, top, ty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::PointCharge;
    use crate::sampler::FieldSampler;
    use approx::assert_relative_eq;

    fn plane_grid() -> (SampleGrid, Grid2) {
        let grid = SampleGrid::new(Domain::new(-2.0, 2.0, -1.0, 1.0), Resolution::new(9, 5)).unwrap();
        let values = Grid2::from_fn(5, 9, |j, i| 3.0 * grid.xs()[i] - 2.0 * grid.ys()[j] + 1.0);
        (grid, values)
    }

    #[test]
    fn bilinear_reproduces_planes_exactly() {
        let (grid, values) = plane_grid();
        for p in [R2::new(0.3, -0.7), R2::new(-2.0, 1.0), R2::new(1.99, 0.01), R2::new(2.0, -1.0)] {
            let v = interpolate(&grid, &values, p).unwrap();
            assert_relative_eq!(v, 3.0 * p.x - 2.0 * p.y + 1.0, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn points_outside_hull_are_missing() {
        let (grid, values) = plane_grid();
        assert!(interpolate(&grid, &values, R2::new(2.5, 0.0)).is_none());
        assert!(interpolate(&grid, &values, R2::new(0.0, -1.01)).is_none());
        assert!(interpolate(&grid, &values, R2::new(Scalar::NAN, 0.0)).is_none());
    }

    #[test]
    fn coarse_lattice_on_same_domain_is_fully_defined() {
        let sampler = FieldSampler::new(
            vec![
                PointCharge::new(2.0, 0.0, 1.0),
                PointCharge::new(-1.0, -1.0, -0.5),
                PointCharge::new(-1.0, 1.0, -0.5),
            ],
            1.0,
        )
        .unwrap();
        let grid = SampleGrid::new(Domain::default(), Resolution::square(180)).unwrap();
        let field = sampler.sample(&grid);
        let arrows =
            ArrowField::resample(&grid, &field.directions(), Domain::default(), Resolution::square(10))
                .unwrap();
        assert_eq!(arrows.arrows().len(), 100);
        assert_eq!(arrows.defined().count(), 100);
        // Far corner: the field is smooth, so interpolated directions stay close to unit length.
        let corner = arrows.get(0, 0).direction.unwrap();
        assert_relative_eq!(corner.norm(), 1.0, epsilon = 1.0e-2);
    }

    #[test]
    fn wider_lattice_reports_missing_arrows() {
        let (grid, values) = plane_grid();
        let dirs = DirectionField { ux: values.clone(), uy: values };
        let arrows =
            ArrowField::resample(&grid, &dirs, Domain::new(-3.0, 3.0, -1.0, 1.0), Resolution::new(7, 3))
                .unwrap();
        assert!(arrows.get(1, 0).direction.is_none());
        assert!(arrows.get(1, 6).direction.is_none());
        assert!(arrows.get(1, 3).direction.is_some());
        assert_eq!(arrows.defined().count(), 3 * 5);
    }
}
