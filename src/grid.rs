//! Rectangular sampling domains and the regular lattices laid over them.

use serde::{Deserialize, Serialize};

use crate::errors::{FieldMapError, Result};
use crate::math::{Grid2, R2, Scalar};
use crate::spacing::linspace;

/// Axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Left edge.
    pub x_min: Scalar,
    /// Right edge.
    pub x_max: Scalar,
    /// Bottom edge.
    pub y_min: Scalar,
    /// Top edge.
    pub y_max: Scalar,
}

impl Default for Domain {
    fn default() -> Self {
        Self::new(-8.0, 8.0, -4.0, 4.0)
    }
}

impl Domain {
    /// Creates a domain from its four edges.
    #[must_use]
    pub const fn new(x_min: Scalar, x_max: Scalar, y_min: Scalar, y_max: Scalar) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Square domain `[-half, half]²`.
    #[must_use]
    pub const fn square(half: Scalar) -> Self {
        Self::new(-half, half, -half, half)
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> Scalar {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> Scalar {
        self.y_max - self.y_min
    }

    /// True when `p` lies inside the rectangle, edges included, with `tol` slack.
    #[must_use]
    pub fn contains(&self, p: R2, tol: Scalar) -> bool {
        p.x >= self.x_min - tol
            && p.x <= self.x_max + tol
            && p.y >= self.y_min - tol
            && p.y <= self.y_max + tol
    }

    /// Rejects non-finite or inverted bounds.
    pub fn validate(&self) -> Result<()> {
        let edges = [self.x_min, self.x_max, self.y_min, self.y_max];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(FieldMapError::invalid(format!("domain bounds must be finite: {self:?}")));
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(FieldMapError::invalid(format!("domain must satisfy min < max on both axes: {self:?}")));
        }
        Ok(())
    }
}

/// Number of lattice points along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Points along x (columns).
    pub nx: usize,
    /// Points along y (rows).
    pub ny: usize,
}

impl Resolution {
    /// Creates a resolution of `nx × ny` points.
    #[must_use]
    pub const fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }

    /// Same count on both axes.
    #[must_use]
    pub const fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Total number of lattice points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// True when the lattice has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A lattice needs at least two points per axis to span its domain.
    pub fn validate(&self, what: &str) -> Result<()> {
        if self.nx < 2 || self.ny < 2 {
            return Err(FieldMapError::invalid(format!(
                "{what} resolution must be at least 2x2, got {}x{}",
                self.nx, self.ny
            )));
        }
        Ok(())
    }
}

/// Regular lattice over a [`Domain`], stored as meshgrid coordinate matrices.
///
/// Both matrices have shape `(ny, nx)`; `x()[(j, i)] == xs()[i]` and
/// `y()[(j, i)] == ys()[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    domain: Domain,
    xs: Vec<Scalar>,
    ys: Vec<Scalar>,
    x: Grid2,
    y: Grid2,
}

impl SampleGrid {
    /// Builds the lattice, validating both the domain and the resolution.
    pub fn new(domain: Domain, resolution: Resolution) -> Result<Self> {
        domain.validate()?;
        resolution.validate("grid")?;
        let xs = linspace(domain.x_min, domain.x_max, resolution.nx);
        let ys = linspace(domain.y_min, domain.y_max, resolution.ny);
        let x = Grid2::from_fn(resolution.ny, resolution.nx, |_, i| xs[i]);
        let y = Grid2::from_fn(resolution.ny, resolution.nx, |j, _| ys[j]);
        Ok(Self { domain, xs, ys, x, y })
    }

    /// Domain the lattice spans.
    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Lattice resolution.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.xs.len(), self.ys.len())
    }

    /// `(rows, cols)` of every matrix sampled on this grid.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.ys.len(), self.xs.len())
    }

    /// Column coordinates.
    #[must_use]
    pub fn xs(&self) -> &[Scalar] {
        &self.xs
    }

    /// Row coordinates.
    #[must_use]
    pub fn ys(&self) -> &[Scalar] {
        &self.ys
    }

    /// Meshgrid X matrix.
    #[must_use]
    pub fn x(&self) -> &Grid2 {
        &self.x
    }

    /// Meshgrid Y matrix.
    #[must_use]
    pub fn y(&self) -> &Grid2 {
        &self.y
    }

    /// Coordinates of the point at row `j`, column `i`.
    #[must_use]
    pub fn point(&self, j: usize, i: usize) -> R2 {
        R2::new(self.xs[i], self.ys[j])
    }

    /// Iterates `(j, i, point)` in row-major order.
    pub fn points(&self) -> impl Iterator<Item = (usize, usize, R2)> + '_ {
        (0..self.ys.len())
            .flat_map(move |j| (0..self.xs.len()).map(move |i| (j, i, self.point(j, i))))
    }

    /// Returns a matrix of this grid's shape filled with zeros.
    #[must_use]
    pub fn zeros(&self) -> Grid2 {
        let (rows, cols) = self.shape();
        Grid2::zeros(rows, cols)
    }
}
