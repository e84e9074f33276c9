//! Contour level selection.
//!
//! Potential falls off like `1/r`, so evenly spaced levels either crowd around
//! the charges or leave the far field empty. Levels are drawn from three bands
//! instead: a dense linear band around zero, two moderate linear bands, and a
//! logarithmic band mirrored to both signs.

use serde::{Deserialize, Serialize};

use crate::errors::{FieldMapError, Result};
use crate::math::Scalar;
use crate::spacing::{linspace, logspace};

/// `count` samples between `start` and `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// First value.
    pub start: Scalar,
    /// Last value.
    pub stop: Scalar,
    /// Number of values, endpoints included.
    pub count: usize,
}

impl Band {
    /// Creates a band.
    #[must_use]
    pub const fn new(start: Scalar, stop: Scalar, count: usize) -> Self {
        Self { start, stop, count }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(self.start.is_finite() && self.stop.is_finite()) {
            return Err(FieldMapError::invalid(format!("{name} band bounds must be finite")));
        }
        if self.count == 0 {
            return Err(FieldMapError::invalid(format!("{name} band needs at least one level")));
        }
        Ok(())
    }

    fn linear(&self) -> Vec<Scalar> {
        linspace(self.start, self.stop, self.count)
    }
}

/// Parameters of the three level bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelBands {
    /// Linear band straddling zero.
    pub near: Band,
    /// Linear band on the positive side.
    pub mid_positive: Band,
    /// Linear band on the negative side.
    pub mid_negative: Band,
    /// Logarithmic band on the positive side, mirrored to negative values.
    pub far: Band,
}

impl Default for LevelBands {
    fn default() -> Self {
        Self {
            near: Band::new(-0.4, 0.4, 13),
            mid_positive: Band::new(0.5, 2.0, 6),
            mid_negative: Band::new(-2.0, -0.5, 6),
            far: Band::new(2.5, 80.0, 7),
        }
    }
}

impl LevelBands {
    /// Checks every band; the far band needs strictly positive bounds.
    pub fn validate(&self) -> Result<()> {
        self.near.validate("near")?;
        self.mid_positive.validate("mid_positive")?;
        self.mid_negative.validate("mid_negative")?;
        self.far.validate("far")?;
        if self.far.start <= 0.0 || self.far.stop <= 0.0 {
            return Err(FieldMapError::invalid("far band is logarithmic and needs positive bounds"));
        }
        Ok(())
    }

    /// Merges the bands into a sorted, duplicate-free level set.
    pub fn select(&self) -> Result<Vec<Scalar>> {
        self.validate()?;
        let far_positive = logspace(self.far.start, self.far.stop, self.far.count);
        let far_negative: Vec<Scalar> = far_positive.iter().rev().map(|v| -v).collect();

        let mut levels: Vec<Scalar> = self
            .near
            .linear()
            .into_iter()
            .chain(self.mid_positive.linear())
            .chain(self.mid_negative.linear())
            .chain(far_positive)
            .chain(far_negative)
            .collect();
        levels.sort_by(Scalar::total_cmp);
        levels.dedup();
        Ok(levels)
    }
}
