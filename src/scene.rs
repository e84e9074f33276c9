//! End-to-end field map computation for a [`SceneConfig`].

use tracing::{debug, instrument};

use crate::arrows::ArrowField;
use crate::config::SceneConfig;
use crate::contour::{isolines, Isoline};
use crate::errors::Result;
use crate::fields::PointCharge;
use crate::grid::SampleGrid;
use crate::math::Scalar;
use crate::sampler::{FieldSampler, SampledField};

/// Everything a renderer consumes: grid and potential, contour levels, arrows and charges.
#[derive(Debug, Clone)]
pub struct FieldMap {
    charges: Vec<PointCharge>,
    field: SampledField,
    levels: Vec<Scalar>,
    arrows: ArrowField,
}

impl FieldMap {
    /// Validates `config`, samples the field, selects levels and resamples arrows.
    #[instrument(level = "debug", skip(config), fields(charges = config.charges.len()))]
    pub fn compute(config: &SceneConfig) -> Result<Self> {
        config.validate()?;
        let sampler = FieldSampler::new(config.charges.clone(), config.coulomb_constant)?;
        let grid = SampleGrid::new(config.domain, config.sample_resolution)?;
        let field = sampler.sample(&grid);
        let directions = field.directions();
        let arrows = ArrowField::resample(&grid, &directions, config.domain, config.arrow_resolution)?;
        let levels = config.levels.select()?;
        debug!(levels = levels.len(), arrows = arrows.arrows().len(), "field map ready");
        Ok(Self { charges: config.charges.clone(), field, levels, arrows })
    }

    /// Charges the map was computed for.
    #[must_use]
    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    /// Sampled potential and field.
    #[must_use]
    pub fn field(&self) -> &SampledField {
        &self.field
    }

    /// Dense sample grid.
    #[must_use]
    pub fn grid(&self) -> &SampleGrid {
        self.field.grid()
    }

    /// Sorted, duplicate-free contour levels.
    #[must_use]
    pub fn levels(&self) -> &[Scalar] {
        &self.levels
    }

    /// Arrow lattice with interpolated directions.
    #[must_use]
    pub fn arrows(&self) -> &ArrowField {
        &self.arrows
    }

    /// Equipotential isolines at every selected level.
    #[must_use]
    pub fn equipotentials(&self) -> Vec<Isoline> {
        isolines(self.field.grid(), self.field.potential(), &self.levels)
    }
}
