//! Scene descriptions: charges, domain, resolutions, level bands and view.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::COULOMB_CONSTANT_RELATIVE;
use crate::errors::{FieldMapError, Result};
use crate::fields::PointCharge;
use crate::grid::{Domain, Resolution};
use crate::levels::LevelBands;
use crate::math::Scalar;
use crate::render::RenderOptions;

/// Everything needed to compute and draw one field map.
///
/// Missing JSON fields take the values of [`SceneConfig::reference`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Coulomb constant `k` (1.0 in relative units).
    pub coulomb_constant: Scalar,
    /// Charges in drawing order.
    pub charges: Vec<PointCharge>,
    /// Region covered by both the sample grid and the arrow lattice.
    pub domain: Domain,
    /// Dense sample grid resolution.
    pub sample_resolution: Resolution,
    /// Arrow lattice resolution.
    pub arrow_resolution: Resolution,
    /// Contour level bands.
    pub levels: LevelBands,
    /// Renderer options.
    pub render: RenderOptions,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl SceneConfig {
    /// One `+2` charge above two `-1` charges, sampled 180×180 over `[-8, 8] × [-4, 4]`.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            coulomb_constant: COULOMB_CONSTANT_RELATIVE,
            charges: vec![
                PointCharge::new(2.0, 0.0, 1.0),
                PointCharge::new(-1.0, -1.0, -0.5),
                PointCharge::new(-1.0, 1.0, -0.5),
            ],
            domain: Domain::default(),
            sample_resolution: Resolution::square(180),
            arrow_resolution: Resolution::square(10),
            levels: LevelBands::default(),
            render: RenderOptions::default(),
        }
    }

    /// Replaces the charge list.
    #[must_use]
    pub fn with_charges(mut self, charges: Vec<PointCharge>) -> Self {
        self.charges = charges;
        self
    }

    /// Parses a scene from JSON and validates it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), charges = config.charges.len(), "loaded scene");
        Ok(config)
    }

    /// Serializes the scene as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects scenes the sampler cannot evaluate meaningfully.
    pub fn validate(&self) -> Result<()> {
        if !(self.coulomb_constant.is_finite() && self.coulomb_constant > 0.0) {
            return Err(FieldMapError::invalid(format!(
                "coulomb_constant must be positive and finite, got {}",
                self.coulomb_constant
            )));
        }
        for (idx, c) in self.charges.iter().enumerate() {
            if !(c.charge.is_finite() && c.position.x.is_finite() && c.position.y.is_finite()) {
                return Err(FieldMapError::invalid(format!("charge {} is not finite", idx + 1)));
            }
        }
        self.domain.validate()?;
        self.sample_resolution.validate("sample")?;
        self.arrow_resolution.validate("arrow")?;
        self.levels.validate()?;
        self.render.validate()?;
        Ok(())
    }

    /// Logs the charge listing, one line per charge.
    pub fn log_charges(&self) {
        info!("charge coordinates:");
        for (idx, c) in self.charges.iter().enumerate() {
            info!("charge {} ({}): ({}, {})", idx + 1, c.sign_symbol(), c.position.x, c.position.y);
        }
    }
}
