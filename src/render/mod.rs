//! Rendering of computed field maps.
//!
//! Renderers are pure consumers of a [`FieldMap`]: they draw equipotentials at
//! the selected levels, arrows at the lattice points that have a direction, and
//! a labelled marker per charge.

mod svg_document;

use serde::{Deserialize, Serialize};

use crate::errors::{FieldMapError, Result};
use crate::grid::Domain;
use crate::math::Scalar;
use crate::scene::FieldMap;

pub use self::svg_document::SvgRenderer;

/// Trait implemented by every field map sink.
pub trait FieldRenderer {
    /// Rendered artifact.
    type Output;

    /// Draws `map`.
    fn render(&self, map: &FieldMap) -> Result<Self::Output>;
}

/// Drawing parameters shared by renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Output width in pixels; the height follows the view's aspect ratio.
    pub width_px: u32,
    /// Visible window in scene units.
    pub view: Domain,
    /// Arrow length as a fraction of the arrow lattice spacing.
    pub arrow_scale: Scalar,
    /// Draw a faint unit grid behind the map.
    pub show_grid: bool,
    /// Write the level value next to each equipotential.
    pub label_levels: bool,
    /// Heading drawn at the top of the image.
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_px: 1200,
            view: Domain::square(4.2),
            arrow_scale: 0.8,
            show_grid: true,
            label_levels: true,
            title: "Electric field of point charges".to_owned(),
        }
    }
}

impl RenderOptions {
    /// Rejects empty canvases, bad views and non-positive arrow scales.
    pub fn validate(&self) -> Result<()> {
        if self.width_px == 0 {
            return Err(FieldMapError::invalid("render width must be positive"));
        }
        self.view.validate()?;
        if !(self.arrow_scale.is_finite() && self.arrow_scale > 0.0) {
            return Err(FieldMapError::invalid(format!(
                "arrow_scale must be positive and finite, got {}",
                self.arrow_scale
            )));
        }
        Ok(())
    }
}
