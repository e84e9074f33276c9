//! Convenience re-exports for building field maps.

pub use crate::arrows::{Arrow, ArrowField};
pub use crate::config::SceneConfig;
pub use crate::constants::*;
pub use crate::contour::{isoline, isolines, Isoline, Segment};
pub use crate::errors::FieldMapError;
pub use crate::fields::{
    PointCharge,
    net_charge,
    potential_from_point_charges,
    electric_field_from_point_charges,
};
pub use crate::grid::{Domain, Resolution, SampleGrid};
pub use crate::io::{write_field_csv, write_vtk_structured_points};
pub use crate::levels::{Band, LevelBands};
pub use crate::math::{Grid2, R2, Scalar};
pub use crate::render::{FieldRenderer, RenderOptions, SvgRenderer};
pub use crate::sampler::{DirectionField, FieldSampler, SampledField};
pub use crate::scene::FieldMap;
pub use crate::spacing::{linspace, logspace};
