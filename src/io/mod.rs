//! I/O helpers for exporting sampled fields.

pub mod csv;
pub mod vtk;

pub use self::csv::write_field_csv;
pub use self::vtk::{write_vtk_header, write_vtk_structured_points};
