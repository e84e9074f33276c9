//! VTK legacy ASCII export for ParaView and other VTK-based tools.
//!
//! The sample grid is written as `STRUCTURED_POINTS` with the potential as
//! point scalars and `(Ex, Ey, 0)` as point vectors. VTK orders points with x
//! varying fastest, which matches the row-major walk of the grid.

use std::io::{self, Write};

use crate::math::Scalar;
use crate::sampler::SampledField;

/// Writes the VTK legacy file header.
pub fn write_vtk_header<W: Write>(mut writer: W, title: &str) -> io::Result<()> {
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    // The title line is limited to one line of text.
    writeln!(writer, "{}", title.lines().next().unwrap_or_default())?;
    writeln!(writer, "ASCII")?;
    Ok(())
}

/// Writes `field` as a structured-points dataset.
pub fn write_vtk_structured_points<W: Write>(mut writer: W, field: &SampledField, title: &str) -> io::Result<()> {
    let grid = field.grid();
    let (xs, ys) = (grid.xs(), grid.ys());
    let spacing = |axis: &[Scalar]| if axis.len() > 1 { axis[1] - axis[0] } else { 1.0 };

    write_vtk_header(&mut writer, title)?;
    writeln!(writer, "DATASET STRUCTURED_POINTS")?;
    writeln!(writer, "DIMENSIONS {} {} 1", xs.len(), ys.len())?;
    writeln!(writer, "ORIGIN {:.16e} {:.16e} 0", xs[0], ys[0])?;
    writeln!(writer, "SPACING {:.16e} {:.16e} 1", spacing(xs), spacing(ys))?;
    writeln!(writer, "POINT_DATA {}", xs.len() * ys.len())?;

    writeln!(writer, "SCALARS potential double 1")?;
    writeln!(writer, "LOOKUP_TABLE default")?;
    for (j, i, _) in grid.points() {
        writeln!(writer, "{:.16e}", field.potential()[(j, i)])?;
    }

    writeln!(writer, "VECTORS field double")?;
    for (j, i, _) in grid.points() {
        writeln!(writer, "{:.16e} {:.16e} 0", field.ex()[(j, i)], field.ey()[(j, i)])?;
    }
    Ok(())
}
