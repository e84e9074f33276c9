//! Plain CSV dump of every sample point.

use std::io::{self, Write};

use crate::sampler::SampledField;

/// Writes `x,y,potential,ex,ey` rows in row-major grid order.
pub fn write_field_csv<W: Write>(mut w: W, field: &SampledField) -> io::Result<()> {
    writeln!(w, "x,y,potential,ex,ey")?;
    for (j, i, p) in field.grid().points() {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            p.x,
            p.y,
            field.potential()[(j, i)],
            field.ex()[(j, i)],
            field.ey()[(j, i)]
        )?;
    }
    Ok(())
}
