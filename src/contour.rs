//! Equipotential extraction with marching squares.

use crate::grid::SampleGrid;
use crate::math::{lerp, Grid2, R2, Scalar};

/// Straight piece of an isoline inside one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: R2,
    /// Second endpoint.
    pub end: R2,
}

/// All segments of one level.
#[derive(Debug, Clone, PartialEq)]
pub struct Isoline {
    /// Value the isoline traces.
    pub level: Scalar,
    /// Unordered cell segments.
    pub segments: Vec<Segment>,
}

impl Isoline {
    /// True when the level never crosses the sampled region.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Point on the edge `a -> b` where the linear ramp between `va` and `vb` meets `level`.
fn crossing(a: R2, b: R2, va: Scalar, vb: Scalar, level: Scalar) -> R2 {
    let t = if vb == va { 0.5 } else { ((level - va) / (vb - va)).clamp(0.0, 1.0) };
    R2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Extracts the isoline of `values` (shaped like `grid`) at `level`.
///
/// Cells with a non-finite corner are skipped. Saddle cells are resolved with
/// the mean of their four corners.
#[must_use]
pub fn isoline(grid: &SampleGrid, values: &Grid2, level: Scalar) -> Isoline {
    let (rows, cols) = grid.shape();
    let mut segments = Vec::new();
    for j in 0..rows.saturating_sub(1) {
        for i in 0..cols.saturating_sub(1) {
            let (bl, br) = (values[(j, i)], values[(j, i + 1)]);
            let (tl, tr) = (values[(j + 1, i)], values[(j + 1, i + 1)]);
            if ![bl, br, tl, tr].iter().all(|v| v.is_finite()) {
                continue;
            }

            let case = u8::from(tl >= level)
                | (u8::from(tr >= level) << 1)
                | (u8::from(br >= level) << 2)
                | (u8::from(bl >= level) << 3);
            if case == 0 || case == 15 {
                continue;
            }

            let p_bl = grid.point(j, i);
            let p_br = grid.point(j, i + 1);
            let p_tl = grid.point(j + 1, i);
            let p_tr = grid.point(j + 1, i + 1);
            let top = crossing(p_tl, p_tr, tl, tr, level);
            let right = crossing(p_tr, p_br, tr, br, level);
            let bottom = crossing(p_bl, p_br, bl, br, level);
            let left = crossing(p_tl, p_bl, tl, bl, level);
            let center_above = (bl + br + tl + tr) / 4.0 >= level;

            let mut push = |start, end| segments.push(Segment { start, end });
            match case {
                1 | 14 => push(left, top),
                2 | 13 => push(top, right),
                3 | 12 => push(left, right),
                4 | 11 => push(right, bottom),
                6 | 9 => push(top, bottom),
                7 | 8 => push(left, bottom),
                5 if center_above => {
                    push(left, bottom);
                    push(top, right);
                }
                5 => {
                    push(left, top);
                    push(right, bottom);
                }
                10 if center_above => {
                    push(left, top);
                    push(right, bottom);
                }
                10 => {
                    push(top, right);
                    push(left, bottom);
                }
                _ => {}
            }
        }
    }
    Isoline { level, segments }
}

/// Extracts one isoline per level, in the order given.
#[must_use]
pub fn isolines(grid: &SampleGrid, values: &Grid2, levels: &[Scalar]) -> Vec<Isoline> {
    levels.iter().map(|&level| isoline(grid, values, level)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Domain, Resolution};
    use approx::assert_relative_eq;

    fn radial_field(grid: &SampleGrid) -> Grid2 {
        let (rows, cols) = grid.shape();
        Grid2::from_fn(rows, cols, |j, i| grid.point(j, i).norm())
    }

    #[test]
    fn circle_isoline_stays_on_radius() {
        let grid = SampleGrid::new(Domain::square(2.0), Resolution::square(81)).unwrap();
        let values = radial_field(&grid);
        let line = isoline(&grid, &values, 1.0);
        assert!(!line.is_empty());
        for seg in &line.segments {
            assert_relative_eq!(seg.start.norm(), 1.0, epsilon = 2.0e-3);
            assert_relative_eq!(seg.end.norm(), 1.0, epsilon = 2.0e-3);
        }
    }

    #[test]
    fn linear_ramp_gives_straight_isoline() {
        let grid = SampleGrid::new(Domain::square(1.0), Resolution::square(11)).unwrap();
        let values = Grid2::from_fn(11, 11, |_, i| grid.xs()[i]);
        let line = isoline(&grid, &values, 0.25);
        assert_eq!(line.segments.len(), 10);
        for seg in &line.segments {
            assert_relative_eq!(seg.start.x, 0.25, epsilon = 1.0e-12);
            assert_relative_eq!(seg.end.x, 0.25, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn out_of_range_level_is_empty() {
        let grid = SampleGrid::new(Domain::square(1.0), Resolution::square(5)).unwrap();
        let values = radial_field(&grid);
        assert!(isoline(&grid, &values, 10.0).is_empty());
        assert!(isoline(&grid, &values, -1.0).is_empty());
    }

    #[test]
    fn non_finite_cells_are_skipped() {
        let grid = SampleGrid::new(Domain::square(1.0), Resolution::square(3)).unwrap();
        let mut values = Grid2::from_fn(3, 3, |_, i| grid.xs()[i]);
        values[(1, 1)] = Scalar::NAN;
        assert!(isoline(&grid, &values, 0.5).is_empty());
    }

    #[test]
    fn saddle_cell_emits_two_segments() {
        let grid = SampleGrid::new(Domain::square(1.0), Resolution::square(2)).unwrap();
        let mut values = Grid2::zeros(2, 2);
        values[(0, 0)] = 1.0;
        values[(1, 1)] = 1.0;
        let lines = isolines(&grid, &values, &[0.5]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].segments.len(), 2);
    }
}
