use em_fieldmap::fields::{electric_field_from_point_charges, potential_from_point_charges, PointCharge};
use em_fieldmap::math::R2;
use em_fieldmap::spacing::linspace;

fn main() {
    // Unit dipole along x, charges 2 apart.
    let dipole = [PointCharge::new(1.0, -1.0, 0.0), PointCharge::new(-1.0, 1.0, 0.0)];

    // Scan the line y = 0.5 parallel to the axis, then the bisector (where V stays at zero).
    println!("x, y, V, Ex, Ey");
    for x in linspace(-4.0, 4.0, 17) {
        let p = R2::new(x, 0.5);
        let v = potential_from_point_charges(p, &dipole, 1.0);
        let e = electric_field_from_point_charges(p, &dipole, 1.0);
        println!("{:.3}, {:.3}, {:.6e}, {:.6e}, {:.6e}", p.x, p.y, v, e.x, e.y);
    }
    for y in linspace(-4.0, 4.0, 9) {
        let p = R2::new(0.0, y);
        let v = potential_from_point_charges(p, &dipole, 1.0);
        let e = electric_field_from_point_charges(p, &dipole, 1.0);
        println!("{:.3}, {:.3}, {:.6e}, {:.6e}, {:.6e}", p.x, p.y, v, e.x, e.y);
    }
}
