//! Point-charge sources and pointwise superposition of their potential and field.

mod electrostatic;

pub use electrostatic::{
    PointCharge,
    clamped_distance,
    net_charge,
    potential_from_point_charges,
    electric_field_from_point_charges,
};
