use serde::{Deserialize, Serialize};

use crate::constants::DISTANCE_FLOOR;
use crate::math::{R2, Scalar};

/// Point charge fixed in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ChargeRecord", into = "ChargeRecord")]
pub struct PointCharge {
    /// Position in scene units.
    pub position: R2,
    /// Signed charge magnitude.
    pub charge: Scalar,
}

/// On-disk shape of a charge: either `{"charge": q, "x": x, "y": y}` or `[q, x, y]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum ChargeRecord {
    Named { charge: Scalar, x: Scalar, y: Scalar },
    Triple(Scalar, Scalar, Scalar),
}

impl From<ChargeRecord> for PointCharge {
    fn from(record: ChargeRecord) -> Self {
        match record {
            ChargeRecord::Named { charge, x, y } | ChargeRecord::Triple(charge, x, y) => {
                Self::new(charge, x, y)
            }
        }
    }
}

impl From<PointCharge> for ChargeRecord {
    fn from(c: PointCharge) -> Self {
        Self::Named { charge: c.charge, x: c.position.x, y: c.position.y }
    }
}

impl PointCharge {
    /// Creates a charge of magnitude `charge` at `(x, y)`.
    #[must_use]
    pub fn new(charge: Scalar, x: Scalar, y: Scalar) -> Self {
        Self { position: R2::new(x, y), charge }
    }

    /// `'+'` for positive charges, `'-'` otherwise.
    #[must_use]
    pub fn sign_symbol(&self) -> char {
        if self.charge > 0.0 { '+' } else { '-' }
    }

    /// Marker label such as `+2 C` or `-1 C`; whole magnitudes drop the fraction.
    #[must_use]
    pub fn label(&self) -> String {
        let magnitude = self.charge.abs();
        let digits = if magnitude.fract() == 0.0 && magnitude < 1.0e15 {
            format!("{}", magnitude as i64)
        } else {
            format!("{magnitude}")
        };
        let sign = if self.charge > 0.0 {
            "+"
        } else if self.charge < 0.0 {
            "-"
        } else {
            ""
        };
        format!("{sign}{digits} C")
    }
}

/// Distance from `point` to `source`, floored at [`DISTANCE_FLOOR`].
#[inline]
#[must_use]
pub fn clamped_distance(point: R2, source: R2) -> Scalar {
    (point - source).norm().max(DISTANCE_FLOOR)
}

/// Sum of all charge magnitudes.
#[must_use]
pub fn net_charge(charges: &[PointCharge]) -> Scalar {
    charges.iter().map(|c| c.charge).sum()
}

/// Electric potential V at `point` due to discrete point charges, `k` being the Coulomb constant.
///
/// The distance to each charge is clamped before dividing, so a point sitting
/// exactly on a charge yields a large finite value rather than infinity.
#[must_use]
pub fn potential_from_point_charges(point: R2, charges: &[PointCharge], k: Scalar) -> Scalar {
    charges
        .iter()
        .map(|c| k * c.charge / clamped_distance(point, c.position))
        .sum()
}

/// Electric field E at `point` due to discrete point charges.
#[must_use]
pub fn electric_field_from_point_charges(point: R2, charges: &[PointCharge], k: Scalar) -> R2 {
    charges.iter().fold(R2::zeros(), |e, c| {
        let r_vec = point - c.position;
        let r = clamped_distance(point, c.position);
        e + r_vec * (k * c.charge / (r * r * r))
    })
}
