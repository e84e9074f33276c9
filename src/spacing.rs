//! Evenly and logarithmically spaced sample sequences.

use crate::math::Scalar;

/// Generates `n` linearly spaced samples in [start, stop].
///
/// The last sample is exactly `stop`, so bands that share an endpoint produce
/// bit-identical values and collapse when deduplicated.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as Scalar })
                .collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop`.
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start > 0.0 && stop > 0.0, "logspace bounds must be positive");
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let log_start = start.log10();
            let log_stop = stop.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}
