#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and numerical floors.
pub mod constants;
/// Shared numerical types built on `nalgebra`.
pub mod math;
/// Linear and logarithmic sample sequences.
pub mod spacing;
/// Point charges and pointwise superposition.
pub mod fields;
/// Sampling domains and regular lattices.
pub mod grid;
/// Grid-wide potential and field accumulation.
pub mod sampler;
/// Arrow lattice resampling of field directions.
pub mod arrows;
/// Contour level selection.
pub mod levels;
/// Marching-squares equipotential extraction.
pub mod contour;
/// Scene configuration.
pub mod config;
/// End-to-end field map computation.
pub mod scene;
/// Field map renderers.
pub mod render;
/// Field exports (VTK, CSV).
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a `tracing` subscriber for binaries and demos.
///
/// `RUST_LOG` overrides the default filter of `info` globally and `debug` for this crate.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,em_fieldmap=debug"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
