//! Compute a point-charge field map and render it to SVG.
//!
//! Usage: `fieldmap [--config scene.json] [--output field.svg] [--vtk field.vtk] [--csv field.csv]`

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use em_fieldmap::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "fieldmap")]
#[command(about = "Equipotentials and field directions of 2D point charges")]
struct Args {
    /// JSON scene file; the built-in reference scene when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// SVG output path
    #[arg(long, default_value = "field.svg")]
    output: PathBuf,

    /// Optional VTK export of the sampled grid
    #[arg(long)]
    vtk: Option<PathBuf>,

    /// Optional CSV export of the sampled grid
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the effective scene as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    em_fieldmap::init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SceneConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => SceneConfig::reference(),
    };
    if args.dump_config {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }
    config.log_charges();

    let map = FieldMap::compute(&config).context("computing field map")?;
    info!(levels = map.levels().len(), "selected contour levels");

    SvgRenderer::new(config.render.clone())
        .save(&map, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if let Some(path) = &args.vtk {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_vtk_structured_points(&mut out, map.field(), "point charge field")?;
        out.flush()?;
        info!(path = %path.display(), "wrote VTK export");
    }
    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_field_csv(&mut out, map.field())?;
        out.flush()?;
        info!(path = %path.display(), "wrote CSV export");
    }
    Ok(())
}
