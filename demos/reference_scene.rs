use em_fieldmap::prelude::*;

fn main() -> Result<(), FieldMapError> {
    em_fieldmap::init_logging();

    // One +2 charge above two -1 charges, 180x180 samples over [-8, 8] x [-4, 4].
    let config = SceneConfig::reference();
    config.log_charges();

    let map = FieldMap::compute(&config)?;
    let v = map.field().potential();
    println!("levels: {:?}", map.levels());
    println!("V range: [{:.3e}, {:.3e}]", v.min(), v.max());
    println!(
        "arrows: {} of {} defined",
        map.arrows().defined().count(),
        map.arrows().arrows().len()
    );

    let path = std::env::temp_dir().join("reference_scene.svg");
    SvgRenderer::new(config.render.clone()).save(&map, &path)?;
    println!("wrote {}", path.display());
    Ok(())
}
