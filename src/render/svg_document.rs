use std::fmt::Write as _;
use std::path::Path;

use svg::node::element::{Circle, Group, Path as SvgPath, Rectangle, Text};
use svg::Document;
use tracing::info;

use super::{FieldRenderer, RenderOptions};
use crate::errors::Result;
use crate::grid::Domain;
use crate::math::{R2, Scalar};
use crate::scene::FieldMap;

const CONTOUR_COLOR: &str = "#1f3fbf";
const ARROW_COLOR: &str = "#d62020";
const POSITIVE_COLOR: &str = "darkred";
const NEGATIVE_COLOR: &str = "blue";
const GRID_COLOR: &str = "#cccccc";

/// Renders field maps as SVG documents.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    options: RenderOptions,
}

/// World-to-pixel transform for one view; SVG's y axis points down.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    view: Domain,
    scale: Scalar,
}

impl Viewport {
    fn new(view: Domain, width_px: u32) -> Self {
        Self { view, scale: Scalar::from(width_px) / view.width() }
    }

    fn width(&self) -> Scalar {
        self.view.width() * self.scale
    }

    fn height(&self) -> Scalar {
        self.view.height() * self.scale
    }

    fn to_px(&self, p: R2) -> (Scalar, Scalar) {
        ((p.x - self.view.x_min) * self.scale, (self.view.y_max - p.y) * self.scale)
    }
}

impl SvgRenderer {
    /// Creates a renderer with the given options.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `map` and writes it to `path`.
    pub fn save(&self, map: &FieldMap, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let document = self.render(map)?;
        svg::save(path, &document)?;
        info!(path = %path.display(), "wrote field map");
        Ok(())
    }

    fn background(&self, vp: &Viewport) -> Group {
        let mut group = Group::new().add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", vp.width())
                .set("height", vp.height())
                .set("fill", "white"),
        );
        if !self.options.show_grid {
            return group;
        }
        let view = vp.view;
        let mut d = String::new();
        for x in (view.x_min.ceil() as i64)..=(view.x_max.floor() as i64) {
            let (px, _) = vp.to_px(R2::new(x as Scalar, 0.0));
            let _ = write!(d, "M{px:.2} 0 L{px:.2} {:.2} ", vp.height());
        }
        for y in (view.y_min.ceil() as i64)..=(view.y_max.floor() as i64) {
            let (_, py) = vp.to_px(R2::new(0.0, y as Scalar));
            let _ = write!(d, "M0 {py:.2} L{:.2} {py:.2} ", vp.width());
        }
        group = group.add(
            SvgPath::new()
                .set("d", d)
                .set("stroke", GRID_COLOR)
                .set("stroke-width", 0.5)
                .set("fill", "none"),
        );
        group
    }

    fn equipotentials(&self, map: &FieldMap, vp: &Viewport) -> Group {
        let mut group = Group::new()
            .set("class", "equipotentials")
            .set("stroke", CONTOUR_COLOR)
            .set("stroke-width", 1.0)
            .set("stroke-dasharray", "6,4")
            .set("stroke-opacity", 0.75)
            .set("fill", "none");
        for line in map.equipotentials().into_iter().filter(|l| !l.is_empty()) {
            let mut d = String::with_capacity(line.segments.len() * 32);
            for seg in &line.segments {
                let (x0, y0) = vp.to_px(seg.start);
                let (x1, y1) = vp.to_px(seg.end);
                let _ = write!(d, "M{x0:.2} {y0:.2} L{x1:.2} {y1:.2} ");
            }
            group = group.add(SvgPath::new().set("d", d).set("data-level", line.level));

            if self.options.label_levels {
                let anchor = line
                    .segments
                    .iter()
                    .map(|s| (s.start + s.end) / 2.0)
                    .find(|m| vp.view.contains(*m, 0.0));
                if let Some(mid) = anchor {
                    let (px, py) = vp.to_px(mid);
                    group = group.add(
                        Text::new(format!("{:.2}", line.level))
                            .set("x", px)
                            .set("y", py)
                            .set("font-size", 8)
                            .set("fill", CONTOUR_COLOR)
                            .set("stroke", "none"),
                    );
                }
            }
        }
        group
    }

    fn arrows(&self, map: &FieldMap, vp: &Viewport) -> Group {
        let lattice = map.arrows().lattice();
        let res = lattice.resolution();
        let spacing = (lattice.domain().width() / (res.nx - 1) as Scalar)
            .min(lattice.domain().height() / (res.ny - 1) as Scalar);
        let length = self.options.arrow_scale * spacing;

        let mut d = String::new();
        for (position, direction) in map.arrows().defined() {
            if !vp.view.contains(position, 0.0) {
                continue;
            }
            let tip = position + direction * length;
            let back = -direction * (0.3 * length);
            let side = R2::new(-direction.y, direction.x) * (0.15 * length);
            let (x0, y0) = vp.to_px(position);
            let (x1, y1) = vp.to_px(tip);
            let (lx, ly) = vp.to_px(tip + back + side);
            let (rx, ry) = vp.to_px(tip + back - side);
            let _ = write!(
                d,
                "M{x0:.2} {y0:.2} L{x1:.2} {y1:.2} M{lx:.2} {ly:.2} L{x1:.2} {y1:.2} L{rx:.2} {ry:.2} "
            );
        }
        Group::new().set("class", "arrows").add(
            SvgPath::new()
                .set("d", d)
                .set("stroke", ARROW_COLOR)
                .set("stroke-width", 2.0)
                .set("stroke-opacity", 0.85)
                .set("fill", "none"),
        )
    }

    fn charges(map: &FieldMap, vp: &Viewport) -> Group {
        let mut group = Group::new().set("class", "charges");
        let radius = 11.0;
        for charge in map.charges() {
            let color = if charge.charge > 0.0 { POSITIVE_COLOR } else { NEGATIVE_COLOR };
            let (cx, cy) = vp.to_px(charge.position);
            let (lx, ly) = vp.to_px(charge.position + R2::new(0.0, 0.35));
            group = group
                .add(
                    Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", radius)
                        .set("fill", color)
                        .set("stroke", "black"),
                )
                .add(
                    Text::new(charge.label())
                        .set("x", lx)
                        .set("y", ly)
                        .set("font-size", 13)
                        .set("font-weight", "bold")
                        .set("text-anchor", "middle")
                        .set("fill", "black"),
                );
        }
        group
    }
}

impl FieldRenderer for SvgRenderer {
    type Output = Document;

    fn render(&self, map: &FieldMap) -> Result<Document> {
        self.options.validate()?;
        let vp = Viewport::new(self.options.view, self.options.width_px);
        let title = Text::new(self.options.title.clone())
            .set("x", vp.width() / 2.0)
            .set("y", 20)
            .set("font-size", 15)
            .set("text-anchor", "middle");
        Ok(Document::new()
            .set("width", vp.width())
            .set("height", vp.height())
            .set("viewBox", (0.0, 0.0, vp.width(), vp.height()))
            .add(self.background(&vp))
            .add(self.equipotentials(map, &vp))
            .add(self.arrows(map, &vp))
            .add(Self::charges(map, &vp))
            .add(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::grid::Resolution;

    fn reference_map() -> FieldMap {
        let config = SceneConfig { sample_resolution: Resolution::square(60), ..SceneConfig::reference() };
        FieldMap::compute(&config).unwrap()
    }

    #[test]
    fn viewport_flips_y_axis() {
        let vp = Viewport::new(Domain::square(2.0), 400);
        assert_eq!(vp.to_px(R2::new(-2.0, 2.0)), (0.0, 0.0));
        assert_eq!(vp.to_px(R2::new(2.0, -2.0)), (400.0, 400.0));
        assert_eq!(vp.height(), 400.0);
    }

    #[test]
    fn document_contains_all_layers() {
        let svg = SvgRenderer::default().render(&reference_map()).unwrap().to_string();
        assert!(svg.contains("equipotentials"));
        assert!(svg.contains("arrows"));
        assert!(svg.contains("+2 C"));
        assert_eq!(svg.matches("-1 C").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 3);
    }

    #[test]
    fn invalid_options_fail_rendering() {
        let renderer = SvgRenderer::new(RenderOptions { width_px: 0, ..RenderOptions::default() });
        assert!(renderer.render(&reference_map()).is_err());
    }
}
