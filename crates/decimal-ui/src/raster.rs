use anyhow::{anyhow, Context};
use resvg::{tiny_skia, usvg};

/// Rasterizes an SVG document to PNG bytes.
///
/// `scale` multiplies the document size, e.g. `2.0` for a high-DPI export.
/// System fonts are loaded so numerals and captions render.
pub fn rasterize_png(svg: &str, scale: f32) -> anyhow::Result<Vec<u8>> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(anyhow!("scale must be a positive number, got {scale}"));
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).context("parsing SVG")?;
    let size = tree
        .size()
        .to_int_size()
        .scale_by(scale)
        .ok_or_else(|| anyhow!("scaled image size is empty"))?;

    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow!("cannot allocate a {}x{} pixmap", size.width(), size.height()))?;
    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    log::debug!("rasterized {}x{} png", size.width(), size.height());
    pixmap.encode_png().context("encoding PNG")
}

#[cfg(test)]
mod tests {
    use decimal_engine::coords::Vec2;
    use decimal_engine::theme::Theme;
    use decimal_time::{to_decimal_time, StandardTime};

    use super::*;
    use crate::scene::{render_face, FaceConfig};
    use crate::svg::render_svg;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn renders_a_face_to_png() {
        let standard = StandardTime::new(9, 15, 0, 0).unwrap();
        let config = FaceConfig { width: 320.0, height: 560.0, ..FaceConfig::default() };
        let mut list = render_face(&standard, &to_decimal_time(&standard), Theme::Ocean.palette(), &config);
        let svg = render_svg(&mut list, config.viewport());

        let png = rasterize_png(&svg, 1.0).unwrap();
        assert!(png.starts_with(PNG_MAGIC));
        // IHDR width and height, big-endian
        assert_eq!(&png[16..20], &320u32.to_be_bytes());
        assert_eq!(&png[20..24], &560u32.to_be_bytes());
    }

    #[test]
    fn scale_multiplies_dimensions() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20"><rect width="10" height="20" fill="#000"/></svg>"##;
        let png = rasterize_png(svg, 2.0).unwrap();
        assert_eq!(&png[16..20], &20u32.to_be_bytes());
        assert_eq!(&png[20..24], &40u32.to_be_bytes());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(rasterize_png("not svg", 1.0).is_err());
        assert!(rasterize_png("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1\" height=\"1\"/>", 0.0).is_err());
    }
}
