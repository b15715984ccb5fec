//! Static PNG previews of a composed scene.
//!
//! The SVG markup is parsed with `usvg` and rasterized with `resvg` into a
//! tiny-skia pixmap, then converted to a straight-alpha `image` buffer for
//! encoding. Animations obviously do not survive this; the preview shows the
//! fully grown state.

use anyhow::Context as _;

use crate::error::{FloretError, FloretResult};

pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> FloretResult<image::RgbaImage> {
    if width == 0 || height == 0 {
        return Err(FloretError::render("raster width/height must be > 0"));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FloretError::render("failed to allocate pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut rgba8 = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba8);

    image::RgbaImage::from_raw(width, height, rgba8)
        .ok_or_else(|| FloretError::render("pixmap byte length mismatch"))
}

/// tiny-skia pixmaps hold premultiplied alpha; PNG wants straight alpha.
fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}
