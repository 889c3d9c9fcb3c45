//! Emoji glyph rasterization through system color-emoji fonts.
//!
//! The glyph is expressed as a one-element SVG `<text>` document and rendered
//! with `resvg` against the system font database. The resulting pixmap is
//! measured for its tight alpha bounding box so the caller can center the
//! glyph the way the original asset was centered, independent of font
//! metrics. An empty bounding box means no installed font covered the glyph.

use std::sync::Arc;

use resvg::{tiny_skia, usvg};

use crate::error::{Error, Result};

// Families tried in order; resvg falls through to the first one present.
const EMOJI_FAMILIES: &str =
    "Apple Color Emoji, Noto Color Emoji, Segoe UI Emoji, Twemoji Mozilla, EmojiOne Color";

/// A rasterized glyph and its tight alpha bounding box within the pixmap.
pub struct GlyphRaster {
    pub pixmap: tiny_skia::Pixmap,
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// SVG document placing `glyph` at `font_size` on a `surface`-sized page.
fn glyph_document(glyph: &str, font_size: u32, surface: u32) -> String {
    // Baseline in the lower half keeps the ascent on the page; the exact
    // position is irrelevant because the blit re-centers from the bbox.
    let baseline = surface - font_size / 2;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{surface}" height="{surface}"><text x="{x}" y="{baseline}" font-size="{font_size}" text-anchor="middle" font-family="{EMOJI_FAMILIES}">{glyph}</text></svg>"#,
        x = surface / 2,
    )
}

/// Rasterize `glyph` onto a transparent `surface`×`surface` pixmap.
pub fn rasterize(glyph: &str, font_size: u32, surface: u32) -> Result<GlyphRaster> {
    let mut opt = usvg::Options::default();
    // fontdb lives inside Options as an Arc<Database>
    Arc::make_mut(&mut opt.fontdb).load_system_fonts();
    if opt.fontdb.is_empty() {
        return Err(Error::FontUnavailable("no system fonts found".to_string()));
    }
    log::debug!("font database loaded ({} faces)", opt.fontdb.len());

    let svg = glyph_document(glyph, font_size, surface);
    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| Error::GlyphRender(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(surface, surface)
        .ok_or_else(|| Error::GlyphRender(format!("failed to allocate {surface}x{surface} pixmap")))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    match alpha_bbox(&pixmap) {
        Some((left, top, width, height)) => Ok(GlyphRaster {
            pixmap,
            left,
            top,
            width,
            height,
        }),
        None => Err(Error::FontUnavailable(format!(
            "no installed font provides a glyph for {glyph:?}"
        ))),
    }
}

/// Tight bounding box of the pixels with nonzero alpha, as (left, top, w, h).
fn alpha_bbox(pixmap: &tiny_skia::Pixmap) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = (pixmap.width(), pixmap.height());
    let pixels = pixmap.pixels();
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut seen = false;
    for y in 0..h {
        for x in 0..w {
            if pixels[(y * w + x) as usize].alpha() > 0 {
                seen = true;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }
    seen.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}
