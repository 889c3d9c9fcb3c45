//! Raster canvas and the drawing primitives used by the renderer.
//!
//! The canvas is a plain RGBA pixel buffer. Shapes are filled with
//! containment predicates over their bounding boxes; nothing here is
//! anti-aliased. Encoding always produces 8-bit RGB PNG bytes.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

use crate::error::Result;

/// Whether the canvas participates in the alpha-matte pipeline.
///
/// `Opaque` canvases are encoded as-is. An `Alpha` canvas is expected to be
/// flattened onto a white matte before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMode {
    Opaque,
    Alpha,
}

/// Square drawing surface backed by an RGBA buffer.
pub struct Canvas {
    img: RgbaImage,
    mode: PixelMode,
}

impl Canvas {
    /// Allocate a `size`×`size` canvas filled with `color`.
    pub fn filled(size: u32, mode: PixelMode, color: [u8; 3]) -> Self {
        let img = RgbaImage::from_pixel(size, size, opaque(color));
        Self { img, mode }
    }

    /// Edge length of the square canvas in pixels.
    pub fn size(&self) -> u32 {
        self.img.width()
    }

    pub fn mode(&self) -> PixelMode {
        self.mode
    }

    /// Raw RGBA value at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.img.get_pixel(x, y).0
    }

    /// Fill the disc of the given center and radius.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: [u8; 3]) {
        let px = opaque(color);
        let size = self.img.width() as i32;
        let r2 = i64::from(radius) * i64::from(radius);
        for y in (cy - radius).max(0)..=(cy + radius).min(size - 1) {
            for x in (cx - radius).max(0)..=(cx + radius).min(size - 1) {
                let dx = i64::from(x - cx);
                let dy = i64::from(y - cy);
                if dx * dx + dy * dy <= r2 {
                    self.img.put_pixel(x as u32, y as u32, px);
                }
            }
        }
    }

    /// Fill a convex polygon given its vertices in drawing order.
    pub fn fill_convex_polygon(&mut self, points: &[(i32, i32)], color: [u8; 3]) {
        let px = opaque(color);
        let size = self.img.width() as i32;
        let min_x = points.iter().map(|p| p.0).min().unwrap_or(0).max(0);
        let max_x = points.iter().map(|p| p.0).max().unwrap_or(0).min(size - 1);
        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let max_y = points.iter().map(|p| p.1).max().unwrap_or(0).min(size - 1);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if inside_convex(points, x, y) {
                    self.img.put_pixel(x as u32, y as u32, px);
                }
            }
        }
    }

    /// Alpha-blend a rasterized glyph onto the canvas, centered on it.
    ///
    /// Centering uses the glyph's measured bounding box, not the position it
    /// happened to occupy in its own pixmap.
    #[cfg(feature = "emoji")]
    pub fn blit_centered(&mut self, glyph: &crate::glyph::GlyphRaster) {
        let size = self.img.width() as i32;
        let offset_x = (size - glyph.width as i32) / 2 - glyph.left as i32;
        let offset_y = (size - glyph.height as i32) / 2 - glyph.top as i32;
        let pw = glyph.pixmap.width();
        let pixels = glyph.pixmap.pixels();
        for gy in glyph.top..glyph.top + glyph.height {
            for gx in glyph.left..glyph.left + glyph.width {
                let p = pixels[(gy * pw + gx) as usize];
                let a = u32::from(p.alpha());
                if a == 0 {
                    continue;
                }
                let x = gx as i32 + offset_x;
                let y = gy as i32 + offset_y;
                if x < 0 || y < 0 || x >= size || y >= size {
                    continue;
                }
                let c = p.demultiply();
                let src = [c.red(), c.green(), c.blue()];
                let dst = self.img.get_pixel_mut(x as u32, y as u32);
                for i in 0..3 {
                    dst.0[i] =
                        ((u32::from(src[i]) * a + u32::from(dst.0[i]) * (255 - a)) / 255) as u8;
                }
            }
        }
    }

    /// Composite the canvas onto an opaque white background using the alpha
    /// channel as mask. Afterwards the canvas is fully opaque.
    pub fn flatten_onto_white(&mut self) {
        for p in self.img.pixels_mut() {
            let a = u32::from(p.0[3]);
            for c in 0..3 {
                p.0[c] = ((u32::from(p.0[c]) * a + 255 * (255 - a)) / 255) as u8;
            }
            p.0[3] = 255;
        }
        self.mode = PixelMode::Opaque;
    }

    /// Encode the canvas as 8-bit RGB PNG at best compression.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let rgb = DynamicImage::ImageRgba8(self.img.clone()).into_rgb8();
        let mut png_data = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut png_data, CompressionType::Best, FilterType::Adaptive);
        encoder.write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;
        Ok(png_data)
    }
}

fn opaque(color: [u8; 3]) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

// Same-sign cross-product containment test; edge pixels count as inside.
fn inside_convex(points: &[(i32, i32)], x: i32, y: i32) -> bool {
    let mut pos = false;
    let mut neg = false;
    let n = points.len();
    for i in 0..n {
        let (x1, y1) = points[i];
        let (x2, y2) = points[(i + 1) % n];
        let cross =
            i64::from(x2 - x1) * i64::from(y - y1) - i64::from(y2 - y1) * i64::from(x - x1);
        if cross > 0 {
            pos = true;
        } else if cross < 0 {
            neg = true;
        }
        if pos && neg {
            return false;
        }
    }
    true
}
