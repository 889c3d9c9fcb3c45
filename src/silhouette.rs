//! Wine-glass silhouette geometry for the polygon presets.
//!
//! The silhouette is two convex polygons drawn in the background color on
//! top of the white badge: a rectangular stem anchored at `bottom_y`, and a
//! trapezoidal bowl sitting on the stem top, tapering to two thirds of its
//! width over `bowl_rise` pixels.

use crate::canvas::Canvas;
use crate::IconSpec;

/// Vertices of the stem rectangle, in drawing order.
pub fn stem_points(spec: &IconSpec) -> [(i32, i32); 4] {
    let cx = spec.size as i32 / 2;
    let stem_top = spec.bottom_y - spec.stem_height;
    [
        (cx - spec.stem_width / 2, spec.bottom_y),
        (cx + spec.stem_width / 2, spec.bottom_y),
        (cx + spec.stem_width / 2, stem_top),
        (cx - spec.stem_width / 2, stem_top),
    ]
}

/// Vertices of the bowl trapezoid, in drawing order.
pub fn bowl_points(spec: &IconSpec) -> [(i32, i32); 4] {
    let cx = spec.size as i32 / 2;
    let stem_top = spec.bottom_y - spec.stem_height;
    let bowl_top = stem_top - spec.bowl_rise;
    [
        (cx - spec.bowl_width / 2, stem_top),
        (cx + spec.bowl_width / 2, stem_top),
        (cx + spec.bowl_width / 3, bowl_top),
        (cx - spec.bowl_width / 3, bowl_top),
    ]
}

pub fn paint(canvas: &mut Canvas, spec: &IconSpec) {
    canvas.fill_convex_polygon(&stem_points(spec), spec.background);
    canvas.fill_convex_polygon(&bowl_points(spec), spec.background);
    log::debug!(
        "silhouette painted (stem {}x{}, bowl width {})",
        spec.stem_width,
        spec.stem_height,
        spec.bowl_width
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, PixelMode};

    #[test]
    fn silhouette_lies_within_canvas_bounds() {
        let spec = IconSpec::silhouette();
        let size = spec.size as i32;
        for (x, y) in stem_points(&spec).iter().chain(bowl_points(&spec).iter()) {
            assert!((0..size).contains(x), "x out of bounds: {x}");
            assert!((0..size).contains(y), "y out of bounds: {y}");
        }
    }

    #[test]
    fn bowl_sits_on_stem_top() {
        let spec = IconSpec::silhouette();
        let stem = stem_points(&spec);
        let bowl = bowl_points(&spec);
        assert_eq!(stem[2].1, bowl[0].1);
        assert_eq!(stem[3].1, bowl[1].1);
        assert!(bowl[2].1 < bowl[0].1, "bowl top must be above its base");
    }

    #[test]
    fn paint_fills_glass_and_leaves_badge() {
        let spec = IconSpec::silhouette();
        let mut canvas = Canvas::filled(spec.size, PixelMode::Opaque, spec.background);
        let center = spec.size as i32 / 2;
        canvas.fill_circle(center, center, spec.badge_radius, spec.badge);
        paint(&mut canvas, &spec);

        // inside the stem
        assert_eq!(canvas.pixel(512, 600), [145, 23, 31, 255]);
        // inside the bowl
        assert_eq!(canvas.pixel(512, 250), [145, 23, 31, 255]);
        // badge, off the silhouette
        assert_eq!(canvas.pixel(812, 512), [255, 255, 255, 255]);
        // outside the badge
        assert_eq!(canvas.pixel(10, 10), [145, 23, 31, 255]);
    }
}
