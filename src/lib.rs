//! SimpleWineManager icon renderer
//!
//! Procedurally draws the wine-glass application icon and installs it as a
//! PNG asset in the app bundle. One parameterized renderer exposes three
//! named presets:
//!
//! - **Silhouette** (default): opaque wine-red canvas, white badge circle,
//!   polygon stem-and-bowl silhouette
//! - **Matte**: the same drawing on an alpha-capable canvas, flattened onto
//!   an opaque white matte before encoding
//! - **Emoji** (feature `emoji`, default-enabled): the 🍷 glyph from a
//!   system color-emoji font, centered in the badge
//!
//! # Example
//!
//! ```no_run
//! use wineicon::{IconSpec, IconStyle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = IconSpec::for_style(IconStyle::Silhouette);
//! let path = wineicon::install(&spec)?;
//! println!("Icon saved to {}", path.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod bundle;
pub mod canvas;
pub mod silhouette;

// Emoji glyph backend (system color-emoji fonts via resvg)
#[cfg(feature = "emoji")]
pub mod glyph;

use canvas::{Canvas, PixelMode};

/// Named presets of the icon renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// Polygon silhouette on an opaque canvas
    Silhouette,
    /// Polygon silhouette drawn through the alpha-matte pipeline
    Matte,
    /// Emoji glyph on the badge
    #[cfg(feature = "emoji")]
    Emoji,
}

/// Parameter set for one render.
///
/// All values are fixed per preset; construct with [`IconSpec::for_style`]
/// or the per-preset constructors. `output` may be redirected (the CLI does
/// this for `--out`), everything else is a geometry or color constant. All
/// shapes lie within the canvas bounds by construction.
#[derive(Debug, Clone)]
pub struct IconSpec {
    pub style: IconStyle,
    /// Canvas edge length in pixels
    pub size: u32,
    /// Radius of the white badge circle
    pub badge_radius: i32,
    /// Canvas background color
    pub background: [u8; 3],
    /// Badge fill color
    pub badge: [u8; 3],
    /// Stem rectangle width
    pub stem_width: i32,
    /// Stem rectangle height
    pub stem_height: i32,
    /// Bowl trapezoid base width
    pub bowl_width: i32,
    /// Vertical extent of the bowl above the stem top
    pub bowl_rise: i32,
    /// Baseline the stem is anchored to
    pub bottom_y: i32,
    /// Glyph drawn by the emoji preset
    pub glyph: String,
    /// Font size for the glyph
    pub glyph_size: u32,
    /// Destination of the encoded PNG
    pub output: PathBuf,
}

impl IconSpec {
    /// The polygon-silhouette preset on an opaque canvas.
    pub fn silhouette() -> Self {
        Self {
            style: IconStyle::Silhouette,
            size: 1024,
            badge_radius: 412, // 1024/2 minus the 100px margin
            background: [145, 23, 31],
            badge: [255, 255, 255],
            stem_width: 80,
            stem_height: 350,
            bowl_width: 400,
            bowl_rise: 200,
            bottom_y: 700,
            glyph: "\u{1F377}".to_string(),
            glyph_size: 512,
            output: PathBuf::from(bundle::APPICONSET_PATH),
        }
    }

    /// The silhouette drawn through the alpha-matte pipeline.
    pub fn matte() -> Self {
        Self {
            style: IconStyle::Matte,
            ..Self::silhouette()
        }
    }

    /// The emoji-glyph preset.
    #[cfg(feature = "emoji")]
    pub fn emoji() -> Self {
        Self {
            style: IconStyle::Emoji,
            badge_radius: 450, // 900px badge diameter
            background: [217, 37, 80],
            ..Self::silhouette()
        }
    }

    pub fn for_style(style: IconStyle) -> Self {
        match style {
            IconStyle::Silhouette => Self::silhouette(),
            IconStyle::Matte => Self::matte(),
            #[cfg(feature = "emoji")]
            IconStyle::Emoji => Self::emoji(),
        }
    }
}

impl Default for IconSpec {
    fn default() -> Self {
        Self::silhouette()
    }
}

/// An encoded icon held in memory between render and install.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Draw the icon described by `spec` and encode it as PNG bytes.
pub fn render(spec: &IconSpec) -> Result<RenderedIcon> {
    let mode = if spec.style == IconStyle::Matte {
        PixelMode::Alpha
    } else {
        PixelMode::Opaque
    };
    let mut canvas = Canvas::filled(spec.size, mode, spec.background);

    let center = spec.size as i32 / 2;
    canvas.fill_circle(center, center, spec.badge_radius, spec.badge);
    log::debug!("badge circle filled (radius {})", spec.badge_radius);

    match spec.style {
        IconStyle::Silhouette | IconStyle::Matte => silhouette::paint(&mut canvas, spec),
        #[cfg(feature = "emoji")]
        IconStyle::Emoji => {
            let glyph = glyph::rasterize(&spec.glyph, spec.glyph_size, spec.size)?;
            canvas.blit_centered(&glyph);
        }
    }

    if canvas.mode() == PixelMode::Alpha {
        canvas.flatten_onto_white();
    }

    let png_data = canvas.encode_png()?;
    Ok(RenderedIcon {
        width: spec.size,
        height: spec.size,
        png_data,
    })
}

/// Render `spec` and write it to its destination path, creating directories
/// as needed. Returns the written path.
pub fn install(spec: &IconSpec) -> Result<PathBuf> {
    let icon = render(spec)?;
    bundle::install(&icon, &spec.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_the_silhouette_preset() {
        let spec = IconSpec::default();
        assert_eq!(spec.style, IconStyle::Silhouette);
        assert_eq!(spec.size, 1024);
        assert_eq!(spec.background, [145, 23, 31]);
        assert_eq!(spec.badge_radius, 412);
        assert_eq!(spec.output, PathBuf::from(bundle::APPICONSET_PATH));
    }

    #[test]
    fn for_style_picks_matching_constants() {
        let matte = IconSpec::for_style(IconStyle::Matte);
        assert_eq!(matte.style, IconStyle::Matte);
        assert_eq!(matte.background, [145, 23, 31]);

        #[cfg(feature = "emoji")]
        {
            let emoji = IconSpec::for_style(IconStyle::Emoji);
            assert_eq!(emoji.background, [217, 37, 80]);
            assert_eq!(emoji.badge_radius, 450);
            assert_eq!(emoji.glyph, "\u{1F377}");
        }
    }

    #[test]
    fn render_reports_canvas_dimensions() {
        let icon = render(&IconSpec::silhouette()).unwrap();
        assert_eq!(icon.width, 1024);
        assert_eq!(icon.height, 1024);
        assert!(!icon.png_data.is_empty());
    }
}
