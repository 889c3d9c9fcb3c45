//! CLI entry point: render one preset and install it into the app bundle.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use wineicon::IconSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    /// Polygon wine-glass silhouette on an opaque canvas
    Silhouette,
    /// Silhouette drawn on an alpha canvas, flattened onto a white matte
    Matte,
    /// Wine-glass emoji glyph from a system color-emoji font
    #[cfg(feature = "emoji")]
    Emoji,
}

impl From<Style> for wineicon::IconStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Silhouette => wineicon::IconStyle::Silhouette,
            Style::Matte => wineicon::IconStyle::Matte,
            #[cfg(feature = "emoji")]
            Style::Emoji => wineicon::IconStyle::Emoji,
        }
    }
}

#[derive(Parser)]
#[command(name = "wineicon", about = "Render the SimpleWineManager app icon", version)]
struct Args {
    /// Preset to render
    #[arg(long, value_enum, default_value = "silhouette")]
    style: Style,

    /// Write the PNG somewhere other than the bundle's appiconset
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut spec = IconSpec::for_style(args.style.into());
    if let Some(out) = args.out {
        spec.output = out;
    }

    match wineicon::install(&spec) {
        Ok(path) => println!("Icon saved to {}", path.display()),
        // The emoji preset reports the failure and exits normally; the
        // other presets let it reach the process exit status.
        #[cfg(feature = "emoji")]
        Err(e) if args.style == Style::Emoji => {
            log::error!("icon not written: {e}");
            eprintln!("Error creating icon: {e}");
        }
        Err(e) => return Err(Box::new(e)),
    }
    Ok(())
}
