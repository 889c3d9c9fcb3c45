//! Destination handling for the app bundle's icon set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::RenderedIcon;

/// Fixed asset path inside the SimpleWineManager bundle, relative to the
/// working directory.
pub const APPICONSET_PATH: &str =
    "SimpleWineManager/SimpleWineManager/Assets.xcassets/AppIcon.appiconset/AppIcon.png";

/// Write the encoded icon to `dest`, creating parent directories as needed.
/// An existing file at `dest` is overwritten.
pub fn install(icon: &RenderedIcon, dest: &Path) -> Result<PathBuf> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, &icon.png_data)?;
    log::info!(
        "installed {}x{} icon at {}",
        icon.width,
        icon.height,
        dest.display()
    );
    Ok(dest.to_path_buf())
}
