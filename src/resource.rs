use std::env;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::debug;

use crate::error::ComposeResult;

pub const LOGO_FILE: &str = "logo.png";
pub const FONT_FILE: &str = "arial.ttf";

const SYSTEM_FONTS: [&str; 6] = [
    "C:\\Windows\\Fonts\\arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

// Lookup
//------------------------------------------------------------------------------

/// Directories searched for bundled resources: the executable's directory
/// first, then the working directory.
pub fn search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(2);
    if let Some(dir) = env::current_exe().ok().as_deref().and_then(Path::parent) {
        dirs.push(dir.to_path_buf());
    }
    if let Ok(dir) = env::current_dir() {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

/// First existing `name` inside `dirs`.
pub fn find_in(dirs: &[PathBuf], name: &str) -> Option<PathBuf> {
    dirs.iter().map(|d| d.join(name)).find(|p| p.is_file())
}

pub fn resource_path(name: &str) -> Option<PathBuf> {
    find_in(&search_dirs(), name)
}

/// Font files to try for the caption, most preferred first.
pub fn font_candidates(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = dirs.iter().map(|d| d.join(FONT_FILE)).collect();
    paths.extend(SYSTEM_FONTS.iter().map(PathBuf::from));
    paths
}

// Logo
//------------------------------------------------------------------------------

/// Opens the logo and shrinks it to fit `max` x `max`, keeping its aspect
/// ratio. Images already inside the box are left at their size.
pub fn load_logo(path: &Path, max: u32) -> ComposeResult<RgbaImage> {
    let img = image::open(path)?;
    let img = if img.width() > max || img.height() > max { img.thumbnail(max, max) } else { img };
    debug!("Loaded logo {} at {}x{}", path.display(), img.width(), img.height());
    Ok(img.into_rgba8())
}
