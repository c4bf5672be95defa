//! Opening a generated wallpaper in the desktop's image viewer

use std::path::{Path, PathBuf};

use super::common::{absolute_path, run_command};
use super::error::Result;

/// Viewer launcher for the platform this binary was built for
pub fn viewer_command() -> &'static str {
    viewer_for(std::env::consts::OS)
}

fn viewer_for(os: &str) -> &'static str {
    match os {
        "macos" => "open",
        _ => "xdg-open",
    }
}

/// Open `path` in the default viewer. Returns the absolute path handed to it.
pub fn show(path: &Path) -> Result<PathBuf> {
    let abs_path = absolute_path(path)?;
    run_command(viewer_command(), &[&abs_path])?;
    Ok(abs_path)
}
