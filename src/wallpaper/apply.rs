//! Dispatch from the detected desktop to its wallpaper backend

use std::path::{Path, PathBuf};

use super::common::absolute_path;
use super::error::Result;
use super::{gnome, hyprland, kwin, macos, sway, x11};
use crate::common::desktop::Desktop;

/// Name of the utility that sets the wallpaper on `desktop`
pub fn backend_name(desktop: &Desktop) -> &'static str {
    match desktop {
        Desktop::MacOs => "osascript",
        Desktop::Gnome => "dconf",
        Desktop::Kde => "plasma-apply-wallpaperimage",
        Desktop::Hyprland => "swww",
        Desktop::Sway => "swaymsg",
        Desktop::Other(_) => "feh",
    }
}

/// Set `path` as the desktop background. Returns the absolute path handed to the backend.
pub fn apply_wallpaper(desktop: &Desktop, path: &Path) -> Result<PathBuf> {
    let abs_path = absolute_path(path)?;
    match desktop {
        Desktop::MacOs => macos::apply_wallpaper(&abs_path)?,
        Desktop::Gnome => gnome::apply_wallpaper(&abs_path)?,
        Desktop::Kde => kwin::apply_wallpaper(&abs_path)?,
        Desktop::Hyprland => hyprland::apply_wallpaper(&abs_path)?,
        Desktop::Sway => sway::apply_wallpaper(&abs_path)?,
        Desktop::Other(_) => x11::apply_wallpaper(&abs_path)?,
    }
    Ok(abs_path)
}
