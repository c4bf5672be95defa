use std::path::Path;
use std::process::{Command, Stdio};

use super::common::run_command;
use super::error::{Result, WallpaperError};

/// Apply wallpaper on Hyprland using swww
pub fn apply_wallpaper(path: &Path) -> Result<()> {
    if which::which("swww").is_err() {
        return Err(WallpaperError::ExternalCommandFailure {
            program: "swww".to_string(),
            detail: "not installed; swww is required for wallpaper support on Hyprland"
                .to_string(),
        });
    }

    // Start the daemon if a query cannot reach it
    if run_command("swww", &["query"]).is_err() {
        Command::new("swww-daemon")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| WallpaperError::CommandUnavailable {
                program: "swww-daemon".to_string(),
                source,
            })?;

        // Give the daemon a moment to start
        std::thread::sleep(std::time::Duration::from_millis(100));
    }

    run_command("swww", &[Path::new("img"), path])?;
    Ok(())
}
