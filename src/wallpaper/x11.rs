use std::ffi::OsStr;
use std::path::Path;

use super::common::run_command;
use super::error::Result;

/// Apply wallpaper with feh, for sessions without a dedicated backend
pub fn apply_wallpaper(path: &Path) -> Result<()> {
    run_command("feh", &[OsStr::new("--bg-scale"), path.as_os_str()])?;
    Ok(())
}
