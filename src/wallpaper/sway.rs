use std::path::Path;

use super::common::run_command;
use super::error::Result;

pub fn apply_wallpaper(path: &Path) -> Result<()> {
    // swaymsg output "*" bg <path> fill
    let command = format!("output \"*\" bg \"{}\" fill", path.display());
    run_command("swaymsg", &[command])?;
    Ok(())
}
