use std::path::Path;

use super::common::run_command;
use super::error::Result;

/// Apply wallpaper through System Events, covering every desktop (space)
pub fn apply_wallpaper(path: &Path) -> Result<()> {
    run_command("osascript", &["-e", set_picture_script(path).as_str()])?;
    Ok(())
}

fn set_picture_script(path: &Path) -> String {
    let escaped = path
        .to_string_lossy()
        .replace('\\', "\\\\")
        .replace('"', "\\\"");
    format!(
        "tell application \"System Events\"\n\
         \ttell every desktop\n\
         \t\tset picture to \"{}\"\n\
         \tend tell\n\
         end tell",
        escaped
    )
}
