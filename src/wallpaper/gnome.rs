use std::path::Path;

use super::common::run_command;
use super::error::Result;

const BACKGROUND_KEY: &str = "/org/gnome/desktop/background";

pub fn apply_wallpaper(path: &Path) -> Result<()> {
    let uri = format!("'file://{}'", path.display());

    for key in ["picture-uri", "picture-uri-dark"] {
        let key = format!("{}/{}", BACKGROUND_KEY, key);
        run_command("dconf", &["write", key.as_str(), uri.as_str()])?;
    }

    let options = format!("{}/picture-options", BACKGROUND_KEY);
    run_command("dconf", &["write", options.as_str(), "'zoom'"])?;

    Ok(())
}
