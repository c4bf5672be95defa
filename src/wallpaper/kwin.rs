use std::path::Path;

use super::common::run_command;
use super::error::{Result, WallpaperError};

const QDBUS_CANDIDATES: [&str; 3] = ["qdbus6", "qdbus", "qdbus-qt5"];

pub fn apply_wallpaper(path: &Path) -> Result<()> {
    if run_command("plasma-apply-wallpaperimage", &[path]).is_ok() {
        return Ok(());
    }

    let script = plasma_script(path);
    // Plasma 6 ships qdbus6, Plasma 5 qdbus or qdbus-qt5 depending on distro
    for qdbus in QDBUS_CANDIDATES {
        if run_command(
            qdbus,
            &[
                "org.kde.plasmashell",
                "/PlasmaShell",
                "org.kde.PlasmaShell.evaluateScript",
                script.as_str(),
            ],
        )
        .is_ok()
        {
            return Ok(());
        }
    }

    Err(WallpaperError::ExternalCommandFailure {
        program: "plasma-apply-wallpaperimage".to_string(),
        detail: "neither plasma-apply-wallpaperimage nor qdbus found/worked".to_string(),
    })
}

fn plasma_script(path: &Path) -> String {
    let escaped = path
        .to_string_lossy()
        .replace('\\', "\\\\")
        .replace('"', "\\\"");
    format!(
        r#"
        desktops().forEach(d => {{
            d.currentConfigGroup = Array("Wallpaper", "org.kde.image", "General");
            d.writeConfig("Image", "file://{}");
            d.reloadConfig();
        }});
        "#,
        escaped
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_escapes_quotes() {
        let script = plasma_script(Path::new("/tmp/a \"b\".png"));
        assert!(script.contains(r#""file:///tmp/a \"b\".png""#));
    }
}
