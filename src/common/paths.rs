use std::path::PathBuf;

/// Directory name used under the user's data directory
pub const APP_DIR_NAME: &str = "wallpaper-bot";

/// Default directory for generated wallpapers.
///
/// Falls back to `./output` when the platform has no local data directory.
pub fn default_output_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("wallpapers"))
        .unwrap_or_else(|| PathBuf::from("output"))
}
