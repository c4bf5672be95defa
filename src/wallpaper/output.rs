//! Saving generated wallpapers under sequential file names

use anyhow::{Context, Result};
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXTENSION: &str = "png";

/// Next free `<n>.png` path in `dir`: one past the highest existing number
pub fn next_output_path(dir: &Path) -> Result<PathBuf> {
    let mut highest = 0u64;
    if dir.exists() {
        for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(n) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u64>().ok())
            {
                highest = highest.max(n);
            }
        }
    }
    Ok(dir.join(format!("{}.{}", highest + 1, EXTENSION)))
}

/// Write `img` to the next sequential path in `dir`, creating `dir` if needed
pub fn save(img: &RgbImage, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;
    let path = next_output_path(dir)?;
    img.save(&path)
        .with_context(|| format!("writing wallpaper to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_file_is_one() -> Result<()> {
        let dir = tempfile::tempdir()?;
        assert_eq!(next_output_path(dir.path())?, dir.path().join("1.png"));
        let missing = dir.path().join("not-yet");
        assert_eq!(next_output_path(&missing)?, missing.join("1.png"));
        Ok(())
    }

    #[test]
    fn skips_past_highest_number() -> Result<()> {
        let dir = tempfile::tempdir()?;
        for name in ["1.png", "7.png", "3.png", "42.jpg", "notes.txt", "abc.png"] {
            fs::write(dir.path().join(name), b"")?;
        }
        assert_eq!(next_output_path(dir.path())?, dir.path().join("8.png"));
        Ok(())
    }

    #[test]
    fn save_creates_directory_and_increments() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("nested").join("wallpapers");
        let img = RgbImage::from_pixel(4, 2, image::Rgb([1, 2, 3]));

        let first = save(&img, &out)?;
        let second = save(&img, &out)?;
        assert_eq!(first, out.join("1.png"));
        assert_eq!(second, out.join("2.png"));

        let back = image::open(&second)?.to_rgb8();
        assert_eq!(back.dimensions(), (4, 2));
        assert_eq!(back.get_pixel(3, 1).0, [1, 2, 3]);
        Ok(())
    }
}
