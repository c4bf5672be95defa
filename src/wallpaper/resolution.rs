//! Screen resolution detection

use regex::Regex;
use std::fmt;
use std::str::FromStr;

use super::common::run_command;
use super::error::{Result, WallpaperError};
use crate::common::desktop::Desktop;

/// Used when the display cannot be queried
pub const FALLBACK: Resolution = Resolution {
    width: 1920,
    height: 1080,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = WallpaperError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WallpaperError::ResolutionUnavailable(format!("cannot parse {:?}", s));
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(WallpaperError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Prints the main screen's frame size in points, e.g. `1440x900`
const MAIN_SCREEN_SCRIPT: &str = "ObjC.import('AppKit'); \
    var size = $.NSScreen.mainScreen.frame.size; \
    size.width + 'x' + size.height";

/// Detect the primary display resolution for `desktop`
pub fn detect(desktop: &Desktop) -> Result<Resolution> {
    match desktop {
        Desktop::MacOs => {
            let stdout = run_query("osascript", &["-l", "JavaScript", "-e", MAIN_SCREEN_SCRIPT])?;
            parse_main_screen(&stdout)
        }
        Desktop::Sway => {
            let stdout = run_query("swaymsg", &["-t", "get_outputs", "-r"])?;
            parse_sway_outputs(&stdout)
        }
        Desktop::Hyprland => {
            let stdout = run_query("hyprctl", &["monitors", "-j"])?;
            parse_hyprland_monitors(&stdout)
        }
        Desktop::Gnome | Desktop::Kde | Desktop::Other(_) => {
            let stdout = run_query("xrandr", &[])?;
            parse_xrandr(&stdout)
        }
    }
}

fn run_query(program: &str, args: &[&str]) -> Result<String> {
    let output = run_command(program, args)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn positive(w: Option<i64>, h: Option<i64>) -> Option<Resolution> {
    let width = u32::try_from(w?).ok().filter(|&v| v > 0)?;
    let height = u32::try_from(h?).ok().filter(|&v| v > 0)?;
    Some(Resolution { width, height })
}

/// Parse the `WxH` point size printed by [`MAIN_SCREEN_SCRIPT`].
///
/// AppKit reports floats; fractional sizes are truncated.
fn parse_main_screen(stdout: &str) -> Result<Resolution> {
    let invalid = || WallpaperError::ResolutionUnavailable(format!("unexpected screen size {:?}", stdout.trim()));
    let (w, h) = stdout.trim().split_once('x').ok_or_else(invalid)?;
    let dimension = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 1.0 && *v <= f64::from(u32::MAX))
            .map(|v| v.trunc() as u32)
    };
    match (dimension(w), dimension(h)) {
        (Some(width), Some(height)) => Ok(Resolution { width, height }),
        _ => Err(invalid()),
    }
}

fn parse_sway_outputs(stdout: &str) -> Result<Resolution> {
    let json: serde_json::Value = serde_json::from_str(stdout)
        .map_err(|e| WallpaperError::ResolutionUnavailable(format!("invalid swaymsg output: {}", e)))?;
    json.as_array()
        .into_iter()
        .flatten()
        .filter(|out| out["active"].as_bool().unwrap_or(false))
        .find_map(|out| positive(out["rect"]["width"].as_i64(), out["rect"]["height"].as_i64()))
        .ok_or_else(|| WallpaperError::ResolutionUnavailable("no active sway output".to_string()))
}

fn parse_hyprland_monitors(stdout: &str) -> Result<Resolution> {
    let json: serde_json::Value = serde_json::from_str(stdout)
        .map_err(|e| WallpaperError::ResolutionUnavailable(format!("invalid hyprctl output: {}", e)))?;
    let monitors = json.as_array().map(Vec::as_slice).unwrap_or_default();
    monitors
        .iter()
        .find(|m| m["focused"].as_bool().unwrap_or(false))
        .or_else(|| monitors.first())
        .and_then(|m| positive(m["width"].as_i64(), m["height"].as_i64()))
        .ok_or_else(|| WallpaperError::ResolutionUnavailable("no hyprland monitor".to_string()))
}

fn parse_xrandr(stdout: &str) -> Result<Resolution> {
    // Example: "HDMI-1 connected primary 1920x1080+0+0"
    let re = Regex::new(r"connected (?:primary )?([0-9]+x[0-9]+)")
        .map_err(|e| WallpaperError::ResolutionUnavailable(e.to_string()))?;
    let primary = stdout
        .lines()
        .find(|line| line.contains(" connected primary "))
        .and_then(|line| re.captures(line));
    let caps = primary
        .or_else(|| re.captures(stdout))
        .ok_or_else(|| WallpaperError::ResolutionUnavailable("no connected xrandr output".to_string()))?;
    caps[1].parse()
}
