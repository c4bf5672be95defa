use std::env;

/// Environment variable naming the running desktop environment
pub const DESKTOP_ENV_VAR: &str = "XDG_CURRENT_DESKTOP";

/// Desktop environments with a dedicated wallpaper backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Desktop {
    /// macOS Finder desktop
    MacOs,
    /// GNOME (and derivatives reading the same dconf keys)
    Gnome,
    /// KDE Plasma
    Kde,
    /// Hyprland compositor
    Hyprland,
    /// Sway compositor
    Sway,
    /// Any other desktop; handled by feh
    Other(String),
}

impl Desktop {
    /// Detect the desktop for the running process
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            return Desktop::MacOs;
        }
        Self::from_identifier(env::var(DESKTOP_ENV_VAR).ok().as_deref())
    }

    /// Map an `XDG_CURRENT_DESKTOP` value to a desktop.
    ///
    /// The variable may hold a colon separated list such as `ubuntu:GNOME`;
    /// the first recognised entry wins.
    pub fn from_identifier(identifier: Option<&str>) -> Self {
        let Some(raw) = identifier.map(str::trim).filter(|s| !s.is_empty()) else {
            return Desktop::Other("unknown".to_string());
        };

        let lower = raw.to_lowercase();
        let known = lower
            .split(':')
            .find_map(|entry| match entry.trim() {
                "hyprland" => Some(Desktop::Hyprland),
                "sway" => Some(Desktop::Sway),
                "gnome" | "gnome-classic" | "unity" | "budgie" => Some(Desktop::Gnome),
                "kde" | "plasma" => Some(Desktop::Kde),
                _ => None,
            });
        known.unwrap_or(Desktop::Other(lower))
    }

    /// Get a human-readable name for the desktop
    pub fn name(&self) -> String {
        match self {
            Desktop::MacOs => "macOS".to_string(),
            Desktop::Gnome => "GNOME".to_string(),
            Desktop::Kde => "KDE Plasma".to_string(),
            Desktop::Hyprland => "Hyprland".to_string(),
            Desktop::Sway => "Sway".to_string(),
            Desktop::Other(name) => name.clone(),
        }
    }
}
