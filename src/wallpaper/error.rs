use thiserror::Error;

#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error("Invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    #[error("Invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("{program} failed: {detail}")]
    ExternalCommandFailure { program: String, detail: String },

    #[error("Failed to run {program}: {source}")]
    CommandUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Wallpaper image {} is not accessible: {source}", path.display())]
    ImageNotFound {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not detect screen resolution: {0}")]
    ResolutionUnavailable(String),
}

impl WallpaperError {
    /// Build a command failure from a finished process
    pub fn from_output(program: &str, output: &std::process::Output) -> Self {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let detail = match output.status.code() {
            Some(code) if stderr.is_empty() => format!("exit code {}", code),
            Some(code) => format!("exit code {}: {}", code, stderr),
            None => format!("terminated by signal: {}", stderr),
        };
        WallpaperError::ExternalCommandFailure {
            program: program.to_string(),
            detail,
        }
    }
}

pub type Result<T> = std::result::Result<T, WallpaperError>;
