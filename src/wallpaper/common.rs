//! Shared helpers for the external commands the wallpaper pipeline runs

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use super::error::{Result, WallpaperError};
use crate::ui::prelude::*;

/// Run `program` to completion, failing on spawn errors or a non-zero exit
pub fn run_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<Output> {
    emit(
        Level::Debug,
        "wallpaper.command",
        &format!(
            "{} {} {}",
            char::from(NerdFont::Bug),
            program,
            args.iter()
                .map(|a| OsStr::new(a).to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        ),
        None,
    );

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| WallpaperError::CommandUnavailable {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(WallpaperError::from_output(program, &output));
    }
    Ok(output)
}

/// Resolve `path` to an absolute path for commands run from another directory
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .map_err(|source| WallpaperError::ImageNotFound {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_unavailable() {
        let err = run_command("wallpaper-bot-definitely-missing", &["--help"]).unwrap_err();
        assert!(matches!(err, WallpaperError::CommandUnavailable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_command_failure() {
        let err = run_command("sh", &["-c", "echo nope >&2; exit 3"]).unwrap_err();
        match err {
            WallpaperError::ExternalCommandFailure { program, detail } => {
                assert_eq!(program, "sh");
                assert_eq!(detail, "exit code 3: nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_command_returns_output() {
        let out = run_command("sh", &["-c", "printf hi"]).unwrap();
        assert_eq!(out.stdout, b"hi");
    }

    #[test]
    fn absolute_path_of_missing_file_fails() {
        assert!(matches!(
            absolute_path(Path::new("/no/such/wallpaper.png")),
            Err(WallpaperError::ImageNotFound { .. })
        ));
    }
}
