use anyhow::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Output directory handed to the binary via --output-dir
    pub fn output_dir(&self) -> PathBuf {
        self.path().join("wallpapers")
    }

    /// Directory searched first on PATH by [`TestEnvironment::run`]
    pub fn bin_dir(&self) -> PathBuf {
        self.path().join("bin")
    }

    /// Install a shell script named `name` into [`TestEnvironment::bin_dir`]
    #[cfg(unix)]
    pub fn fake_command(&self, name: &str, body: &str) -> Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        fs::create_dir_all(self.bin_dir())?;
        let script = self.bin_dir().join(name);
        fs::write(&script, format!("#!/bin/sh\n{}\n", body))?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
        Ok(script)
    }

    /// Run the wallpaper-bot binary with `args`, isolated from the real desktop
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let inherited = env::var_os("PATH").unwrap_or_default();
        let path = env::join_paths(
            std::iter::once(self.bin_dir()).chain(env::split_paths(&inherited)),
        )?;

        let output = Command::new(env!("CARGO_BIN_EXE_wallpaper-bot"))
            .args(args)
            .current_dir(self.path())
            .env("PATH", path)
            .env("XDG_CURRENT_DESKTOP", "wallpaper-bot-test")
            .env_remove("DISPLAY")
            .env_remove("WAYLAND_DISPLAY")
            .output()?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }

    /// Run with --no-apply and --output-dir pointing into the temp dir
    pub fn generate(&self, extra: &[&str]) -> Result<CommandOutput> {
        let out_dir = self.output_dir().to_string_lossy().into_owned();
        let mut args = vec!["--no-apply", "--no-color", "--output-dir", out_dir.as_str()];
        args.extend_from_slice(extra);
        self.run(&args)
    }
}

/// Parse JSON-lines output into events
pub fn json_events(stdout: &str) -> Result<Vec<serde_json::Value>> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(anyhow::Error::from))
        .collect()
}
