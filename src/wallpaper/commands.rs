use anyhow::{Context, Result};
use colored::*;
use serde_json::json;
use std::path::Path;

use crate::common::desktop::Desktop;
use crate::common::paths;
use crate::ui::prelude::*;
use crate::wallpaper::apply;
use crate::wallpaper::cli::GenerateArgs;
use crate::wallpaper::color::{Color, hex_to_rgb, rgb_to_hex};
use crate::wallpaper::gradient;
use crate::wallpaper::output;
use crate::wallpaper::palette::{self, Preset};
use crate::wallpaper::preview;
use crate::wallpaper::resolution::{self, Resolution};

pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    if args.list {
        list_presets();
        return Ok(());
    }

    let desktop = Desktop::detect();
    emit(
        Level::Debug,
        "wallpaper.desktop",
        &format!(
            "{} Detected desktop: {} (backend: {})",
            char::from(NerdFont::Desktop),
            desktop.name(),
            apply::backend_name(&desktop)
        ),
        Some(json!({ "desktop": desktop.name(), "backend": apply::backend_name(&desktop) })),
    );

    let (start, end) = resolve_colors(&args)?;

    let resolution = match args.size.as_deref() {
        Some(size) => size
            .parse::<Resolution>()
            .with_context(|| format!("invalid --size {:?}", size))?,
        None => detect_resolution(&desktop),
    };
    emit(
        Level::Info,
        "wallpaper.resolution",
        &format!(
            "{} Screen resolution: {}",
            char::from(NerdFont::Info),
            resolution.to_string().cyan()
        ),
        Some(json!({ "width": resolution.width, "height": resolution.height })),
    );

    let img = gradient::generate(resolution.width, resolution.height, start, end)?;

    let dir = args.output_dir.unwrap_or_else(paths::default_output_dir);
    let path = output::save(&img, &dir)?;
    emit(
        Level::Success,
        "wallpaper.saved",
        &format!(
            "{} Saved wallpaper to {}",
            char::from(NerdFont::Save),
            path.display()
        ),
        Some(json!({ "path": path.display().to_string() })),
    );

    if args.show {
        show_preview(&path);
    }

    if args.no_apply {
        emit(
            Level::Info,
            "wallpaper.apply.skipped",
            &format!("{} Not setting wallpaper (--no-apply)", char::from(NerdFont::Info)),
            None,
        );
        return Ok(());
    }

    // Best effort: a failing backend is reported but not retried
    match apply::apply_wallpaper(&desktop, &path) {
        Ok(applied) => emit(
            Level::Success,
            "wallpaper.apply.success",
            &format!(
                "{} Wallpaper set on {}",
                char::from(NerdFont::Check),
                desktop.name()
            ),
            Some(json!({ "path": applied.display().to_string(), "desktop": desktop.name() })),
        ),
        Err(err) => emit(
            Level::Error,
            "wallpaper.apply.failed",
            &format!("{} Failed to set wallpaper: {}", char::from(NerdFont::Cross), err),
            Some(json!({ "desktop": desktop.name(), "error": err.to_string() })),
        ),
    }

    Ok(())
}

fn show_preview(path: &Path) {
    match preview::show(path) {
        Ok(shown) => emit(
            Level::Success,
            "wallpaper.preview.success",
            &format!(
                "{} Opened preview with {}",
                char::from(NerdFont::Check),
                preview::viewer_command()
            ),
            Some(json!({ "path": shown.display().to_string(), "viewer": preview::viewer_command() })),
        ),
        Err(err) => emit(
            Level::Error,
            "wallpaper.preview.failed",
            &format!("{} Failed to open preview: {}", char::from(NerdFont::Cross), err),
            Some(json!({ "viewer": preview::viewer_command(), "error": err.to_string() })),
        ),
    }
}

/// Endpoint colors from `--from/--to`, or the palette entry at `--index`
fn resolve_colors(args: &GenerateArgs) -> Result<(Color, Color)> {
    if let (Some(from), Some(to)) = (args.from.as_deref(), args.to.as_deref()) {
        let start = hex_to_rgb(from).context("invalid --from color")?;
        let end = hex_to_rgb(to).context("invalid --to color")?;
        emit(
            Level::Info,
            "wallpaper.colors",
            &format!(
                "{} Gradient: {} → {}",
                char::from(NerdFont::Palette),
                start.to_string().cyan(),
                end.to_string().cyan()
            ),
            Some(json!({ "start": rgb_to_hex(start), "end": rgb_to_hex(end) })),
        );
        return Ok((start, end));
    }

    let (start_hex, end_hex) = palette::get_color(args.index);
    let preset = palette::preset_at(args.index);
    emit(
        Level::Info,
        "wallpaper.colors",
        &format!(
            "{} Gradient: {} ({} → {})",
            char::from(NerdFont::Palette),
            preset.name.bold(),
            start_hex.cyan(),
            end_hex.cyan()
        ),
        Some(json!({ "preset": preset, "index": args.index })),
    );
    Ok((hex_to_rgb(start_hex)?, hex_to_rgb(end_hex)?))
}

fn detect_resolution(desktop: &Desktop) -> Resolution {
    resolution::detect(desktop).unwrap_or_else(|err| {
        emit(
            Level::Warn,
            "wallpaper.resolution.fallback",
            &format!(
                "{} {}; using {}",
                char::from(NerdFont::Warning),
                err,
                resolution::FALLBACK
            ),
            None,
        );
        resolution::FALLBACK
    })
}

fn list_presets() {
    emit(
        Level::Info,
        "wallpaper.palette.header",
        &format!("{} Built-in gradients:", char::from(NerdFont::List)),
        None,
    );
    for (index, preset) in palette::presets().iter().enumerate() {
        emit(
            Level::Info,
            "wallpaper.palette.entry",
            &format_preset(index, preset),
            Some(json!({ "index": index, "preset": preset })),
        );
    }
}

fn format_preset(index: usize, preset: &Preset) -> String {
    format!(
        "  {:>2}  {:<16} {} → {}",
        index,
        preset.name,
        preset.start.cyan(),
        preset.end.cyan()
    )
}
