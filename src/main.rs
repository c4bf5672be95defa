mod common;
mod ui;
mod wallpaper;

use clap::Parser;

use crate::ui::prelude::*;
use crate::wallpaper::cli::GenerateArgs;

/// Generate a gradient wallpaper sized to the screen and set it as the desktop background
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug output
    #[arg(short, long)]
    debug: bool,

    /// Emit events as JSON lines
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }
    ui::init(format, !cli.no_color && !cli.json);
    ui::set_debug_mode(cli.debug);

    if let Err(e) = wallpaper::commands::handle_generate(cli.generate) {
        emit(
            Level::Error,
            "wallpaper.error",
            &format!("{} Error: {:#}", char::from(NerdFont::Cross), e),
            None,
        );
        std::process::exit(1);
    }
}
