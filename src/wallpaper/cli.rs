use clap::Args;
use std::path::PathBuf;

use super::palette::DEFAULT_INDEX;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Palette index; wraps around, negative values count from the end
    #[arg(short, long, default_value_t = DEFAULT_INDEX, allow_negative_numbers = true)]
    pub index: i64,

    /// Custom top color (#RRGGBB), overrides the palette
    #[arg(long, value_name = "HEX", requires = "to")]
    pub from: Option<String>,

    /// Custom bottom color (#RRGGBB), overrides the palette
    #[arg(long, value_name = "HEX", requires = "from")]
    pub to: Option<String>,

    /// Image size instead of the detected screen resolution
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub size: Option<String>,

    /// Directory to save generated wallpapers in
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Generate and save the image without setting it as wallpaper
    #[arg(long)]
    pub no_apply: bool,

    /// Open the generated image in the default image viewer
    #[arg(long)]
    pub show: bool,

    /// List the built-in palette and exit
    #[arg(long, conflicts_with_all = ["from", "to", "size", "output_dir", "no_apply", "show"])]
    pub list: bool,
}
