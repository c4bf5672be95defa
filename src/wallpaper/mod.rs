pub mod apply;
pub mod cli;
pub mod color;
pub mod commands;
pub mod common;
pub mod error;
pub mod gradient;
pub mod output;
pub mod palette;
pub mod preview;
pub mod resolution;

mod gnome;
mod hyprland;
mod kwin;
mod macos;
mod sway;
mod x11;
