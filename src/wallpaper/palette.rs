//! Built-in gradient presets

use serde::Serialize;

/// A named start/end color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

const fn preset(name: &'static str, start: &'static str, end: &'static str) -> Preset {
    Preset { name, start, end }
}

pub const DEFAULT_INDEX: i64 = 0;

static PRESETS: [Preset; 10] = [
    preset("Vibrant Ocean", "#4FC3F7", "#29B6F6"),
    preset("Dreamy Violet", "#9575CD", "#673AB7"),
    preset("Passion Spark", "#FF7043", "#E64A19"),
    preset("Fresh Mint", "#A5D6A7", "#4CAF50"),
    preset("Sunset Amber", "#FFB300", "#FF6F00"),
    preset("Calm Blues", "#64B5F6", "#1E88E5"),
    preset("Soft Pastel", "#F48FB1", "#E1BEE7"),
    preset("Forest Retreat", "#81C784", "#388E3C"),
    preset("Cosmic Stars", "#7E57C2", "#4527A0"),
    preset("Sandy Shore", "#FFE0B2", "#EF6C00"),
];

pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Preset at `index`, wrapping in both directions
pub fn preset_at(index: i64) -> &'static Preset {
    let len = PRESETS.len() as i64;
    &PRESETS[index.rem_euclid(len) as usize]
}

/// The `(start, end)` hex pair at `index`, wrapping in both directions
pub fn get_color(index: i64) -> (&'static str, &'static str) {
    let p = preset_at(index);
    (p.start, p.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallpaper::color::hex_to_rgb;

    #[test]
    fn first_entry() {
        assert_eq!(get_color(0), ("#4FC3F7", "#29B6F6"));
        assert_eq!(get_color(9), ("#FFE0B2", "#EF6C00"));
    }

    #[test]
    fn wraps_with_period_ten() {
        for i in -35..35 {
            assert_eq!(get_color(i), get_color(i + 10), "index {i}");
        }
    }

    #[test]
    fn negative_indices_count_from_the_end() {
        assert_eq!(get_color(-1), get_color(9));
        assert_eq!(get_color(-10), get_color(0));
        assert_eq!(preset_at(i64::MIN).name, presets()[2].name);
        assert_eq!(get_color(i64::MAX), get_color(7));
    }

    #[test]
    fn all_entries_are_valid_colors() {
        for p in presets() {
            hex_to_rgb(p.start).unwrap();
            hex_to_rgb(p.end).unwrap();
        }
    }
}
