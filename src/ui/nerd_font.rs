/// Icon glyphs used to prefix human-readable output lines.
///
/// Requires a nerd font in the terminal; JSON output is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NerdFont {
    Check,
    Cross,
    Warning,
    Info,
    Save,
    Desktop,
    Bug,
    List,
    Palette,
}

impl NerdFont {
    pub fn unicode(&self) -> char {
        match self {
            Self::Check => '\u{f00c}',   // fa-check
            Self::Cross => '\u{f00d}',   // fa-times
            Self::Warning => '\u{f071}', // fa-exclamation-triangle
            Self::Info => '\u{f05a}',    // fa-info-circle
            Self::Save => '\u{f0c7}',    // fa-save
            Self::Desktop => '\u{f108}', // fa-desktop
            Self::Bug => '\u{f188}',     // fa-bug
            Self::List => '\u{f03a}',    // fa-list
            Self::Palette => '\u{f53f}', // fa-palette
        }
    }
}

impl std::fmt::Display for NerdFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unicode())
    }
}

impl From<NerdFont> for char {
    fn from(icon: NerdFont) -> Self {
        icon.unicode()
    }
}
