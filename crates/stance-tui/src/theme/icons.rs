//! Glyph sets for Unicode and ASCII fallback.

use stance_engine::IconPreference;

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Standard Unicode symbols.
    #[default]
    Unicode,
    /// ASCII-only fallback (also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Resolve the configured preference, letting `NO_COLOR` force ASCII.
    pub fn resolve(preference: IconPreference) -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::Ascii;
        }
        match preference {
            IconPreference::Unicode => Self::Unicode,
            IconPreference::Ascii => Self::Ascii,
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Prefix of the inconsistency message.
    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{26a0}", // ⚠
            IconMode::Ascii => "!",
        }
    }

    /// Marks a consistent event in the footer.
    pub fn consistent(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2713}", // ✓
            IconMode::Ascii => "ok",
        }
    }

    /// Separator between footer fields.
    pub fn separator(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => " \u{2502} ", // │
            IconMode::Ascii => " | ",
        }
    }
}
