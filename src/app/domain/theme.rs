use std::collections::HashMap;

/// Hex color slots shared by every theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub surface: &'static str,
    pub muted: &'static str,
    pub text: &'static str,
}

/// An immutable, selectable visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub palette: ThemePalette,
}

const BUILTIN_THEMES: [ThemeDefinition; 4] = [
    ThemeDefinition {
        key: "calm",
        name: "Calm Glacier",
        palette: ThemePalette {
            primary: "#2563eb",
            secondary: "#0ea5e9",
            accent: "#22c55e",
            surface: "#f8fafc",
            muted: "#e2e8f0",
            text: "#0f172a",
        },
    },
    ThemeDefinition {
        key: "sunset",
        name: "Sunset Bloom",
        palette: ThemePalette {
            primary: "#ea580c",
            secondary: "#f97316",
            accent: "#a855f7",
            surface: "#fff7ed",
            muted: "#fed7aa",
            text: "#1f2937",
        },
    },
    ThemeDefinition {
        key: "forest",
        name: "Forest Mist",
        palette: ThemePalette {
            primary: "#16a34a",
            secondary: "#22c55e",
            accent: "#0ea5e9",
            surface: "#f0fdf4",
            muted: "#bbf7d0",
            text: "#052e16",
        },
    },
    ThemeDefinition {
        key: "mono",
        name: "Mono Focus",
        palette: ThemePalette {
            primary: "#111827",
            secondary: "#1f2937",
            accent: "#4b5563",
            surface: "#f9fafb",
            muted: "#e5e7eb",
            text: "#0b0f19",
        },
    },
];

/// Fixed, ordered catalogue of themes with constant-time key lookup.
///
/// Resolution is total: an unknown key falls back to the first entry, so a
/// caller always gets a usable theme.
pub struct ThemeRegistry {
    themes: &'static [ThemeDefinition],
    by_key: HashMap<&'static str, usize>,
}

impl ThemeRegistry {
    pub fn builtin() -> Self {
        Self::from_themes(&BUILTIN_THEMES)
    }

    fn from_themes(themes: &'static [ThemeDefinition]) -> Self {
        debug_assert!(!themes.is_empty());
        let by_key = themes
            .iter()
            .enumerate()
            .map(|(i, t)| (t.key, i))
            .collect();
        Self { themes, by_key }
    }

    /// All themes, in catalogue order.
    pub fn themes(&self) -> &[ThemeDefinition] {
        self.themes
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Key of the first (default) theme.
    pub fn default_key(&self) -> &'static str {
        self.themes[0].key
    }

    /// Look up a theme by key, falling back to the first entry.
    pub fn resolve(&self, key: &str) -> &ThemeDefinition {
        self.by_key
            .get(key)
            .map(|&i| &self.themes[i])
            .unwrap_or(&self.themes[0])
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
