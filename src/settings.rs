//! UI preferences
//!
//! The theme is the only thing the page persists. It is stored as the bare
//! string `light` or `dark` under the `theme` key, and the page starts dark.
//! Light mode is signalled by a `light` class on the document root.

/// LocalStorage key holding the theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class on the document root while the light theme is active
pub const LIGHT_CLASS: &str = "light";

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Whether the document root should carry the `light` class
    pub fn is_light(&self) -> bool {
        *self == Theme::Light
    }
}

/// Persisted preferences
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    pub theme: Theme,
}

impl Settings {
    /// Rebuild settings from the stored theme value, if any.
    /// Missing or unrecognised values keep the dark default.
    pub fn from_stored(value: Option<&str>) -> Self {
        let theme = value.and_then(Theme::from_str).unwrap_or_default();
        Self { theme }
    }

    /// Value written under `THEME_STORAGE_KEY`
    pub fn stored_value(&self) -> &'static str {
        self.theme.as_str()
    }

    /// Flip the theme and return the new one
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Read the theme from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = Self::storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
        let settings = Self::from_stored(stored.as_deref());
        log::info!(
            "Theme {} ({})",
            settings.theme.as_str(),
            if stored.is_some() { "saved" } else { "default" }
        );
        settings
    }

    /// Write the theme to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(THEME_STORAGE_KEY, self.stored_value()) {
                    log::warn!("Theme not saved: {:?}", e);
                }
            }
            None => log::warn!("No LocalStorage, theme not saved"),
        }
    }

    /// Toggle the `light` class on the document root (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn apply(&self) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());

        if let Some(root) = root {
            let classes = root.class_list();
            let _ = if self.theme.is_light() {
                classes.add_1(LIGHT_CLASS)
            } else {
                classes.remove_1(LIGHT_CLASS)
            };
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_stored(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn apply(&self) {
        // No document natively
    }
}
