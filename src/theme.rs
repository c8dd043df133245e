//! Theme Preference
//!
//! Persisted under the `theme` key in localStorage and applied as the
//! `light` class on `<body>`.

use leptos::prelude::{document, window};

const STORAGE_KEY: &str = "theme";
const LIGHT_CLASS: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Only an exact `"light"` selects the light theme
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

/// Read the saved preference (dark when unavailable)
pub fn load_theme() -> Theme {
    let saved = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_stored(saved.as_deref())
}

pub fn save_theme(theme: Theme) {
    match storage() {
        Some(s) => {
            if s.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                web_sys::console::warn_1(&"[THEME] Failed to persist theme".into());
            }
        }
        None => web_sys::console::warn_1(&"[THEME] localStorage unavailable".into()),
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(body) = document().body() {
        let _ = body
            .class_list()
            .toggle_with_force(LIGHT_CLASS, theme == Theme::Light);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn test_toggle_round() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.toggled(), Theme::Light);
        assert_eq!(theme.toggled().toggled(), theme);
        assert_eq!(Theme::from_stored(Some(theme.toggled().as_str())), Theme::Light);
    }
}
