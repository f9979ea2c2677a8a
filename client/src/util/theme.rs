//! Visual theme selection and persistence.
//!
//! Reads the user's preference from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and applies a `data-theme` attribute
//! to the `<html>` element. Persistence is best-effort browser-only
//! behavior; non-browser paths safely no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "artifact_keep_theme";

/// Visual theme applied to the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the `data-theme` attribute and `localStorage`.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored attribute value; unknown values fall back to light.
    #[must_use]
    pub fn from_attr(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the preferred theme: stored value first, then system preference.
#[must_use]
pub fn load_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return Theme::from_attr(&val);
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_attr());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Switch theme, apply it, and persist the new preference.
#[must_use]
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_attr());
            }
        }
    }
    next
}
