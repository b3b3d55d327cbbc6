//! Light/dark theme choice and how it is resolved on load.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local-storage key holding the reader's explicit choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

/// Error for stored values that are neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Theme {
    /// `Dark` when `dark` is set.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Value written to local storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Whether the dark class belongs on `<body>`.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

fn saved_choice(saved: Option<&str>) -> Option<&str> {
    saved.map(str::trim).filter(|value| !value.is_empty())
}

/// Theme to apply on load: a saved choice wins, otherwise the system
/// preference. Any saved value other than `dark` counts as light.
pub fn resolve_theme(saved: Option<&str>, system_prefers_dark: bool) -> Theme {
    match saved_choice(saved) {
        Some(value) => Theme::from_dark(value.parse::<Theme>().is_ok_and(Theme::is_dark)),
        None => Theme::from_dark(system_prefers_dark),
    }
}

/// Whether system colour-scheme changes should still be followed, i.e. the
/// reader never made an explicit choice.
pub fn follows_system(saved: Option<&str>) -> bool {
    saved_choice(saved).is_none()
}
