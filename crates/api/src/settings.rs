//! Presentation settings shared through the app state.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct UnknownTheme(pub String);

impl core::str::FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Snapshot returned by the settings endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsView {
    pub theme: Theme,
}

/// Handle to the current settings. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    theme: Arc<RwLock<Theme>>,
}

impl Settings {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: Arc::new(RwLock::new(theme)),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.theme.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        let mut guard = match self.theme.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = theme;
        tracing::info!(theme = theme.as_str(), "theme changed");
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle_theme(&self) -> Theme {
        let mut guard = match self.theme.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = guard.toggled();
        tracing::info!(theme = guard.as_str(), "theme toggled");
        *guard
    }

    pub fn view(&self) -> SettingsView {
        SettingsView { theme: self.theme() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_clones_share_state() {
        let settings = Settings::new(Theme::Light);
        let shared = settings.clone();

        assert_eq!(settings.toggle_theme(), Theme::Dark);
        assert_eq!(shared.theme(), Theme::Dark);

        shared.set_theme(Theme::Light);
        assert_eq!(settings.view(), SettingsView { theme: Theme::Light });
    }

    #[test]
    fn theme_parses_from_config_strings() {
        assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("sepia".parse::<Theme>(), Err(UnknownTheme("sepia".to_string())));
    }
}
