use std::str::FromStr;

use rand::Rng;

use super::store::{StoreError, ThemeStore};
use super::Theme;

/// Store key holding the theme id.
pub const THEME_KEY: &str = "decimal-clock-theme";

/// The platform's light/dark preference, when one is known.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(format!("unknown color scheme {other:?} (expected light or dark)")),
        }
    }
}

/// The active theme plus the store it is persisted to.
///
/// Owned by the composition root and passed down explicitly.
pub struct ThemeSettings<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeSettings<S> {
    /// Resolves the starting theme: stored preference, then the system hint
    /// (light → [`Theme::Light`]), then [`Theme::Dark`].
    ///
    /// An unreadable store or an unknown stored id is logged and skipped.
    pub fn load(store: S, hint: Option<ColorScheme>) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("ignoring stored theme: {e}");
                None
            }
        };

        let from_store = stored.and_then(|id| match id.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("ignoring stored theme: {e}");
                None
            }
        });

        let current = from_store.unwrap_or(match hint {
            Some(ColorScheme::Light) => Theme::Light,
            _ => Theme::Dark,
        });

        log::debug!("active theme: {current}");
        Self { store, current }
    }

    #[inline]
    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switches theme and writes it through to the store.
    ///
    /// The in-memory theme changes even when persisting fails.
    pub fn set(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.current = theme;
        self.store.set(THEME_KEY, theme.id())
    }

    /// Switches to a random theme other than the current one.
    pub fn lucky<R: Rng>(&mut self, rng: &mut R) -> Result<Theme, StoreError> {
        let next = self.current.lucky(rng);
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::theme::MemoryStore;

    fn store_with(value: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, value).unwrap();
        store
    }

    #[test]
    fn stored_theme_wins_over_hint() {
        let settings = ThemeSettings::load(store_with("sunset"), Some(ColorScheme::Light));
        assert_eq!(settings.current(), Theme::Sunset);
    }

    #[test]
    fn light_hint_used_when_nothing_stored() {
        let settings = ThemeSettings::load(MemoryStore::new(), Some(ColorScheme::Light));
        assert_eq!(settings.current(), Theme::Light);
    }

    #[test]
    fn defaults_to_dark() {
        assert_eq!(ThemeSettings::load(MemoryStore::new(), None).current(), Theme::Dark);
        assert_eq!(ThemeSettings::load(MemoryStore::new(), Some(ColorScheme::Dark)).current(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_id_falls_back() {
        let settings = ThemeSettings::load(store_with("neon"), Some(ColorScheme::Light));
        assert_eq!(settings.current(), Theme::Light);
    }

    #[test]
    fn set_writes_through() {
        let mut settings = ThemeSettings::load(MemoryStore::new(), None);
        settings.set(Theme::Ocean).unwrap();
        assert_eq!(settings.current(), Theme::Ocean);
        assert_eq!(settings.store().get(THEME_KEY).unwrap().as_deref(), Some("ocean"));
    }

    #[test]
    fn lucky_persists_a_different_theme() {
        let mut settings = ThemeSettings::load(store_with("light"), None);
        let mut rng = StdRng::seed_from_u64(42);
        let picked = settings.lucky(&mut rng).unwrap();
        assert_ne!(picked, Theme::Light);
        assert_eq!(settings.store().get(THEME_KEY).unwrap(), Some(picked.id().to_string()));
    }

    #[test]
    fn color_scheme_parses() {
        assert_eq!("Light".parse::<ColorScheme>(), Ok(ColorScheme::Light));
        assert!("sepia".parse::<ColorScheme>().is_err());
    }
}
