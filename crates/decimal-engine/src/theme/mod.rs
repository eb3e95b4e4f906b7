//! Color themes and the persisted theme preference.
//!
//! The active theme is an explicit value owned by the composition root
//! ([`ThemeSettings`]); persistence goes through an injected [`ThemeStore`].

mod palette;
mod settings;
mod store;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

pub use palette::Palette;
pub use settings::{ColorScheme, ThemeSettings, THEME_KEY};
pub use store::{JsonFileStore, MemoryStore, StoreError, ThemeStore};

/// A named color theme.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Sunset,
    Ocean,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Dark, Theme::Light, Theme::Sunset, Theme::Ocean];

    /// Stable lower-case id used for persistence and the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Sunset => "sunset",
            Theme::Ocean => "ocean",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Sunset => "Sunset",
            Theme::Ocean => "Ocean",
        }
    }

    pub fn palette(self) -> Palette {
        Palette::for_theme(self)
    }

    /// Picks uniformly among the themes other than `self`.
    pub fn lucky<R: Rng>(self, rng: &mut R) -> Theme {
        let others: Vec<Theme> = Self::ALL.into_iter().filter(|t| *t != self).collect();
        others[rng.gen_range(0..others.len())]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string names no known theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?} (expected one of: dark, light, sunset, ocean)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.id().parse::<Theme>().unwrap(), theme);
            assert_eq!(theme.to_string(), theme.id());
        }
        assert_eq!(" Ocean ".parse::<Theme>().unwrap(), Theme::Ocean);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let err = "neon".parse::<Theme>().unwrap_err();
        assert_eq!(err, UnknownTheme("neon".into()));
    }

    #[test]
    fn lucky_never_repeats_the_current_theme() {
        let mut rng = StdRng::seed_from_u64(1793);
        for current in Theme::ALL {
            for _ in 0..50 {
                assert_ne!(current.lucky(&mut rng), current);
            }
        }
    }

    #[test]
    fn lucky_reaches_every_other_theme() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Theme::Dark.lucky(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }
}
