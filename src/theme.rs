use ratatui::style::Color;
use tracing::{debug, warn};

use crate::storage::KeyValueStore;

/// Storage key holding `dark` or `light`.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

/// Colors the UI draws with for a given theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub genre: Color,
    pub error: Color,
}

impl Theme {
    pub fn value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Root style class the theme applies.
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => "dark-theme",
            Self::Light => "light-theme",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Read the persisted theme. Missing or unreadable storage means no
    /// preference, which keeps the default.
    pub fn load(store: &KeyValueStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(raw)) => Self::parse(&raw).unwrap_or_else(|| {
                debug!(value = %raw, "ignoring unknown stored theme");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                debug!(error = %e, path = %store.path().display(), "theme storage unavailable");
                Self::default()
            }
        }
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self, store: &KeyValueStore) {
        *self = self.inverted();
        debug!(class = self.class(), "theme switched");
        if let Err(e) = store.set(THEME_KEY, self.value()) {
            warn!(error = %e, theme = self.value(), path = %store.path().display(), "failed to persist theme");
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                highlight_bg: Color::DarkGray,
                genre: Color::Magenta,
                error: Color::LightRed,
            },
            Self::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                highlight_bg: Color::Gray,
                genre: Color::Magenta,
                error: Color::Red,
            },
        }
    }
}
