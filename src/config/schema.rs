use serde::Deserialize;

use crate::library::CategoryFilter;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/adagio/config.toml` or
/// `~/.config/adagio/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ADAGIO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playback: PlaybackSettings::default(),
            ui: UiSettings::default(),
            library: LibrarySettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Interval between progress ticks (milliseconds).
    pub tick_ms: u64,
    /// Progress units added per tick (progress runs 0-100).
    pub step: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            step: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top "adagio" header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Adagio ~ take your songs slow ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Year splitting the `newest` and `oldest` category pills.
    pub cutoff_year: i32,
    /// How many songs the `latest` pill keeps.
    pub latest_limit: usize,
    /// Category pill active on startup.
    pub default_category: CategoryFilter,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            cutoff_year: 1980,
            latest_limit: 5,
            default_category: CategoryFilter::All,
        }
    }
}
