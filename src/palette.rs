//! Palette resolution from the pywal theme cache.
//!
//! The palette always holds exactly sixteen colors. Anything that goes wrong
//! while reading the cache yields the all-white fallback instead.

use crate::config::Config;
use crate::error::PaletteError;
use crate::ui::notice;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const SLOT_COUNT: usize = 16;

pub const SLOT_NAMES: [&str; SLOT_COUNT] = [
    "color0", "color1", "color2", "color3", "color4", "color5", "color6", "color7", "color8",
    "color9", "color10", "color11", "color12", "color13", "color14", "color15",
];

pub const FALLBACK_COLORS: [&str; SLOT_COUNT] = ["#FFFFFF"; SLOT_COUNT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [String; SLOT_COUNT],
}

impl Palette {
    pub fn fallback() -> Self {
        Self {
            colors: FALLBACK_COLORS.map(str::to_string),
        }
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.colors.get(slot).map(String::as_str)
    }

    /// Slot name and color, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        SLOT_NAMES
            .into_iter()
            .zip(self.colors.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        SLOT_COUNT
    }

    fn from_slots(mut slots: BTreeMap<String, String>) -> Result<Self, PaletteError> {
        let mut colors: [String; SLOT_COUNT] = Default::default();
        for (color, name) in colors.iter_mut().zip(SLOT_NAMES) {
            *color = slots
                .remove(name)
                .ok_or_else(|| PaletteError::MissingSlot(name.to_string()))?;
        }
        Ok(Self { colors })
    }
}

// Layout of pywal's colors.json; `wallpaper`, `special` and friends are ignored.
#[derive(Deserialize)]
struct ThemeCache {
    colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Where pywal keeps its cache for the given platform and user.
pub fn theme_cache_path(platform: Platform, user: &str, home: &Path) -> PathBuf {
    match platform {
        Platform::Windows => PathBuf::from(format!(r"C:\Users\{user}\.cache\wal\colors.json")),
        Platform::Unix => home.join(".cache").join("wal").join("colors.json"),
    }
}

fn current_theme_cache_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    theme_cache_path(Platform::current(), &whoami::username(), &home)
}

/// Parses a theme cache file into a palette.
pub fn load_theme(path: &Path) -> Result<Palette, PaletteError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PaletteError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PaletteError::Io(e),
    })?;
    let cache: ThemeCache = serde_json::from_str(&content)?;
    Palette::from_slots(cache.colors)
}

/// Resolves the palette for the current user. Enabled notices go to `notices`.
pub fn resolve<W: Write>(config: &Config, notices: &mut W) -> Palette {
    resolve_from(&current_theme_cache_path(), config, notices)
}

/// Like [`resolve`] but with an explicit cache location.
pub fn resolve_from<W: Write>(path: &Path, config: &Config, notices: &mut W) -> Palette {
    match load_theme(path) {
        Ok(palette) => {
            tracing::debug!(path = %path.display(), "loaded pywal palette");
            palette
        }
        Err(PaletteError::NotFound { .. }) => {
            tracing::debug!(path = %path.display(), "pywal cache missing");
            if config.pywal_not_found_errors() {
                notice(notices, "Pywal colors file not found. Using default colors.");
            }
            Palette::fallback()
        }
        Err(e @ PaletteError::Malformed { .. }) | Err(e @ PaletteError::MissingSlot(_)) => {
            tracing::debug!(path = %path.display(), error = %e, "pywal cache unreadable");
            if config.json_decode_errors() {
                notice(notices, &format!("JSONDecodeError: {e}"));
            }
            Palette::fallback()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using default colors");
            Palette::fallback()
        }
    }
}
