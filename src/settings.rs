//! Presentation settings
//!
//! Persisted in LocalStorage on the web, read from a JSON file on native.
//! Nothing in here changes gameplay: the AI gain and ball physics are fixed.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_HZ;
use crate::renderer::vertex::{Color, colors};

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Classic,
    HighContrast,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::HighContrast => "HighContrast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Theme::Classic),
            "highcontrast" | "high_contrast" | "high-contrast" | "contrast" => {
                Some(Theme::HighContrast)
            }
            _ => None,
        }
    }

    /// Colors for this theme
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Classic => Palette {
                background: colors::DARK_BLUE,
                net: colors::WHITE,
                text: colors::WHITE,
                user_paddle: colors::TOMATO,
                com_paddle: colors::GREEN_YELLOW,
                ball: colors::GOLD,
            },
            Theme::HighContrast => Palette {
                background: colors::BLACK,
                net: colors::WHITE,
                text: colors::WHITE,
                user_paddle: colors::YELLOW,
                com_paddle: colors::CYAN,
                ball: colors::WHITE,
            },
        }
    }
}

/// Resolved colors for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub net: Color,
    pub text: Color,
    pub user_paddle: Color,
    pub com_paddle: Color,
    pub ball: Color,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame driver rate (ticks per second)
    pub tick_hz: u32,
    /// Color scheme
    pub theme: Theme,
    /// Draw the center net
    pub show_net: bool,
    /// Draw both scores
    pub show_scores: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,
            theme: Theme::Classic,
            show_net: true,
            show_scores: true,
        }
    }
}

impl Settings {
    /// Tick rate, never zero
    pub fn effective_tick_hz(&self) -> u32 {
        self.tick_hz.max(1)
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.effective_tick_hz() as f32
    }

    /// Timer interval for the web driver
    pub fn tick_interval_ms(&self) -> i32 {
        (1000 / self.effective_tick_hz()).max(1) as i32
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
