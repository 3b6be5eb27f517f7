//! User settings and preferences
//!
//! Persisted separately from the throw log in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::OVERALL_DIAMETER;
use crate::game::Game;

/// User settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name written into every throw record
    pub player: String,
    /// Game variant to play
    pub game: Game,

    // === Board ===
    /// Draw dart markers for logged throws
    pub show_darts: bool,
    /// Draw grid lines and the centre-to-dart ray
    pub debug: bool,
    /// Canvas size (px) when no surface dictates one
    pub board_size: f64,

    // === Practice ===
    /// Standard deviation of the practice thrower's grouping (mm)
    pub spread_mm: f64,
    /// Seed for the practice thrower
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player: "player".to_string(),
            game: Game::Classic301,

            show_darts: true,
            debug: false,
            board_size: OVERALL_DIAMETER,

            spread_mm: 12.0,
            seed: 301,
        }
    }
}

impl Settings {
    /// Starting score for the configured game
    pub fn starting_score(&self) -> Option<u32> {
        self.game.starting_score()
    }

    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "dart_scorer_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
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
                match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Failed to save settings: {e:?}"),
                }
            }
        }
    }

    /// Native builds start from defaults; the CLI overrides fields with flags
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.game, Game::Classic301);
        assert_eq!(settings.starting_score(), Some(301));
        assert_eq!(settings.board_size, 451.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"player": "jdb", "debug": true}"#).unwrap();
        assert_eq!(settings.player, "jdb");
        assert!(settings.debug);
        assert!(settings.show_darts);
        assert_eq!(settings.spread_mm, 12.0);
    }

    #[test]
    fn test_stored_json_round_trip() {
        let settings = Settings {
            player: "jdb".to_string(),
            spread_mm: 4.5,
            seed: 7,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains(r#""game":"301""#));
        assert_eq!(serde_json::from_str::<Settings>(&json).unwrap(), settings);
        assert_eq!(Settings::STORAGE_KEY, "dart_scorer_settings");
    }
}
