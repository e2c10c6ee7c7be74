//! Driver settings
//!
//! Read from LocalStorage on web and from a JSON file on native. None of
//! these change the physics; they pick the seed and drive the headless loop.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::Viewport;

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for a reproducible run (None = seed from the clock)
    pub seed: Option<u64>,

    // === Headless driver ===
    /// Viewport width in pixels
    pub width: i32,
    /// Viewport height in pixels
    pub height: i32,
    /// Frames per second
    pub frame_rate: u32,
    /// Stop after this many frames (None = run until killed)
    pub frames: Option<u64>,
    /// Print one JSON snapshot per frame to stdout
    pub trace: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            width: 640,
            height: 480,
            frame_rate: 60,
            frames: Some(600),
            trace: false,
        }
    }
}

impl Settings {
    /// Environment variable naming the native settings file
    pub const ENV_VAR: &'static str = "BOUNCE_SETTINGS";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_settings";

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Headless viewport
    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.width, self.height)
    }

    /// Time between headless frames (zero when `frame_rate` is 0)
    pub fn frame_interval(&self) -> Duration {
        if self.frame_rate == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / self.frame_rate
        }
    }

    /// Configured seed, or `fallback` if none was set
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("{}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `BOUNCE_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => {
                let settings = Self::load_from(&path)?;
                log::info!("Loaded settings from {}", Path::new(&path).display());
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let settings = Settings::from_json(r#"{ "seed": 42, "trace": true }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.trace);
        assert_eq!(settings.width, 640);
        assert_eq!(settings.height, 480);
        assert_eq!(settings.frames, Some(600));
    }

    #[test]
    fn test_unbounded_frames() {
        let settings = Settings::from_json(r#"{ "frames": null }"#).unwrap();
        assert_eq!(settings.frames, None);
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let err = Settings::from_json("{ nope").unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }

    #[test]
    fn test_frame_interval() {
        let settings = Settings::default();
        assert_eq!(settings.frame_interval(), Duration::from_secs(1) / 60);

        let settings = Settings {
            frame_rate: 0,
            ..Default::default()
        };
        assert_eq!(settings.frame_interval(), Duration::ZERO);
    }

    #[test]
    fn test_viewport_validation() {
        let settings = Settings {
            width: 0,
            ..Default::default()
        };
        assert!(settings.viewport().is_err());
        assert_eq!(
            Settings::default().viewport().unwrap(),
            Viewport {
                width: 640,
                height: 480
            }
        );
    }

    #[test]
    fn test_seed_fallback() {
        assert_eq!(Settings::default().seed_or(9), 9);
        let settings = Settings {
            seed: Some(1),
            ..Default::default()
        };
        assert_eq!(settings.seed_or(9), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from("/nonexistent/bounce.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
