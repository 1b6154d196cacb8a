//! Headless run settings
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! defaults. Physics constants are fixed and deliberately not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the headless runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed (`None` picks one from the clock)
    pub seed: Option<u64>,
    /// Frames to simulate before stopping
    pub max_frames: u64,
    /// Sessions to play before stopping (restarts in between)
    pub sessions: u32,
    /// Let the autopilot press the buttons
    pub autopilot: bool,
    /// Autopilot warning distance in frames
    pub lead_frames: f32,
    /// Log a progress line every N frames (0 disables)
    pub log_interval: u64,
    /// Print the final snapshot as JSON
    pub print_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_frames: 60 * 60 * 5,
            sessions: 3,
            autopilot: true,
            lead_frames: 8.0,
            log_interval: 600,
            print_snapshot: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Seed to run with, picking one from the clock if unset
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "sessions": 1 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.sessions, 1);
        assert_eq!(settings.max_frames, Settings::default().max_frames);
        assert!(settings.autopilot);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            print_snapshot: true,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_fixed_seed_resolves_to_itself() {
        let settings = Settings {
            seed: Some(1234),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(), 1234);
    }
}
