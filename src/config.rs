//! Configuration persistence for explorer preferences

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{ActiveView, Coordinate};

fn default_map_center() -> Coordinate {
    // Geographic center of Austria
    Coordinate::new(47.5162, 14.5501).unwrap_or_default()
}

fn default_map_zoom() -> u8 {
    7
}

/// User preferences persisted between sessions
///
/// Selection state itself is never persisted; only these startup defaults
/// are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Tab shown when a session starts
    #[serde(default)]
    pub startup_view: ActiveView,
    /// Whether the rail overlay starts enabled
    #[serde(default)]
    pub transport_overlay_enabled: bool,
    /// Initial map center
    #[serde(default = "default_map_center")]
    pub map_center: Coordinate,
    /// Initial map zoom level
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            startup_view: ActiveView::default(),
            transport_overlay_enabled: false,
            map_center: default_map_center(),
            map_zoom: default_map_zoom(),
        }
    }
}

impl ExplorerConfig {
    /// Directory name under the user config directory
    pub const APP_DIR: &'static str = "wegweiser";
    /// Config file name
    pub const FILE_NAME: &'static str = "config.json";

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::warn!("Could not determine a config directory, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {err:?}");
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            log::error!("Could not determine a config directory for saving");
            return;
        };
        if let Err(err) = self.save_to(&path) {
            log::error!("Failed to save config: {err:?}");
        }
    }

    /// Read a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the config file, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = ExplorerConfig::load_from(&path).unwrap();
        assert_eq!(config, ExplorerConfig::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = ExplorerConfig {
            startup_view: ActiveView::House,
            transport_overlay_enabled: true,
            map_center: Coordinate::new(48.2082, 16.3738).unwrap(),
            map_zoom: 9,
        };
        config.save_to(&path).unwrap();

        assert_eq!(ExplorerConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"startup_view":"House"}"#).unwrap();

        let config = ExplorerConfig::load_from(&path).unwrap();
        assert_eq!(config.startup_view, ActiveView::House);
        assert_eq!(config.map_zoom, default_map_zoom());
        assert!(!config.transport_overlay_enabled);
    }

    #[test]
    fn test_default_center_is_in_austria() {
        let center = default_map_center();
        assert!((46.0..49.1).contains(&center.lat()));
        assert!((9.5..17.2).contains(&center.long()));
    }
}
