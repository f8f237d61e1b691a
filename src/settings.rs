//! Runtime settings
//!
//! Gameplay constants live in `consts`; this file only holds what a player or a
//! demo run may change. Persisted as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::{BulletBorder, Rules};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; a random one is drawn when unset
    pub seed: Option<u64>,

    // === Rules ===
    /// Bullet behaviour at the field border
    pub bullet_border: BulletBorder,

    // === Demo runner ===
    /// Number of ticks the headless demo plays
    pub ticks: u64,
    /// Sleep for the tick interval between ticks
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            bullet_border: BulletBorder::Bounce,
            ticks: 600,
            realtime: false,
        }
    }
}

impl Settings {
    /// Rules handed to the simulation
    pub fn rules(&self) -> Rules {
        Rules {
            bullet_border: self.bullet_border,
        }
    }

    /// Parse settings from a JSON string; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("Using default settings");
            Ok(Self::default())
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| Error::WriteSettings {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
