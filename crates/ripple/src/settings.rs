// Settings persistence: engine configuration stored as JSON.
// Uses platform-native config dir: e.g. ~/Library/Application Support/ripple/settings.json
// on macOS, ~/.config/ripple/settings.json on Linux.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use ripple_core::Strip;
use ripple_diff::LcsMode;

/// Largest `|s| * |t|` the sequence engine accepts by default.
pub const DEFAULT_MAX_SEQUENCE_CELLS: usize = 16_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Strip a shared prefix before filling the table.
    pub strip_common_prefix: bool,
    /// Strip a shared suffix before filling the table.
    pub strip_common_suffix: bool,
    /// Upper bound on table cells for the sequence engine, counted after
    /// stripping. `null` disables the check.
    pub max_sequence_cells: Option<usize>,
    pub lcs_mode: LcsMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strip_common_prefix: true,
            strip_common_suffix: true,
            max_sequence_cells: Some(DEFAULT_MAX_SEQUENCE_CELLS),
            lcs_mode: LcsMode::Rolling,
        }
    }
}

impl Settings {
    pub fn strip(&self) -> Strip {
        Strip::new(self.strip_common_prefix, self.strip_common_suffix)
    }
}

fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("ripple").join("settings.json"))
}

/// Settings from the platform config dir, or defaults.
pub fn load_settings() -> Settings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

/// Settings from `path`. A missing file gives defaults silently; an
/// unparsable one gives defaults with a warning.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

pub fn save_settings(settings: &Settings) {
    match settings_path() {
        Some(path) => save_settings_to(&path, settings),
        None => log::warn!("Cannot determine settings path"),
    }
}

pub fn save_settings_to(path: &Path, settings: &Settings) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create config dir {}: {}", parent.display(), e);
            return;
        }
    }

    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                log::error!("Failed to write {}: {}", path.display(), e);
            }
        }
        Err(e) => {
            log::error!("Failed to serialize settings: {}", e);
        }
    }
}
