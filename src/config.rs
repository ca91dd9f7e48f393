//! Notebook configuration persistence
//!
//! Stores user preferences in `~/.config/cellsync/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{CellType, ViewMode};

/// Notebook configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotebookConfig {
    /// View mode a freshly loaded document starts in
    pub default_view_mode: ViewMode,
    /// Cell type used when a new cell is inserted without an explicit type
    pub default_cell_type: CellType,
    pub line_numbers: bool,
    pub line_wrapping: bool,
    pub match_brackets: bool,
    pub auto_close_brackets: bool,
    /// Editor theme name passed through to the widget
    pub theme: String,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            default_view_mode: ViewMode::Editor,
            default_cell_type: CellType::Javascript,
            line_numbers: true,
            line_wrapping: false,
            match_brackets: true,
            auto_close_brackets: true,
            theme: "eclipse".to_string(),
        }
    }
}

impl NotebookConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating its directory if it doesn't exist
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
