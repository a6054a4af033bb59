//! User configuration loaded from `config.toml`

use crate::models::Language;
use crate::parser::DescriptionMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "checklist";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Snapshot file is `<checklist path>.<snapshot_suffix>`
    pub snapshot_suffix: String,

    /// How continuation lines build step descriptions
    pub description_mode: DescriptionMode,

    /// Clear the terminal between prompts
    pub clear_screen: bool,

    /// Append log output here instead of stderr
    pub log_file: Option<PathBuf>,

    /// Language for level names
    pub language: Language,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            snapshot_suffix: "out".to_string(),
            description_mode: DescriptionMode::Joined,
            clear_screen: true,
            log_file: None,
            language: Language::En,
        }
    }
}

impl ChecklistConfig {
    /// Default location: `<config dir>/checklist/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ChecklistConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load from an explicit path, falling back to the default location
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Save to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
