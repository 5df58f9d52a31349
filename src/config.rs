use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::citation::CitationStyle;
use crate::document::DocumentDefaults;
use crate::error::{Error, Result};

/// User settings for docfix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default font of the output document
    pub default_font: String,
    /// Default font size of the output document, in points
    pub default_size: f32,
    /// Rules file used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<PathBuf>,
    /// Citation marker style
    pub citation: CitationStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_font: "Times New Roman".to_string(),
            default_size: 12.0,
            rules: None,
            citation: CitationStyle::default(),
        }
    }
}

impl Settings {
    /// Load settings from config directory
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        // Return default settings if no config found
        Ok(Settings::default())
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Reading settings from {}", path.display());
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| Error::Config(format!("{}: {err}", path.display())))
    }

    /// Save settings to config directory
    pub fn save(&self) -> Result<Option<PathBuf>> {
        let Some(config_path) = Self::get_config_path() else {
            return Ok(None);
        };
        self.save_to(&config_path)?;
        Ok(Some(config_path))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|err| Error::Config(err.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the settings file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docfix").join("config.toml"))
    }

    /// Initialize default settings file
    pub fn init_default() -> Result<Option<PathBuf>> {
        Settings::default().save()
    }

    /// Output document defaults derived from these settings
    pub fn document_defaults(&self) -> DocumentDefaults {
        DocumentDefaults {
            font: self.default_font.clone(),
            size: (self.default_size * 2.0).round() as usize,
        }
    }
}
