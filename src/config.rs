use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::catalog;
use crate::wallpaper::{AspectRatio, Resolution, WallpaperOptions};

/// Text model used for prompt enhancement
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Image model used for wallpaper generation
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Settings exposed to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub default_style: String,
    pub default_aspect_ratio: AspectRatio,
    pub default_resolution: Resolution,
    pub enhance_prompt: bool,
}

/// Settings validation failures
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    #[error("Unknown style: {0}")]
    UnknownStyle(String),
}

impl Settings {
    /// Validate settings before they are persisted
    pub fn validate(&self) -> Vec<SettingsError> {
        let mut errors = Vec::new();
        if catalog::find_style(&self.default_style).is_none() {
            errors.push(SettingsError::UnknownStyle(self.default_style.clone()));
        }
        errors
    }
}

/// Internal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub schema_version: u32,
    pub gemini_api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub default_style: String,
    pub default_aspect_ratio: AspectRatio,
    pub default_resolution: Resolution,
    pub enhance_prompt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: 1,
            gemini_api_key: String::new(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            default_style: "cinematic".to_string(),
            default_aspect_ratio: AspectRatio::Portrait,
            default_resolution: Resolution::Standard,
            enhance_prompt: true,
        }
    }
}

impl Config {
    /// Get the default config directory
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".luminawalls"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file or return default
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                debug!("Failed to load config, using default: {}", e);
                Self::default()
            }
        }
    }

    /// Load config from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Whether a Gemini API key has been stored
    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }

    /// Seed a fresh form session from the persisted defaults
    pub fn default_options(&self) -> WallpaperOptions {
        WallpaperOptions {
            prompt: String::new(),
            style: self.default_style.clone(),
            aspect_ratio: self.default_aspect_ratio,
            resolution: self.default_resolution,
            enhance_prompt: self.enhance_prompt,
        }
    }

    /// Convert to frontend Settings
    pub fn to_settings(&self) -> Settings {
        Settings {
            default_style: self.default_style.clone(),
            default_aspect_ratio: self.default_aspect_ratio,
            default_resolution: self.default_resolution,
            enhance_prompt: self.enhance_prompt,
        }
    }

    /// Update from frontend Settings
    pub fn update_from_settings(&mut self, settings: &Settings) {
        self.default_style = settings.default_style.clone();
        self.default_aspect_ratio = settings.default_aspect_ratio;
        self.default_resolution = settings.default_resolution;
        self.enhance_prompt = settings.enhance_prompt;
    }
}
