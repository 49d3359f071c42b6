//! Core wallpaper data model shared between the orchestrator and the frontend.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Output aspect ratio. Only the ratios the image endpoint accepts are
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    /// Wire value sent to the image endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "9:16",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Square => "1:1",
        }
    }
}

/// Target image size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1K")]
    Standard,
    #[serde(rename = "2K")]
    High,
}

impl Resolution {
    /// Wire value sent to the image endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Standard => "1K",
            Resolution::High => "2K",
        }
    }
}

/// One form session's worth of generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperOptions {
    pub prompt: String,
    pub style: String,
    pub aspect_ratio: AspectRatio,
    pub resolution: Resolution,
    pub enhance_prompt: bool,
}

impl Default for WallpaperOptions {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            style: "cinematic".to_string(),
            aspect_ratio: AspectRatio::Portrait,
            resolution: Resolution::Standard,
            enhance_prompt: true,
        }
    }
}

/// A successfully generated wallpaper. Immutable once created; `prompt`
/// keeps the user's original text, not the enhanced one, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: Uuid,
    pub url: String,
    pub prompt: String,
    pub style: String,
    pub timestamp: i64,
}

impl GeneratedImage {
    /// Create a wallpaper record from a displayable data URI
    pub fn new(url: String, prompt: String, style: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            prompt,
            style,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Suggested filename for saving to disk
    pub fn filename(&self) -> String {
        format!("lumina-walls-{}.png", self.id)
    }
}
