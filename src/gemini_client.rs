//! Google Gemini API client for prompt enhancement and wallpaper generation.
//!
//! Thin wrapper around the Gemini generateContent endpoint. Two models are
//! involved: a text model that rewrites the user's idea into a richer image
//! prompt, and an image model that returns the wallpaper as an inline
//! base64 payload.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use crate::config::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use crate::generation::{GenerationError, WallpaperBackend};
use crate::wallpaper::{AspectRatio, Resolution};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Max characters of a provider error body kept in error messages
const MAX_ERROR_BODY: usize = 200;

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    text_model: String,
    image_model: String,
}

/// An image embedded in a generateContent response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: Option<String>,
    pub data: String,
}

impl InlineImage {
    /// Self-contained reference suitable for direct display
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type.as_deref().unwrap_or("image/png"),
            self.data
        )
    }
}

// -- Response types --

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponsePart {
    inline_data: Option<GeminiInlineData>,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: Option<String>,
    data: String,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Result<Self, GenerationError> {
        Self::with_models(api_key, DEFAULT_TEXT_MODEL, DEFAULT_IMAGE_MODEL)
    }

    pub fn with_models(
        api_key: &str,
        text_model: &str,
        image_model: &str,
    ) -> Result<Self, GenerationError> {
        if api_key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| GenerationError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            text_model: text_model.to_string(),
            image_model: image_model.to_string(),
        })
    }

    /// Instruction wrapping the user's idea for the text model
    pub fn enhancement_instruction(prompt: &str) -> String {
        format!(
            "You are an expert prompt engineer for AI image generation. \
             Rewrite the following simple user idea into a detailed, descriptive, \
             and artistic prompt suitable for a high-quality smartphone wallpaper. \
             Keep it under 100 words. Focus on visual description, lighting, and composition.\n\n\
             User Idea: \"{}\"\n\n\
             Output ONLY the enhanced prompt text, no explanations.",
            prompt
        )
    }

    pub fn build_enhance_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "parts": [{"text": Self::enhancement_instruction(prompt)}]
            }]
        })
    }

    pub fn build_image_body(
        prompt: &str,
        aspect_ratio: AspectRatio,
        resolution: Resolution,
    ) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "responseModalities": ["IMAGE"],
                "imageConfig": {
                    "aspectRatio": aspect_ratio.as_str(),
                    "imageSize": resolution.as_str()
                }
            }
        })
    }

    /// First text part of the response, if any
    pub fn extract_text(response: &GeminiResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| {
                content
                    .parts
                    .iter()
                    .find_map(|p| p.text.as_ref().filter(|t| !t.trim().is_empty()))
            })
            .map(|t| t.trim().to_string())
    }

    /// First inline image part of the response, if any
    pub fn extract_inline_image(response: &GeminiResponse) -> Option<InlineImage> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.inline_data.as_ref()))
            .map(|d| InlineImage {
                mime_type: d.mime_type.clone(),
                data: d.data.clone(),
            })
    }

    async fn post(
        &self,
        model: &str,
        body: &serde_json::Value,
    ) -> Result<GeminiResponse, GenerationError> {
        let url = format!("{}/{}:generateContent", GEMINI_ENDPOINT, model);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(
                "x-goog-api-key",
                HeaderValue::from_str(&self.api_key)
                    .map_err(|e| GenerationError::ClientInit(format!("Invalid API key header: {}", e)))?,
            )
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            // Truncate to avoid dumping whole provider payloads into logs
            let truncated: String = error_body.chars().take(MAX_ERROR_BODY).collect();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: truncated,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl WallpaperBackend for GeminiClient {
    async fn enhance(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = Self::build_enhance_body(prompt);

        info!("Prompt enhancement request: {} chars", prompt.len());

        let response = self.post(&self.text_model, &body).await?;
        Self::extract_text(&response).ok_or(GenerationError::EmptyEnhancement)
    }

    async fn generate(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        resolution: Resolution,
    ) -> Result<InlineImage, GenerationError> {
        let body = Self::build_image_body(prompt, aspect_ratio, resolution);

        info!(
            "Wallpaper generation request: {} chars, {} @ {}",
            prompt.len(),
            aspect_ratio.as_str(),
            resolution.as_str()
        );

        let response = self.post(&self.image_model, &body).await?;
        Self::extract_inline_image(&response).ok_or(GenerationError::NoImageData)
    }
}
