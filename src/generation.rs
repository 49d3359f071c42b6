//! Wallpaper generation pipeline.
//!
//! Sequences the two provider calls (prompt enhancement, then image
//! generation) against the session state machine. Enhancement is strictly
//! best-effort: any failure falls back to the user's original prompt. Image
//! failures end the attempt, and one specific provider wording additionally
//! reopens the credential gate.

use async_trait::async_trait;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{error, warn};

use crate::catalog;
use crate::credential::CredentialGate;
use crate::gemini_client::InlineImage;
use crate::session::{GenerationSession, GenerationStatus, SessionError};
use crate::wallpaper::{AspectRatio, GeneratedImage, Resolution, WallpaperOptions};

/// Provider error text indicating a missing or invalid credential.
///
/// This is the vendor's literal wording; nothing on this side can guarantee
/// it stays stable across provider releases.
pub const CREDENTIAL_NOT_FOUND_SIGNATURE: &str = "Requested entity was not found";

/// Errors on the generation path
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Gemini API key is required")]
    MissingApiKey,

    #[error("Failed to create HTTP client: {0}")]
    ClientInit(String),

    #[error("Gemini API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Gemini API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse Gemini response: {0}")]
    InvalidResponse(String),

    #[error("No image data found in response")]
    NoImageData,

    #[error("Enhancement returned no text")]
    EmptyEnhancement,

    #[error("Session state is corrupted")]
    StatePoisoned,

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl GenerationError {
    /// Classify a failure as a credential problem: either no key is stored
    /// locally, or the provider's error wording reports one it cannot use
    pub fn is_credential_missing(&self) -> bool {
        matches!(self, GenerationError::MissingApiKey)
            || self.to_string().contains(CREDENTIAL_NOT_FOUND_SIGNATURE)
    }
}

/// The two provider operations the pipeline depends on
#[async_trait]
pub trait WallpaperBackend: Send + Sync {
    /// Rewrite a short idea into a richer image prompt
    async fn enhance(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Generate a wallpaper for the final prompt
    async fn generate(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        resolution: Resolution,
    ) -> Result<InlineImage, GenerationError>;
}

/// Run one generation attempt.
///
/// The two awaits are strictly sequential and locks are never held across
/// them. `on_status` fires after every transition so the caller can mirror
/// the session to the frontend.
pub async fn run_generation<B: WallpaperBackend + ?Sized>(
    backend: &B,
    session: &Mutex<GenerationSession>,
    gate: &Mutex<CredentialGate>,
    options: WallpaperOptions,
    on_status: &(dyn Fn(GenerationStatus) + Send + Sync),
) -> Result<GeneratedImage, GenerationError> {
    {
        let mut session = session.lock().map_err(|_| GenerationError::StatePoisoned)?;
        session.begin()?;
        on_status(session.status());
    }

    let prompt_to_use = if options.enhance_prompt {
        match backend.enhance(&options.prompt).await {
            Ok(enhanced) if !enhanced.trim().is_empty() => enhanced,
            Ok(_) => {
                warn!("Enhancement returned blank text, keeping original prompt");
                options.prompt.clone()
            }
            Err(e) => {
                warn!("Prompt enhancement failed, keeping original prompt: {}", e);
                options.prompt.clone()
            }
        }
    } else {
        options.prompt.clone()
    };

    {
        let mut session = session.lock().map_err(|_| GenerationError::StatePoisoned)?;
        session.start_generating()?;
        on_status(session.status());
    }

    let final_prompt = catalog::compose_prompt(&prompt_to_use, &options.style);

    match backend
        .generate(&final_prompt, options.aspect_ratio, options.resolution)
        .await
    {
        Ok(inline) => {
            let image = GeneratedImage::new(
                inline.to_data_uri(),
                options.prompt.clone(),
                options.style.clone(),
            );
            let mut session = session.lock().map_err(|_| GenerationError::StatePoisoned)?;
            session.complete(image.clone())?;
            on_status(session.status());
            Ok(image)
        }
        Err(e) => {
            error!("Wallpaper generation failed: {}", e);
            if let Ok(mut session) = session.lock() {
                if session.fail(e.to_string()).is_ok() {
                    on_status(session.status());
                }
            }
            if e.is_credential_missing() {
                if let Ok(mut gate) = gate.lock() {
                    gate.reopen();
                }
            }
            Err(e)
        }
    }
}
