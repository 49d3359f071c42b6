use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::wallpaper::GeneratedImage;

/// Generation status reflected by the frontend panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Idle,
    Enhancing,
    Generating,
    Complete,
    Error,
}

impl GenerationStatus {
    /// A busy session has a provider call in flight and must not accept a
    /// new generation
    pub fn is_busy(&self) -> bool {
        matches!(self, GenerationStatus::Enhancing | GenerationStatus::Generating)
    }
}

/// Session error types
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum SessionError {
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),
}

/// Status update sent to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub status: GenerationStatus,
    pub error_message: Option<String>,
    pub image: Option<GeneratedImage>,
}

/// State machine for one wallpaper session.
///
/// Enhancing and Generating are only reachable in order; a finished attempt
/// (Complete or Error) re-enters the cycle through `begin`. The last
/// successful image is replaced on the next success only, so an error keeps
/// the previous wallpaper available.
pub struct GenerationSession {
    status: GenerationStatus,
    error: Option<String>,
    image: Option<GeneratedImage>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self {
            status: GenerationStatus::Idle,
            error: None,
            image: None,
        }
    }

    /// Current status
    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// Last successfully generated wallpaper, if any
    pub fn image(&self) -> Option<&GeneratedImage> {
        self.image.as_ref()
    }

    /// Snapshot for the frontend
    pub fn report(&self) -> GenerationReport {
        GenerationReport {
            status: self.status,
            error_message: self.error.clone(),
            image: self.image.clone(),
        }
    }

    /// Whether the generate control should be enabled for this prompt
    pub fn can_generate(&self, prompt: &str) -> bool {
        !self.status.is_busy() && !prompt.trim().is_empty()
    }

    /// Start a new attempt. Allowed from any non-busy state; the previous
    /// image is kept until a new one arrives.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.status.is_busy() {
            return Err(SessionError::InvalidTransition(format!(
                "Cannot start a generation from state {:?}",
                self.status
            )));
        }

        info!("Session transitioning to Enhancing");
        self.status = GenerationStatus::Enhancing;
        self.error = None;
        Ok(())
    }

    /// Move on to the image call. Only legal once enhancement has finished
    /// or been skipped.
    pub fn start_generating(&mut self) -> Result<(), SessionError> {
        if self.status != GenerationStatus::Enhancing {
            return Err(SessionError::InvalidTransition(format!(
                "Cannot start generating from state {:?}",
                self.status
            )));
        }

        info!("Session transitioning to Generating");
        self.status = GenerationStatus::Generating;
        Ok(())
    }

    /// Record the new wallpaper and finish the attempt
    pub fn complete(&mut self, image: GeneratedImage) -> Result<(), SessionError> {
        if self.status != GenerationStatus::Generating {
            return Err(SessionError::InvalidTransition(format!(
                "Cannot complete from state {:?}",
                self.status
            )));
        }

        info!("Session transitioning to Complete: wallpaper {}", image.id);
        self.status = GenerationStatus::Complete;
        self.image = Some(image);
        self.error = None;
        Ok(())
    }

    /// Abort the in-flight attempt with an error message
    pub fn fail(&mut self, message: String) -> Result<(), SessionError> {
        if !self.status.is_busy() {
            return Err(SessionError::InvalidTransition(format!(
                "Cannot fail from state {:?}",
                self.status
            )));
        }

        warn!("Session error: {}", message);
        self.status = GenerationStatus::Error;
        self.error = Some(message);
        Ok(())
    }
}

impl Default for GenerationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallpaper(prompt: &str) -> GeneratedImage {
        GeneratedImage::new(
            "data:image/png;base64,AAAA".to_string(),
            prompt.to_string(),
            "cinematic".to_string(),
        )
    }

    #[test]
    fn test_happy_path_transitions() {
        let mut session = GenerationSession::new();
        assert_eq!(session.status(), GenerationStatus::Idle);

        session.begin().unwrap();
        assert_eq!(session.status(), GenerationStatus::Enhancing);

        session.start_generating().unwrap();
        assert_eq!(session.status(), GenerationStatus::Generating);

        session.complete(wallpaper("a cat")).unwrap();
        assert_eq!(session.status(), GenerationStatus::Complete);
        assert!(session.image().is_some());
    }

    #[test]
    fn test_cannot_begin_while_enhancing() {
        let mut session = GenerationSession::new();
        session.begin().unwrap();
        assert!(session.begin().is_err());
    }

    #[test]
    fn test_cannot_begin_while_generating() {
        let mut session = GenerationSession::new();
        session.begin().unwrap();
        session.start_generating().unwrap();
        assert!(session.begin().is_err());
    }

    #[test]
    fn test_can_begin_again_after_complete() {
        let mut session = GenerationSession::new();
        session.begin().unwrap();
        session.start_generating().unwrap();
        session.complete(wallpaper("a cat")).unwrap();

        session.begin().unwrap();
        assert_eq!(session.status(), GenerationStatus::Enhancing);
    }

    #[test]
    fn test_can_begin_again_after_error() {
        let mut session = GenerationSession::new();
        session.begin().unwrap();
        session.fail("provider down".to_string()).unwrap();

        session.begin().unwrap();
        assert_eq!(session.status(), GenerationStatus::Enhancing);
        assert!(session.report().error_message.is_none());
    }

    #[test]
    fn test_generating_requires_enhancing_first() {
        let mut session = GenerationSession::new();
        assert!(session.start_generating().is_err());

        session.begin().unwrap();
        session.start_generating().unwrap();
        assert!(session.start_generating().is_err());
    }

    #[test]
    fn test_complete_requires_generating() {
        let mut session = GenerationSession::new();
        assert!(session.complete(wallpaper("a cat")).is_err());

        session.begin().unwrap();
        assert!(session.complete(wallpaper("a cat")).is_err());
    }

    #[test]
    fn test_fail_requires_busy_state() {
        let mut session = GenerationSession::new();
        assert!(session.fail("boom".to_string()).is_err());

        session.begin().unwrap();
        session.fail("boom".to_string()).unwrap();
        assert_eq!(session.status(), GenerationStatus::Error);
        assert_eq!(session.report().error_message.as_deref(), Some("boom"));
    }

    #[test]
    fn test_error_keeps_previous_image() {
        let mut session = GenerationSession::new();
        session.begin().unwrap();
        session.start_generating().unwrap();
        session.complete(wallpaper("first")).unwrap();

        session.begin().unwrap();
        session.start_generating().unwrap();
        session.fail("provider down".to_string()).unwrap();

        assert_eq!(session.image().unwrap().prompt, "first");
    }

    #[test]
    fn test_success_replaces_previous_image() {
        let mut session = GenerationSession::new();
        session.begin().unwrap();
        session.start_generating().unwrap();
        session.complete(wallpaper("first")).unwrap();

        session.begin().unwrap();
        session.start_generating().unwrap();
        session.complete(wallpaper("second")).unwrap();

        assert_eq!(session.image().unwrap().prompt, "second");
    }

    #[test]
    fn test_can_generate_requires_non_blank_prompt() {
        let session = GenerationSession::new();
        assert!(!session.can_generate(""));
        assert!(!session.can_generate("   \n"));
        assert!(session.can_generate("a cat on a roof"));
    }

    #[test]
    fn test_can_generate_disabled_while_busy() {
        let mut session = GenerationSession::new();
        session.begin().unwrap();
        assert!(!session.can_generate("a cat on a roof"));

        session.start_generating().unwrap();
        assert!(!session.can_generate("a cat on a roof"));

        session.complete(wallpaper("a cat")).unwrap();
        assert!(session.can_generate("a cat on a roof"));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let session = GenerationSession::new();
        let value = serde_json::to_value(session.report()).unwrap();
        assert_eq!(value["status"], "idle");
        assert!(value.get("errorMessage").is_some());
    }
}
