//! Tauri command handlers organized by domain.
//!
//! This module re-exports all command handlers for registration in lib.rs.

mod credentials;
mod generate;
mod images;
mod settings;
mod styles;

// Re-export all commands for lib.rs registration
pub use credentials::*;
pub use generate::*;
pub use images::*;
pub use settings::*;
pub use styles::*;

use std::sync::{Arc, Mutex};
use tauri::AppHandle;
use tracing::warn;

use crate::credential::CredentialGate;
use crate::session::{GenerationSession, GenerationStatus};

/// Shared generation session for use in async contexts
pub type SharedGenerationSession = Arc<Mutex<GenerationSession>>;

/// Shared credential gate state
pub type SharedCredentialGate = Arc<Mutex<CredentialGate>>;

/// Mirror a status transition to the frontend
pub(crate) fn emit_generation_status(app: &AppHandle, status: GenerationStatus) {
    use tauri::Emitter;
    if let Err(e) = app.emit("generation_status", status) {
        warn!("Failed to emit generation status: {}", e);
    }
}

/// Tell the frontend to show or hide the credential prompt
pub(crate) fn emit_credential_gate(app: &AppHandle, visible: bool) {
    use tauri::Emitter;
    if let Err(e) = app.emit("credential_gate", visible) {
        warn!("Failed to emit credential gate event: {}", e);
    }
}
