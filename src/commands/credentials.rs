//! Credential gate commands

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::info;

use super::SharedCredentialGate;
use crate::config::Config;

/// Gate state for the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStatus {
    pub gate_visible: bool,
}

/// Query whether the credential prompt should be shown
#[tauri::command]
pub fn credential_status(
    gate_state: State<'_, SharedCredentialGate>,
) -> Result<CredentialStatus, String> {
    let gate = gate_state.lock().map_err(|e| e.to_string())?;
    Ok(CredentialStatus {
        gate_visible: gate.is_visible(),
    })
}

/// Run the credential-selection flow. The gate closes once the flow
/// returns, whether or not the user completed it.
#[tauri::command]
pub fn request_credential_selection(
    gate_state: State<'_, SharedCredentialGate>,
) -> Result<CredentialStatus, String> {
    let mut gate = gate_state.lock().map_err(|e| e.to_string())?;
    gate.request_selection();
    Ok(CredentialStatus {
        gate_visible: gate.is_visible(),
    })
}

/// Persist a Gemini API key entered through the selection flow
#[tauri::command]
pub fn store_api_key(key: String) -> Result<(), String> {
    if key.trim().is_empty() {
        return Err("API key is empty".to_string());
    }

    let mut config = Config::load_or_default();
    config.gemini_api_key = key.trim().to_string();
    config.save().map_err(|e| e.to_string())?;

    info!("Gemini API key stored");
    Ok(())
}
