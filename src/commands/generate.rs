//! Wallpaper generation commands

use tauri::{AppHandle, State};
use tracing::info;

use super::{emit_credential_gate, emit_generation_status, SharedCredentialGate, SharedGenerationSession};
use crate::config::Config;
use crate::gemini_client::GeminiClient;
use crate::generation::run_generation;
use crate::session::GenerationReport;
use crate::wallpaper::{GeneratedImage, WallpaperOptions};

/// Run the full enhance-then-generate pipeline for one wallpaper
#[tauri::command]
pub async fn generate_wallpaper(
    app: AppHandle,
    session_state: State<'_, SharedGenerationSession>,
    gate_state: State<'_, SharedCredentialGate>,
    options: WallpaperOptions,
) -> Result<GeneratedImage, String> {
    {
        let session = session_state.lock().map_err(|e| e.to_string())?;
        if !session.can_generate(&options.prompt) {
            if options.prompt.trim().is_empty() {
                return Err("Wallpaper prompt is empty".to_string());
            }
            return Err("A generation is already in flight".to_string());
        }
    }

    // The key is re-read from config on every attempt so a freshly stored
    // credential is picked up without restarting the app
    let config = Config::load_or_default();
    let client = match GeminiClient::with_models(
        &config.gemini_api_key,
        &config.text_model,
        &config.image_model,
    ) {
        Ok(client) => client,
        Err(e) => {
            // A client that cannot be built still counts as a failed
            // attempt: the session ends in Error and a missing key reopens
            // the credential gate, exactly like a provider rejection
            {
                let mut session = session_state.lock().map_err(|e| e.to_string())?;
                session.begin().map_err(|e| e.to_string())?;
                emit_generation_status(&app, session.status());
                session.fail(e.to_string()).map_err(|e| e.to_string())?;
                emit_generation_status(&app, session.status());
            }
            if e.is_credential_missing() {
                if let Ok(mut gate) = gate_state.lock() {
                    gate.reopen();
                }
                emit_credential_gate(&app, true);
            }
            return Err(e.to_string());
        }
    };

    info!(
        "Generating wallpaper: prompt={} chars, style={}, {} @ {}",
        options.prompt.len(),
        options.style,
        options.aspect_ratio.as_str(),
        options.resolution.as_str()
    );

    let session_arc = session_state.inner().clone();
    let gate_arc = gate_state.inner().clone();
    let status_app = app.clone();

    let result = run_generation(&client, &session_arc, &gate_arc, options, &move |status| {
        emit_generation_status(&status_app, status)
    })
    .await;

    match result {
        Ok(image) => {
            info!("Wallpaper generated: {}", image.id);
            Ok(image)
        }
        Err(e) => {
            if e.is_credential_missing() {
                emit_credential_gate(&app, true);
            }
            Err(e.to_string())
        }
    }
}

/// Current session snapshot for the frontend
#[tauri::command]
pub fn generation_report(
    session_state: State<'_, SharedGenerationSession>,
) -> Result<GenerationReport, String> {
    let session = session_state.lock().map_err(|e| e.to_string())?;
    Ok(session.report())
}
