pub mod catalog;
pub mod commands;
pub mod config;
pub mod credential;
pub mod gemini_client;
pub mod generation;
pub mod session;
pub mod wallpaper;

use commands::{SharedCredentialGate, SharedGenerationSession};
use credential::{ConfigCredentialHost, CredentialGate};
use session::GenerationSession;
use std::sync::{Arc, Mutex};
use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("LuminaWalls starting...");

    tauri::Builder::default()
        .setup(|app| {
            // Generation session (wrapped in Arc for sharing with async commands)
            let session: SharedGenerationSession = Arc::new(Mutex::new(GenerationSession::new()));
            app.manage(session);

            // Probe for a stored credential before the first generation
            let mut gate = CredentialGate::new(Box::new(ConfigCredentialHost));
            gate.check_on_startup();
            let gate: SharedCredentialGate = Arc::new(Mutex::new(gate));
            app.manage(gate);

            info!("App setup complete");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::generate_wallpaper,
            commands::generation_report,
            commands::initial_options,
            commands::list_styles,
            commands::get_settings,
            commands::set_settings,
            commands::credential_status,
            commands::request_credential_selection,
            commands::store_api_key,
            commands::save_wallpaper,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
