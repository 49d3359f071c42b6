//! Style catalog command

use crate::catalog::{StyleDescriptor, WALLPAPER_STYLES};

/// List the built-in styles in display order
#[tauri::command]
pub fn list_styles() -> Vec<StyleDescriptor> {
    WALLPAPER_STYLES.to_vec()
}
